/*
 * Copyright 2019-2020 Wren Powell
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

/// What to do when an entry is renamed onto a key which already belongs to another entry.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub enum RenamePolicy {
    /// Fail with `Error::AlreadyExists` and leave the dictionary unchanged.
    #[default]
    Reject,

    /// Replace the other entry.
    ///
    /// The renamed entry takes over the position of the entry it replaces.
    Overwrite,
}

/// The configuration for a dictionary.
///
/// This type is used with [`OpenOptions`] to configure how a dictionary behaves once opened.
///
/// # Examples
/// ```
/// use termbook::repo::{RenamePolicy, RepoConfig};
///
/// let mut config = RepoConfig::default();
/// config.rename_policy = RenamePolicy::Overwrite;
/// config.seed = false;
/// ```
///
/// [`OpenOptions`]: crate::repo::OpenOptions
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
#[non_exhaustive]
pub struct RepoConfig {
    /// What to do when a rename collides with an existing key.
    ///
    /// The default value is `RenamePolicy::Reject`.
    pub rename_policy: RenamePolicy,

    /// Whether a newly created dictionary starts with the built-in terms.
    ///
    /// When this is `false`, a new dictionary starts empty. This has no effect when opening a
    /// dictionary which already exists.
    ///
    /// The default value is `true`.
    pub seed: bool,
}

impl Default for RepoConfig {
    fn default() -> Self {
        RepoConfig {
            rename_policy: RenamePolicy::default(),
            seed: true,
        }
    }
}
