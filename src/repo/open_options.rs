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

use tracing::debug;

use crate::store::{DataStore, OpenStore};

use super::config::{RenamePolicy, RepoConfig};
use super::repository::EntryRepo;
use super::table::EntryTable;

/// The mode to use to open a dictionary.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub enum OpenMode {
    /// Open an existing dictionary, failing if it doesn't exist.
    Open,

    /// Open an existing dictionary or create a new one if it doesn't exist.
    #[default]
    Create,

    /// Create a new dictionary, failing if it already exists.
    CreateNew,
}

/// Open or create a dictionary.
///
/// This type is a builder used to open or create dictionaries. Typically, when using
/// `OpenOptions`, you'll first call [`new`], then chain method calls to configure how the
/// dictionary will be opened, and then finally call [`open`].
///
/// To open or create a dictionary, you'll need a value which implements [`OpenStore`] to pass to
/// [`open`]. You can think of this value as the configuration necessary to open the backing data
/// store.
///
/// # Examples
/// ```
/// use termbook::repo::{OpenMode, OpenOptions, RenamePolicy};
/// use termbook::store::MemoryConfig;
///
/// let store_config = MemoryConfig::new();
/// let repo = OpenOptions::new()
///     .rename_policy(RenamePolicy::Reject)
///     .seed(false)
///     .mode(OpenMode::CreateNew)
///     .open(&store_config)
///     .unwrap();
///
/// assert!(repo.is_empty());
/// ```
///
/// [`new`]: crate::repo::OpenOptions::new
/// [`open`]: crate::repo::OpenOptions::open
/// [`OpenStore`]: crate::store::OpenStore
#[derive(Debug, Clone, Default)]
pub struct OpenOptions {
    config: RepoConfig,
    mode: OpenMode,
}

impl OpenOptions {
    /// Create a new `OpenOptions`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given `config` for the dictionary.
    ///
    /// This replaces any settings made with [`rename_policy`] or [`seed`].
    ///
    /// [`rename_policy`]: crate::repo::OpenOptions::rename_policy
    /// [`seed`]: crate::repo::OpenOptions::seed
    pub fn config(&mut self, config: RepoConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Set what happens when an entry is renamed onto an existing key.
    ///
    /// The default value is `RenamePolicy::Reject`.
    pub fn rename_policy(&mut self, policy: RenamePolicy) -> &mut Self {
        self.config.rename_policy = policy;
        self
    }

    /// Set whether a newly created dictionary starts with the built-in terms.
    ///
    /// The default value is `true`.
    pub fn seed(&mut self, seed: bool) -> &mut Self {
        self.config.seed = seed;
        self
    }

    /// Set the mode to use to open the dictionary.
    ///
    /// The default value is `OpenMode::Create`.
    pub fn mode(&mut self, mode: OpenMode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// Open or create a dictionary in the data store described by `config`.
    ///
    /// If the data store holds no document yet and the mode allows it, a new dictionary is created
    /// and persisted before this returns.
    ///
    /// # Errors
    /// - `Error::NotFound`: The mode is `OpenMode::Open` and there is no dictionary in the store.
    /// - `Error::AlreadyExists`: The mode is `OpenMode::CreateNew` and a dictionary already exists.
    /// - `Error::Corrupt`: The stored document is not a valid dictionary. It is left untouched.
    /// - `Error::Serialize`: A new dictionary could not be serialized.
    /// - `Error::Store`: An error occurred with the data store.
    pub fn open<C>(&self, config: &C) -> crate::Result<EntryRepo<C::Store>>
    where
        C: OpenStore,
    {
        let mut store = config.open()?;
        let document = store.read_data().map_err(crate::Error::Store)?;

        match (document, self.mode) {
            (Some(_), OpenMode::CreateNew) => Err(crate::Error::AlreadyExists),
            (None, OpenMode::Open) => Err(crate::Error::NotFound),
            (Some(data), _) => {
                let table = EntryTable::from_json(&data)?;
                debug!(entries = table.len(), bytes = data.len(), "Loaded dictionary.");
                Ok(EntryRepo::new(store, table, self.config.clone()))
            }
            (None, _) => self.create(store),
        }
    }

    /// Create a new dictionary in `store` and persist it.
    fn create<S: DataStore>(&self, store: S) -> crate::Result<EntryRepo<S>> {
        let mut repo = EntryRepo::new(store, EntryTable::new(), self.config.clone());
        repo.initialize()?;
        Ok(repo)
    }
}
