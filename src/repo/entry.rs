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

use serde::{Deserialize, Serialize};

/// The genre given to entries which don't have one.
pub const UNCLASSIFIED: &str = "unclassified";

fn unclassified() -> String {
    String::from(UNCLASSIFIED)
}

/// A single term in the dictionary.
///
/// The term itself is the key the entry is stored under in an [`EntryRepo`] and is not part of
/// the entry.
///
/// When deserializing, a missing `genre` defaults to [`UNCLASSIFIED`]. The field names written by
/// older versions of the dictionary file (`ジャンル`, `説明`, and `例`) are accepted as aliases.
///
/// [`EntryRepo`]: crate::repo::EntryRepo
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// The classification used for filtering.
    #[serde(default = "unclassified", alias = "ジャンル")]
    pub genre: String,

    /// A free-text explanation of the term.
    #[serde(alias = "説明")]
    pub description: String,

    /// A code sample, displayed verbatim.
    #[serde(alias = "例")]
    pub example: String,
}

impl Entry {
    /// Create a new entry.
    pub fn new(
        description: impl Into<String>,
        example: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            genre: genre.into(),
            description: description.into(),
            example: example.into(),
        }
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self {
            genre: unclassified(),
            description: String::new(),
            example: String::new(),
        }
    }
}
