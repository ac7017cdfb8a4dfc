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

use std::result;

use thiserror::Error as DeriveError;

/// The error type for operations with a dictionary.
#[derive(Debug, DeriveError)]
pub enum Error {
    /// An entry with the given key already exists.
    #[error("An entry with this key already exists.")]
    AlreadyExists,

    /// There is no entry with the given key.
    #[error("There is no entry with this key.")]
    NotFound,

    /// The stored dictionary could not be parsed.
    ///
    /// The data store is left untouched when this is returned.
    #[error("The stored dictionary is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    /// The dictionary could not be serialized.
    #[error("The dictionary could not be serialized: {0}")]
    Serialize(#[source] serde_json::Error),

    /// An error occurred with the data store.
    #[error("An error occurred with the data store: {0}")]
    Store(anyhow::Error),
}

/// The result type for operations with a dictionary.
pub type Result<T> = result::Result<T, Error>;
