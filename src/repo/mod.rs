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

//! The dictionary itself.
//!
//! This module provides [`EntryRepo`], an ordered mapping of terms to [`Entry`] values which is
//! backed by a [`DataStore`]. You can open or create one using [`OpenOptions`].
//!
//! # Persistence
//! There is no commit step. Each method which changes an [`EntryRepo`] serializes the whole
//! dictionary and hands it to the data store, which replaces the previous document atomically. The
//! change only becomes visible in memory once that write has succeeded, so the copy in memory and
//! the copy in the data store never disagree.
//!
//! When a dictionary is created in an empty data store, it starts with a fixed set of built-in
//! terms (see [`seed_entries`]) and is persisted immediately.
//!
//! # Concurrency
//! An [`EntryRepo`] assumes it is the only writer. **Nothing protects against concurrent access
//! from multiple processes.** If two processes change the same dictionary, the last one to write
//! wins and the other's changes are lost.
//!
//! # Genres
//! Every entry has a free-text genre. Entries can be listed by genre using a [`GenreFilter`], and
//! the set of genres in use is computed from the entries each time it is requested.
//!
//! [`DataStore`]: crate::store::DataStore

pub use self::config::{RenamePolicy, RepoConfig};
pub use self::entry::{Entry, UNCLASSIFIED};
pub use self::genre::{GenreFilter, ALL_GENRES};
pub use self::open_options::{OpenMode, OpenOptions};
pub use self::repository::EntryRepo;
pub use self::seed::seed_entries;
pub use self::table::EntryTable;

mod config;
mod entry;
mod genre;
mod open_options;
mod repository;
mod seed;
mod table;
