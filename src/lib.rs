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

//! `termbook` is a library for keeping a small personal dictionary of programming terms.
//!
//! Each term maps to an entry with a genre, a description, and a code example. The whole
//! dictionary is stored as one JSON document, which is rewritten every time the dictionary
//! changes.
//!
//! This crate provides the following:
//! - `EntryRepo` is the dictionary. It supports lookup by exact key, listing by genre, adding,
//! editing (including renaming), and removing entries.
//! - `OpenOptions` opens a dictionary, creating it with a set of built-in terms if it doesn't
//!   exist.
//!
//! A dictionary stores its data in a `DataStore`, which is a small trait that can be implemented to
//! create new storage backends. The following data stores are provided out of the box:
//! - `FileStore` stores the dictionary in a JSON file in the local file system.
//! - `MemoryStore` stores the dictionary in memory.
//!
//! # Examples
//! ```
//! use termbook::repo::{Entry, GenreFilter, OpenOptions};
//! use termbook::store::MemoryConfig;
//!
//! fn main() -> termbook::Result<()> {
//!     // Open a dictionary which stores data in memory, starting with the built-in terms.
//!     let mut repo = OpenOptions::new().open(&MemoryConfig::new())?;
//!
//!     // Add a new term. This is persisted before it returns.
//!     repo.insert("chain", Entry::new(
//!         "Chain several iterables together",
//!         "from itertools import chain\nlist(chain([1], [2]))",
//!         "itertools",
//!     ))?;
//!
//!     // Look it up by its exact key.
//!     assert_eq!(repo.get("chain").unwrap().genre, "itertools");
//!
//!     // List every term in a genre.
//!     let itertools = repo.list(&GenreFilter::Genre(String::from("itertools")));
//!     assert_eq!(itertools.last().unwrap().0, "chain");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//! Some functionality is gated behind cargo features:
//!
//! Type | Cargo Feature
//! --- | ---
//! `FileStore` | `store-file`
//!
//! The `store-file` feature is enabled by default and is required by the `termbook` binary.

pub use error::{Error, Result};

mod error;
pub mod repo;
pub mod store;
