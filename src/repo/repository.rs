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

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::store::DataStore;

use super::config::{RenamePolicy, RepoConfig};
use super::entry::Entry;
use super::genre::{GenreFilter, ALL_GENRES};
use super::seed::seed_entries;
use super::table::EntryTable;

/// A persistent, ordered dictionary of terms.
///
/// An `EntryRepo` maps keys to [`Entry`] values and stores them in a [`DataStore`]. Entries are
/// kept in the order they were added.
///
/// Unlike other kinds of storage, there is no separate commit step. Every method which changes the
/// dictionary rewrites the whole data store before it returns, and the change is only applied in
/// memory once that write has succeeded. If a method returns `Err`, the dictionary is unchanged
/// both in memory and in the data store.
///
/// To open or create an `EntryRepo`, use [`OpenOptions`].
///
/// [`Entry`]: crate::repo::Entry
/// [`DataStore`]: crate::store::DataStore
/// [`OpenOptions`]: crate::repo::OpenOptions
#[derive(Debug)]
pub struct EntryRepo<S: DataStore> {
    store: S,
    table: EntryTable,
    config: RepoConfig,
}

impl<S: DataStore> EntryRepo<S> {
    pub(super) fn new(store: S, table: EntryTable, config: RepoConfig) -> Self {
        Self {
            store,
            table,
            config,
        }
    }

    /// Return the configuration this dictionary was opened with.
    pub fn config(&self) -> &RepoConfig {
        &self.config
    }

    /// Return whether the given `key` exists in this dictionary.
    pub fn contains(&self, key: &str) -> bool {
        self.table.contains(key)
    }

    /// Return the entry associated with `key`.
    ///
    /// Keys are matched exactly. This returns `None` if there is no such entry.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.table.get(key)
    }

    /// Return the number of entries in this dictionary.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Return whether this dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Return an iterator over all the keys in this dictionary, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.table.iter().map(|(key, _)| key)
    }

    /// Return an iterator over all the keys and entries in this dictionary, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.table.iter()
    }

    /// Return the entries which pass `filter` along with their keys, in order.
    pub fn list(&self, filter: &GenreFilter) -> Vec<(&str, &Entry)> {
        self.table
            .iter()
            .filter(|(_, entry)| filter.matches(&entry.genre))
            .collect()
    }

    /// Return the set of distinct genres currently in use, sorted.
    pub fn genres(&self) -> BTreeSet<&str> {
        self.table
            .iter()
            .map(|(_, entry)| entry.genre.as_str())
            .collect()
    }

    /// Return the choices for a genre selector.
    ///
    /// This is [`ALL_GENRES`] followed by each genre in [`genres`]. A genre which is literally
    /// named [`ALL_GENRES`] is only listed once.
    ///
    /// [`ALL_GENRES`]: crate::repo::ALL_GENRES
    /// [`genres`]: crate::repo::EntryRepo::genres
    pub fn genre_options(&self) -> Vec<&str> {
        let mut options = vec![ALL_GENRES];
        options.extend(self.genres().into_iter().filter(|&genre| genre != ALL_GENRES));
        options
    }

    /// Add a new entry under `key` at the end of the dictionary.
    ///
    /// # Errors
    /// - `Error::AlreadyExists`: There is already an entry with this `key`.
    /// - `Error::Serialize`: The dictionary could not be serialized.
    /// - `Error::Store`: An error occurred with the data store.
    pub fn insert(&mut self, key: impl Into<String>, entry: Entry) -> crate::Result<()> {
        let key = key.into();

        if self.table.contains(&key) {
            warn!(key = %key, "Refusing to add an entry which already exists.");
            return Err(crate::Error::AlreadyExists);
        }

        let mut table = self.table.clone();
        table.insert(key, entry);
        self.commit(table)
    }

    /// Replace the entry under `old_key` with `entry`, moving it to `new_key`.
    ///
    /// If `new_key` is the same as `old_key`, the entry keeps its position. Otherwise, the entry is
    /// removed from `old_key` and added again under `new_key` at the end of the dictionary. All the
    /// fields of the entry are replaced.
    ///
    /// If `new_key` already belongs to a different entry, the outcome depends on the
    /// [`RenamePolicy`] this dictionary was opened with.
    ///
    /// # Errors
    /// - `Error::NotFound`: There is no entry with the key `old_key`.
    /// - `Error::AlreadyExists`: `new_key` belongs to a different entry and the rename policy is
    /// `RenamePolicy::Reject`.
    /// - `Error::Serialize`: The dictionary could not be serialized.
    /// - `Error::Store`: An error occurred with the data store.
    ///
    /// [`RenamePolicy`]: crate::repo::RenamePolicy
    pub fn update(
        &mut self,
        old_key: &str,
        new_key: impl Into<String>,
        entry: Entry,
    ) -> crate::Result<()> {
        let new_key = new_key.into();

        if !self.table.contains(old_key) {
            warn!(key = %old_key, "Refusing to update an entry which does not exist.");
            return Err(crate::Error::NotFound);
        }

        let mut table = self.table.clone();

        if new_key != old_key {
            if table.contains(&new_key) {
                match self.config.rename_policy {
                    RenamePolicy::Reject => {
                        warn!(
                            from = %old_key,
                            to = %new_key,
                            "Refusing to rename an entry onto another entry."
                        );
                        return Err(crate::Error::AlreadyExists);
                    }
                    RenamePolicy::Overwrite => {
                        warn!(
                            from = %old_key,
                            to = %new_key,
                            "Renaming an entry onto another entry, which will be replaced."
                        );
                    }
                }
            }
            table.remove(old_key);
        }

        table.insert(new_key, entry);
        self.commit(table)
    }

    /// Remove the entry associated with `key` and return it.
    ///
    /// # Errors
    /// - `Error::NotFound`: There is no entry with this `key`.
    /// - `Error::Serialize`: The dictionary could not be serialized.
    /// - `Error::Store`: An error occurred with the data store.
    pub fn remove(&mut self, key: &str) -> crate::Result<Entry> {
        let mut table = self.table.clone();

        let entry = match table.remove(key) {
            Some(entry) => entry,
            None => {
                warn!(key = %key, "Refusing to remove an entry which does not exist.");
                return Err(crate::Error::NotFound);
            }
        };

        self.commit(table)?;
        Ok(entry)
    }

    /// Write the whole dictionary to the data store.
    ///
    /// Every method which changes the dictionary already does this. Calling it directly is only
    /// useful to rewrite a document in the current format, for example one which was written with
    /// older field names.
    ///
    /// # Errors
    /// - `Error::Serialize`: The dictionary could not be serialized.
    /// - `Error::Store`: An error occurred with the data store.
    pub fn persist(&mut self) -> crate::Result<()> {
        let data = self.table.to_json()?;
        self.write(&data, self.table.len())
    }

    /// Read the dictionary from the data store again, discarding the copy in memory.
    ///
    /// If the data store no longer holds a dictionary, a new one is created and persisted the same
    /// way [`OpenOptions::open`] creates one, starting with the built-in terms if
    /// [`RepoConfig::seed`] is set.
    ///
    /// # Errors
    /// - `Error::Corrupt`: The stored document is not a valid dictionary. It is left untouched.
    /// - `Error::Serialize`: A new dictionary could not be serialized.
    /// - `Error::Store`: An error occurred with the data store.
    ///
    /// [`OpenOptions::open`]: crate::repo::OpenOptions::open
    /// [`RepoConfig::seed`]: crate::repo::RepoConfig::seed
    pub fn reload(&mut self) -> crate::Result<()> {
        match self.store.read_data().map_err(crate::Error::Store)? {
            Some(data) => {
                self.table = EntryTable::from_json(&data)?;
                debug!(entries = self.table.len(), "Reloaded dictionary.");
                Ok(())
            }
            None => self.initialize(),
        }
    }

    /// Consume this dictionary and return its data store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Replace this dictionary with a new one and persist it.
    pub(super) fn initialize(&mut self) -> crate::Result<()> {
        let table = if self.config.seed {
            seed_entries()
        } else {
            EntryTable::new()
        };
        info!(entries = table.len(), "Creating a new dictionary.");
        self.commit(table)
    }

    /// Persist `table` and then make it the current table.
    ///
    /// If persisting fails, the current table is left as it was.
    fn commit(&mut self, table: EntryTable) -> crate::Result<()> {
        let data = table.to_json()?;
        self.write(&data, table.len())?;
        self.table = table;
        Ok(())
    }

    fn write(&mut self, data: &[u8], entries: usize) -> crate::Result<()> {
        self.store.write_data(data).map_err(crate::Error::Store)?;
        debug!(entries, bytes = data.len(), "Persisted dictionary.");
        Ok(())
    }
}
