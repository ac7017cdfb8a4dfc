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

use std::fmt;
use std::iter::FromIterator;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::entry::Entry;

/// An ordered table which maps keys to entries.
///
/// Entries are kept in insertion order, which is also the order they are serialized in. The table
/// serializes as a JSON object and refuses to deserialize an object which repeats a key.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct EntryTable {
    entries: Vec<(String, Entry)>,
}

impl EntryTable {
    /// Return a new empty `EntryTable`.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(entry_key, _)| entry_key == key)
    }

    /// Return the entry associated with `key`.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.position(key).map(|index| &self.entries[index].1)
    }

    /// Return whether `key` is in the table.
    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Associate `entry` with `key`.
    ///
    /// A new key is appended to the end of the table. If `key` is already in the table, its entry
    /// is replaced in place and the old entry is returned.
    pub fn insert(&mut self, key: String, entry: Entry) -> Option<Entry> {
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, entry)),
            None => {
                self.entries.push((key, entry));
                None
            }
        }
    }

    /// Remove `key` from the table and return its entry.
    ///
    /// The relative order of the remaining entries is unchanged.
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        let index = self.position(key)?;
        Some(self.entries.remove(index).1)
    }

    /// Return the number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return an iterator over the keys and entries in the table, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry))
    }

    /// Serialize this table as a pretty-printed JSON document.
    pub(super) fn to_json(&self) -> crate::Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(crate::Error::Serialize)
    }

    /// Deserialize a table from a JSON document.
    pub(super) fn from_json(data: &[u8]) -> crate::Result<Self> {
        serde_json::from_slice(data).map_err(crate::Error::Corrupt)
    }
}

impl FromIterator<(String, Entry)> for EntryTable {
    fn from_iter<T: IntoIterator<Item = (String, Entry)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (key, entry) in iter {
            table.insert(key, entry);
        }
        table
    }
}

impl Serialize for EntryTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

struct TableVisitor;

impl<'de> Visitor<'de> for TableVisitor {
    type Value = EntryTable;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of keys to dictionary entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = EntryTable {
            entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
        };

        while let Some((key, entry)) = access.next_entry::<String, Entry>()? {
            if table.contains(&key) {
                return Err(de::Error::custom(format_args!("duplicate key `{}`", key)));
            }
            table.entries.push((key, entry));
        }

        Ok(table)
    }
}

impl<'de> Deserialize<'de> for EntryTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TableVisitor)
    }
}
