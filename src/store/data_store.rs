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

use static_assertions::assert_obj_safe;

/// A persistent home for a single serialized dictionary.
///
/// A `DataStore` stores one document and replaces it wholesale on every write. Data stores are
/// used as the storage backend for [`EntryRepo`].
///
/// [`EntryRepo`]: crate::repo::EntryRepo
pub trait DataStore: fmt::Debug + Send {
    /// Return the bytes of the stored document.
    ///
    /// If nothing has been written to this store yet, this returns `Ok(None)`. An empty document
    /// is `Ok(Some(vec![]))`, not `Ok(None)`.
    fn read_data(&mut self) -> anyhow::Result<Option<Vec<u8>>>;

    /// Replace the stored document with the given `data`.
    ///
    /// If this method returns `Ok`, `data` is stored persistently and a subsequent `read_data`
    /// returns it. If this method returns `Err`, the previous document is still stored and no
    /// partially written document is ever visible to readers.
    ///
    /// This is an atomic operation.
    fn write_data(&mut self, data: &[u8]) -> anyhow::Result<()>;
}

assert_obj_safe!(DataStore);

impl DataStore for Box<dyn DataStore> {
    fn read_data(&mut self) -> anyhow::Result<Option<Vec<u8>>> {
        self.as_mut().read_data()
    }

    fn write_data(&mut self, data: &[u8]) -> anyhow::Result<()> {
        self.as_mut().write_data(data)
    }
}
