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

use std::sync::{Arc, Mutex};

use anyhow::anyhow;

use super::data_store::DataStore;
use super::open_store::OpenStore;

type Document = Arc<Mutex<Option<Vec<u8>>>>;

/// The configuration for opening a [`MemoryStore`].
///
/// Every store opened from the same `MemoryConfig` (or a clone of it) shares the same document, so
/// a dictionary can be closed and opened again within a process.
///
/// [`MemoryStore`]: crate::store::MemoryStore
#[derive(Debug, Clone, Default)]
pub struct MemoryConfig {
    data: Document,
}

impl MemoryConfig {
    /// Create a new `MemoryConfig` with nothing stored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new `MemoryConfig` which already holds the given document.
    pub fn with_data(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: Arc::new(Mutex::new(Some(data.into()))),
        }
    }

    /// Return a copy of the currently stored document, if any.
    pub fn data(&self) -> Option<Vec<u8>> {
        match self.data.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl OpenStore for MemoryConfig {
    type Store = MemoryStore;

    fn open(&self) -> crate::Result<Self::Store> {
        Ok(MemoryStore {
            data: Arc::clone(&self.data),
        })
    }
}

/// A `DataStore` which stores data in memory.
///
/// Unlike other `DataStore` implementations, data in a `MemoryStore` is not stored persistently
/// and is only accessible to the current process. This data store is useful for testing.
///
/// You can use [`MemoryConfig`] to open a data store of this type.
///
/// [`MemoryConfig`]: crate::store::MemoryConfig
#[derive(Debug)]
pub struct MemoryStore {
    data: Document,
}

impl DataStore for MemoryStore {
    fn read_data(&mut self) -> anyhow::Result<Option<Vec<u8>>> {
        let guard = self
            .data
            .lock()
            .map_err(|_| anyhow!("The memory store lock is poisoned."))?;
        Ok(guard.clone())
    }

    fn write_data(&mut self, data: &[u8]) -> anyhow::Result<()> {
        let mut guard = self
            .data
            .lock()
            .map_err(|_| anyhow!("The memory store lock is poisoned."))?;
        *guard = Some(data.to_owned());
        Ok(())
    }
}
