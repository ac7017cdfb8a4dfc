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

#![allow(dead_code)]

use std::ops::{Deref, DerefMut};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use rstest::*;
use tempfile::TempDir;

use termbook::repo::{Entry, EntryRepo, OpenMode, OpenOptions};
#[cfg(feature = "store-file")]
use termbook::store::FileConfig;
use termbook::store::{DataStore, MemoryConfig, MemoryStore, OpenStore};

/// A value which is tied to the lifetime of a temporary directory.
pub struct WithTempDir<T> {
    directory: TempDir,
    value: T,
}

impl<T> WithTempDir<T> {
    pub fn directory(&self) -> &Path {
        self.directory.path()
    }
}

impl<T> Deref for WithTempDir<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> DerefMut for WithTempDir<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.value
    }
}

/// A data store config whose stores can be told to fail every write.
#[derive(Debug, Clone, Default)]
pub struct FailingConfig {
    inner: MemoryConfig,
    fail_writes: Arc<AtomicBool>,
}

impl FailingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn data(&self) -> Option<Vec<u8>> {
        self.inner.data()
    }
}

impl OpenStore for FailingConfig {
    type Store = FailingStore;

    fn open(&self) -> termbook::Result<Self::Store> {
        Ok(FailingStore {
            inner: self.inner.open()?,
            fail_writes: Arc::clone(&self.fail_writes),
        })
    }
}

#[derive(Debug)]
pub struct FailingStore {
    inner: MemoryStore,
    fail_writes: Arc<AtomicBool>,
}

impl DataStore for FailingStore {
    fn read_data(&mut self) -> anyhow::Result<Option<Vec<u8>>> {
        self.inner.read_data()
    }

    fn write_data(&mut self, data: &[u8]) -> anyhow::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("The store is unwritable."));
        }
        self.inner.write_data(data)
    }
}

/// Return an entry whose text is derived from `name`.
pub fn entry(name: &str, genre: &str) -> Entry {
    Entry::new(
        format!("The {} description", name),
        format!("{}()", name),
        genre,
    )
}

/// Open an empty dictionary in the given memory store.
pub fn open_empty(config: &MemoryConfig) -> EntryRepo<MemoryStore> {
    OpenOptions::new()
        .seed(false)
        .mode(OpenMode::CreateNew)
        .open(config)
        .unwrap()
}

/// Open the existing dictionary in the given memory store.
pub fn reopen(config: &MemoryConfig) -> EntryRepo<MemoryStore> {
    OpenOptions::new()
        .mode(OpenMode::Open)
        .open(config)
        .unwrap()
}

#[fixture]
pub fn store_config() -> MemoryConfig {
    MemoryConfig::new()
}

#[fixture]
pub fn empty_repo() -> EntryRepo<MemoryStore> {
    open_empty(&MemoryConfig::new())
}

#[fixture]
pub fn seeded_repo() -> EntryRepo<MemoryStore> {
    OpenOptions::new().open(&MemoryConfig::new()).unwrap()
}

/// A dictionary with entries of the genres `itertools` and `pandas`, interleaved.
#[fixture]
pub fn genre_repo() -> EntryRepo<MemoryStore> {
    let mut repo = open_empty(&MemoryConfig::new());
    repo.insert("permutations", entry("permutations", "itertools"))
        .unwrap();
    repo.insert("read_csv", entry("read_csv", "pandas")).unwrap();
    repo.insert("product", entry("product", "itertools"))
        .unwrap();
    repo.insert("to_csv", entry("to_csv", "pandas")).unwrap();
    repo
}

#[cfg(feature = "store-file")]
#[fixture]
pub fn file_config() -> WithTempDir<FileConfig> {
    let directory = tempfile::tempdir().unwrap();
    let config = FileConfig::new(directory.as_ref().join("dictionary_data.json"));
    WithTempDir {
        directory,
        value: config,
    }
}
