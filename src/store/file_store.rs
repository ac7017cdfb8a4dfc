#![cfg(feature = "store-file")]

use std::ffi::OsStr;
use std::fs::{create_dir_all, read, remove_file, rename, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use uuid::Uuid;

use super::data_store::DataStore;
use super::open_store::OpenStore;

/// The suffix of staging files written next to the document.
const STAGING_SUFFIX: &str = "tmp";

/// The configuration for opening a [`FileStore`].
///
/// [`FileStore`]: crate::store::FileStore
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(docsrs, doc(cfg(feature = "store-file")))]
pub struct FileConfig {
    /// The path of the JSON document.
    pub path: PathBuf,
}

impl FileConfig {
    /// Create a new `FileConfig` for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OpenStore for FileConfig {
    type Store = FileStore;

    fn open(&self) -> crate::Result<Self::Store> {
        if self.path.file_name().is_none() {
            return Err(crate::Error::Store(anyhow!(
                "The path '{}' does not name a file.",
                self.path.display()
            )));
        }

        if self.path.is_dir() {
            return Err(crate::Error::Store(anyhow!(
                "The path '{}' is a directory.",
                self.path.display()
            )));
        }

        // The document may live in a directory which hasn't been created yet.
        let directory = parent_directory(&self.path);
        create_dir_all(&directory)
            .map_err(|error| crate::Error::Store(anyhow::Error::from(error)))?;

        Ok(FileStore {
            path: self.path.clone(),
            directory,
        })
    }
}

/// Return the directory containing `path`, which is `.` for a bare file name.
fn parent_directory(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// A `DataStore` which stores the dictionary as a single file in the local file system.
///
/// Writes go to a uniquely named staging file in the same directory, which is then atomically
/// renamed over the document. Readers never observe a partially written document.
///
/// You can use [`FileConfig`] to open a data store of this type.
///
/// [`FileConfig`]: crate::store::FileConfig
#[derive(Debug)]
#[cfg_attr(docsrs, doc(cfg(feature = "store-file")))]
pub struct FileStore {
    /// The path of the document.
    path: PathBuf,

    /// The directory containing the document.
    directory: PathBuf,
}

impl FileStore {
    /// Return the path of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return a new staging path.
    fn staging_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or("dictionary");
        let uuid_str = Uuid::new_v4().as_hyphenated().to_string();
        self.directory
            .join(format!(".{}.{}.{}", file_name, uuid_str, STAGING_SUFFIX))
    }
}

impl DataStore for FileStore {
    fn read_data(&mut self) -> anyhow::Result<Option<Vec<u8>>> {
        match read(&self.path) {
            Ok(data) => Ok(Some(data)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn write_data(&mut self, data: &[u8]) -> anyhow::Result<()> {
        let staging_path = self.staging_path();

        // Write to a staging file and then atomically move it to its final destination.
        let result = File::create(&staging_path)
            .and_then(|mut staging_file| {
                staging_file.write_all(data)?;
                staging_file.sync_all()
            })
            .and_then(|()| rename(&staging_path, &self.path));

        if let Err(error) = result {
            // The staging file may or may not exist at this point.
            let _ = remove_file(&staging_path);
            return Err(error.into());
        }

        Ok(())
    }
}
