//! Low-level backends for persisting a dictionary.
//!
//! A data store holds exactly one serialized document: the whole dictionary. It provides only two
//! operations, reading that document back and replacing it, and doesn't have to know anything about
//! entries, keys, or genres. Those are handled at a higher level by [`EntryRepo`].
//!
//! All data stores implement the [`DataStore`] trait.
//!
//! For each data store, there is a corresponding type which provides the necessary configuration to
//! open that data store. These config types implement [`OpenStore`]. Typically, you'll use these
//! config types with [`OpenOptions`] to open a dictionary.
//!
//! [`DataStore`]: crate::store::DataStore
//! [`OpenStore`]: crate::store::OpenStore
//! [`EntryRepo`]: crate::repo::EntryRepo
//! [`OpenOptions`]: crate::repo::OpenOptions

pub use self::data_store::DataStore;
#[cfg(feature = "store-file")]
pub use self::file_store::{FileConfig, FileStore};
pub use self::memory_store::{MemoryConfig, MemoryStore};
pub use self::open_store::OpenStore;

mod data_store;
mod file_store;
mod memory_store;
mod open_store;
