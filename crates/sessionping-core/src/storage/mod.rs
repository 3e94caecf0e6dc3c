//! Storage port for the install-key directory.

pub mod kv_store;

pub use kv_store::KvStore;
