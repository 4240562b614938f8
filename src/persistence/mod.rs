//! Save/load persistence
//!
//! Features:
//! - Versioned JSON envelope
//! - Sanity validation of loaded sessions
//! - Blob stores: file-backed for the binary, in-memory for tests and embedding

pub mod envelope;
pub mod store;

pub use envelope::{SaveEnvelope, SaveRecord, decode, encode};
pub use store::{FileStore, MemoryStore, PersistenceStore, StoreError};
