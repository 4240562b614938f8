//! Blob stores
//!
//! The game only ever writes or reads one whole blob at a time.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no blob stored")]
    NotFound,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Whole-blob storage used for save games
pub trait PersistenceStore {
    /// Replace the stored blob
    fn write_blob(&mut self, bytes: &[u8]) -> Result<(), StoreError>;

    /// Read the stored blob, `StoreError::NotFound` if nothing was written yet
    fn read_blob(&self) -> Result<Vec<u8>, StoreError>;
}

/// Store backed by a single file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceStore for FileStore {
    fn write_blob(&mut self, bytes: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, bytes)?;
        log::debug!("Wrote {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }

    fn read_blob(&self) -> Result<Vec<u8>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StoreError::NotFound),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Option<Vec<u8>>,
    fail_writes: bool,
    fail_reads: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a blob
    pub fn with_blob(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            blob: Some(bytes.into()),
            ..Self::default()
        }
    }

    /// Store whose writes always fail (simulates a read-only disk)
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Store whose reads always fail (simulates a broken disk)
    pub fn unreadable() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn blob(&self) -> Option<&[u8]> {
        self.blob.as_deref()
    }
}

impl PersistenceStore for MemoryStore {
    fn write_blob(&mut self, bytes: &[u8]) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        self.blob = Some(bytes.to_vec());
        Ok(())
    }

    fn read_blob(&self) -> Result<Vec<u8>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Io(io::Error::other("store is unreadable")));
        }
        self.blob.clone().ok_or(StoreError::NotFound)
    }
}
