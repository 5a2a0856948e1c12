use std::io::{self, Cursor, Write};
use std::sync::{Arc, PoisonError, RwLock};

use crate::stream::{InputStream, OutputStream, WriteStream};
use crate::traits::{Sink, Source, Store};

/// Default capacity of the buffer backing a fresh output stream.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

type SharedBuffer = Arc<RwLock<Option<Vec<u8>>>>;

/// In-memory store holding at most one byte buffer.
///
/// Intended for tests and embedding. Clones share the same buffer, and every
/// stream holds its own handle to it, so streams may outlive the borrow of
/// the store they were opened from.
///
/// An output stream collects bytes privately and replaces the buffer only
/// when it is closed; a stream dropped without closing leaves the store as
/// it was.
#[derive(Clone)]
pub struct MemoryStore {
    buffer: SharedBuffer,
    initial_capacity: usize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE)
    }

    /// Create an empty store whose output streams preallocate `capacity`
    /// bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Arc::new(RwLock::new(None)),
            initial_capacity: capacity,
        }
    }

    /// Create a store that already holds `data`.
    pub fn with_content(data: Vec<u8>) -> Self {
        let store = Self::new();
        *store.buffer.write().unwrap_or_else(PoisonError::into_inner) = Some(data);
        store
    }

    /// Number of bytes currently held, or `None` if the store is empty.
    pub fn content_len(&self) -> io::Result<Option<usize>> {
        let guard = self.buffer.read().map_err(poisoned)?;
        Ok(guard.as_ref().map(Vec::len))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for MemoryStore {
    fn input(&self) -> io::Result<InputStream> {
        let guard = self.buffer.read().map_err(poisoned)?;
        match guard.as_ref() {
            Some(data) => Ok(Box::new(Cursor::new(data.clone()))),
            None => Err(not_found()),
        }
    }
}

impl Sink for MemoryStore {
    fn output(&self) -> io::Result<OutputStream> {
        Ok(Box::new(MemoryWriter {
            pending: Vec::with_capacity(self.initial_capacity),
            target: Arc::clone(&self.buffer),
        }))
    }
}

impl Store for MemoryStore {
    fn exists(&self) -> io::Result<bool> {
        let guard = self.buffer.read().map_err(poisoned)?;
        Ok(guard.is_some())
    }

    fn delete(&self) -> io::Result<()> {
        let mut guard = self.buffer.write().map_err(poisoned)?;
        match guard.take() {
            Some(_) => Ok(()),
            None => Err(not_found()),
        }
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = self.content_len().ok().flatten();
        f.debug_struct("MemoryStore").field("len", &len).finish()
    }
}

struct MemoryWriter {
    pending: Vec<u8>,
    target: SharedBuffer,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl WriteStream for MemoryWriter {
    fn close(self: Box<Self>) -> io::Result<()> {
        let MemoryWriter { pending, target } = *self;
        *target.write().map_err(poisoned)? = Some(pending);
        Ok(())
    }
}

fn not_found() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "memory store holds no data")
}

fn poisoned<T>(_: PoisonError<T>) -> io::Error {
    io::Error::other("memory store lock poisoned")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{read_bytes, write_bytes};

    #[test]
    fn new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(!store.exists().unwrap());
        assert_eq!(store.content_len().unwrap(), None);
    }

    #[test]
    fn write_and_read() {
        let store = MemoryStore::new();
        write_bytes(&store, b"hello world").unwrap();
        assert!(store.exists().unwrap());
        assert_eq!(read_bytes(&store).unwrap(), b"hello world");
        assert_eq!(store.content_len().unwrap(), Some(11));
    }

    #[test]
    fn empty_payload_still_exists() {
        let store = MemoryStore::new();
        write_bytes(&store, b"").unwrap();
        assert!(store.exists().unwrap());
        assert!(read_bytes(&store).unwrap().is_empty());
    }

    #[test]
    fn overwrite_replaces_content() {
        let store = MemoryStore::new();
        write_bytes(&store, b"first version").unwrap();
        write_bytes(&store, b"second").unwrap();
        assert_eq!(read_bytes(&store).unwrap(), b"second");
    }

    #[test]
    fn unclosed_stream_does_not_commit() {
        let store = MemoryStore::new();
        {
            let mut out = store.output().unwrap();
            out.write_all(b"abandoned").unwrap();
        }
        assert!(!store.exists().unwrap());
    }

    #[test]
    fn input_on_empty_store_is_not_found() {
        let store = MemoryStore::new();
        let err = store.input().err().expect("input should fail");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn delete_removes_content() {
        let store = MemoryStore::with_content(b"data".to_vec());
        assert!(store.exists().unwrap());
        store.delete().unwrap();
        assert!(!store.exists().unwrap());
    }

    #[test]
    fn delete_on_empty_store_is_not_found() {
        let store = MemoryStore::new();
        let err = store.delete().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn clones_share_the_buffer() {
        let store = MemoryStore::new();
        let alias = store.clone();
        write_bytes(&alias, b"shared").unwrap();
        assert_eq!(read_bytes(&store).unwrap(), b"shared");
    }

    #[test]
    fn open_input_is_a_snapshot() {
        let store = MemoryStore::with_content(b"before".to_vec());
        let mut input = store.input().unwrap();
        write_bytes(&store, b"after").unwrap();
        let mut seen = Vec::new();
        std::io::Read::read_to_end(&mut input, &mut seen).unwrap();
        assert_eq!(seen, b"before");
    }

    #[test]
    fn preallocated_store_holds_larger_payloads() {
        let store = MemoryStore::with_capacity(4);
        assert!(!store.exists().unwrap());
        let payload = vec![7u8; 1024];
        write_bytes(&store, &payload).unwrap();
        assert_eq!(read_bytes(&store).unwrap(), payload);
    }

    #[test]
    fn debug_shows_length() {
        let store = MemoryStore::with_content(vec![0; 4]);
        assert_eq!(format!("{store:?}"), "MemoryStore { len: Some(4) }");
    }
}
