use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::stream::{InputStream, OutputStream, WriteStream};
use crate::traits::{Sink, Source, Store};

/// Default capacity of the read and write buffers.
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// A store backed by a single file.
///
/// Opening an output stream creates or truncates the file immediately, so a
/// stream that is dropped without being closed can leave a partial file.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    create_dirs: bool,
    sync_on_close: bool,
    buffer_size: usize,
}

impl FileStore {
    /// Create a store for `path` with default options.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            create_dirs: false,
            sync_on_close: false,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Create missing parent directories when opening an output stream.
    pub fn create_dirs(mut self, enabled: bool) -> Self {
        self.create_dirs = enabled;
        self
    }

    /// `fsync` the file when an output stream is closed.
    pub fn sync_on_close(mut self, enabled: bool) -> Self {
        self.sync_on_close = enabled;
        self
    }

    /// Capacity of the buffers wrapped around the file.
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(1);
        self
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Source for FileStore {
    fn input(&self) -> io::Result<InputStream> {
        let file = File::open(&self.path)?;
        Ok(Box::new(BufReader::with_capacity(self.buffer_size, file)))
    }
}

impl Sink for FileStore {
    fn output(&self) -> io::Result<OutputStream> {
        if self.create_dirs {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(&self.path)?;
        debug!(path = %self.path.display(), "opened file store for writing");
        Ok(Box::new(FileWriter {
            writer: BufWriter::with_capacity(self.buffer_size, file),
            sync: self.sync_on_close,
        }))
    }
}

impl Store for FileStore {
    /// True only for a regular file, so a directory at the path is reported
    /// as missing.
    fn exists(&self) -> io::Result<bool> {
        match fs::metadata(&self.path) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn delete(&self) -> io::Result<()> {
        fs::remove_file(&self.path)?;
        debug!(path = %self.path.display(), "deleted file store");
        Ok(())
    }
}

struct FileWriter {
    writer: BufWriter<File>,
    sync: bool,
}

impl Write for FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl WriteStream for FileWriter {
    fn close(self: Box<Self>) -> io::Result<()> {
        let FileWriter { writer, sync } = *self;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        if sync {
            file.sync_all()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{read_bytes, write_bytes};

    #[test]
    fn missing_file_does_not_exist() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent"));
        assert!(!store.exists().unwrap());
    }

    #[test]
    fn write_and_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data.bin"));
        write_bytes(&store, b"on disk").unwrap();
        assert!(store.exists().unwrap());
        assert_eq!(read_bytes(&store).unwrap(), b"on disk");
        assert_eq!(fs::read(store.path()).unwrap(), b"on disk");
    }

    #[test]
    fn small_buffer_and_sync() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("synced"))
            .buffer_size(2)
            .sync_on_close(true);
        let payload: Vec<u8> = (0..=255).collect();
        write_bytes(&store, &payload).unwrap();
        assert_eq!(read_bytes(&store).unwrap(), payload);
    }

    #[test]
    fn create_dirs_builds_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("leaf");
        let store = FileStore::new(&path).create_dirs(true);
        write_bytes(&store, b"nested").unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn missing_parent_fails_without_create_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("missing").join("leaf"));
        let err = store.output().err().expect("output should fail");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn delete_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("doomed"));
        write_bytes(&store, b"x").unwrap();
        store.delete().unwrap();
        assert!(!store.exists().unwrap());
    }

    #[test]
    fn delete_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never"));
        assert_eq!(store.delete().unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn directory_is_not_a_stored_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(!store.exists().unwrap());
        assert!(store.delete().is_err());
    }

    #[test]
    fn input_on_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never"));
        let err = store.input().err().expect("input should fail");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
