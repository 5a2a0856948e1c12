//! Byte-stream capabilities for Strata.
//!
//! This crate defines the narrow contracts every other Strata crate is built
//! on, plus two concrete stores:
//!
//! - [`Source`] -- opens a readable byte stream
//! - [`Sink`] -- opens a writable byte stream
//! - [`Store`] -- a named persisted resource: source, sink, existence check
//!   and deletion
//! - [`Transformation`] -- a reversible codec that wraps sinks on the way out
//!   and sources on the way in
//!
//! # Storage Backends
//!
//! - [`MemoryStore`] -- a single shared byte buffer, for tests and embedding
//! - [`FileStore`] -- a single file on disk, usually resolved through
//!   [`StoreConfig`]
//!
//! # Design Rules
//!
//! 1. All capability operations are synchronous and return `std::io::Result`.
//! 2. Errors from an endpoint are propagated unchanged, never logged.
//! 3. Output streams are finished with [`WriteStream::close`]; dropping an
//!    output stream without closing it abandons the write.
//! 4. Existence and deletion always describe the raw resource.

pub mod config;
pub mod error;
pub mod file;
pub mod memory;
pub mod stream;
pub mod traits;

pub use config::StoreConfig;
pub use error::{ConfigError, ConfigResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use stream::{
    copy_into, read_bytes, write_bytes, FlushOnClose, InputStream, OutputStream, WriteStream,
};
pub use traits::{Sink, Source, Store, Transformation};
