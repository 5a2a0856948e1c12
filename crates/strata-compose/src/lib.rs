//! Transformation composition for Strata.
//!
//! A [`Composer`] folds an ordered list of transformations into one. On write
//! the first transformation sees the caller's bytes first and the last one
//! sits next to the raw store; on read the order is mirrored, so whatever was
//! applied last is undone first.
//!
//! ```
//! use strata_compose::Composer;
//! use strata_codec::{Crc32Trailer, HexEncoding};
//! use strata_io::{read_bytes, write_bytes, MemoryStore, Store};
//!
//! let raw = MemoryStore::new();
//! let store = Composer::start(HexEncoding).append(Crc32Trailer).bind(&raw);
//! write_bytes(&store, b"hello").unwrap();
//! assert_eq!(read_bytes(&store).unwrap(), b"hello");
//! assert!(raw.exists().unwrap());
//! ```

pub mod composer;
pub mod error;
pub mod store;

pub use composer::Composer;
pub use error::{ComposeError, ComposeResult};
pub use store::TransformedStore;
