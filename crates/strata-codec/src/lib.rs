//! Reference transformations for Strata.
//!
//! None of these protect or shrink data. They are small, easy to inspect
//! codecs that make composition order visible in the raw bytes:
//!
//! - [`Identity`] -- passes bytes through unchanged
//! - [`ReverseBytes`] -- stores the payload back to front
//! - [`Crc32Trailer`] -- appends a CRC32 and verifies it on read
//! - [`HexEncoding`] -- stores lowercase hex text
//!
//! [`CodecSpec`] names each of them so chains can be described as text.

pub mod checksum;
pub mod encoding;
pub mod error;
pub mod identity;
pub mod reverse;
pub mod spec;

pub use checksum::Crc32Trailer;
pub use encoding::HexEncoding;
pub use error::CodecError;
pub use identity::Identity;
pub use reverse::ReverseBytes;
pub use spec::CodecSpec;
