use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("unknown codec: {0:?} (expected one of identity, reverse, crc32, hex)")]
    Unknown(String),
}
