use thiserror::Error;

/// Errors raised by the composer itself.
///
/// Failures from stores, streams and transformations are not represented
/// here; they surface unchanged as `std::io::Error`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    /// A chain was requested from a sequence with no transformations.
    #[error("cannot compose an empty chain of transformations")]
    EmptyChain,
}

pub type ComposeResult<T> = Result<T, ComposeError>;
