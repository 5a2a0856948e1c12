use std::io;
use std::sync::Arc;

use crate::stream::{InputStream, OutputStream};

/// An endpoint that can open a readable byte stream.
///
/// Every call returns an independent stream; the caller owns it and is
/// responsible for dropping it on every exit path.
pub trait Source: Send + Sync {
    /// Open a new input stream.
    fn input(&self) -> io::Result<InputStream>;
}

/// An endpoint that can open a writable byte stream.
pub trait Sink: Send + Sync {
    /// Open a new output stream. The write completes when the stream is
    /// closed with [`WriteStream::close`](crate::WriteStream::close).
    fn output(&self) -> io::Result<OutputStream>;
}

/// A named persisted resource.
///
/// Implementations must satisfy these invariants:
/// - `exists()` and `delete()` describe the raw resource. Views that wrap a
///   store with transformations delegate both unchanged.
/// - All I/O errors are propagated, never silently ignored.
/// - Concurrent mutation of a single store is not coordinated by this trait.
pub trait Store: Source + Sink {
    /// Whether the resource currently holds data.
    fn exists(&self) -> io::Result<bool>;

    /// Remove the resource. Fails with `NotFound` if there is nothing to
    /// remove.
    fn delete(&self) -> io::Result<()>;
}

/// A reversible byte-stream codec.
///
/// `apply` wraps a sink so that data written to the result is encoded before
/// reaching `sink`; `unapply` wraps a source so that data read from the
/// result is the decoding of what `source` yields. For any payload, reading
/// through `unapply` what was written through `apply` must reproduce the
/// payload exactly.
///
/// Implementations must be stateless across calls: each `apply`/`unapply`
/// (and each stream opened from the returned endpoint) builds fresh wrapper
/// state, so one transformation value can serve any number of independent
/// operations, including concurrent ones.
pub trait Transformation: Send + Sync {
    /// Wrap an outbound endpoint.
    fn apply<'a>(&self, sink: Box<dyn Sink + 'a>) -> Box<dyn Sink + 'a>;

    /// Wrap an inbound endpoint.
    fn unapply<'a>(&self, source: Box<dyn Source + 'a>) -> Box<dyn Source + 'a>;
}

// ---------------------------------------------------------------------------
// Forwarding impls for references and smart pointers
// ---------------------------------------------------------------------------

impl<T: Source + ?Sized> Source for &T {
    fn input(&self) -> io::Result<InputStream> {
        (**self).input()
    }
}

impl<T: Source + ?Sized> Source for Box<T> {
    fn input(&self) -> io::Result<InputStream> {
        (**self).input()
    }
}

impl<T: Source + ?Sized> Source for Arc<T> {
    fn input(&self) -> io::Result<InputStream> {
        (**self).input()
    }
}

impl<T: Sink + ?Sized> Sink for &T {
    fn output(&self) -> io::Result<OutputStream> {
        (**self).output()
    }
}

impl<T: Sink + ?Sized> Sink for Box<T> {
    fn output(&self) -> io::Result<OutputStream> {
        (**self).output()
    }
}

impl<T: Sink + ?Sized> Sink for Arc<T> {
    fn output(&self) -> io::Result<OutputStream> {
        (**self).output()
    }
}

impl<T: Store + ?Sized> Store for &T {
    fn exists(&self) -> io::Result<bool> {
        (**self).exists()
    }

    fn delete(&self) -> io::Result<()> {
        (**self).delete()
    }
}

impl<T: Store + ?Sized> Store for Box<T> {
    fn exists(&self) -> io::Result<bool> {
        (**self).exists()
    }

    fn delete(&self) -> io::Result<()> {
        (**self).delete()
    }
}

impl<T: Store + ?Sized> Store for Arc<T> {
    fn exists(&self) -> io::Result<bool> {
        (**self).exists()
    }

    fn delete(&self) -> io::Result<()> {
        (**self).delete()
    }
}

impl<T: Transformation + ?Sized> Transformation for &T {
    fn apply<'a>(&self, sink: Box<dyn Sink + 'a>) -> Box<dyn Sink + 'a> {
        (**self).apply(sink)
    }

    fn unapply<'a>(&self, source: Box<dyn Source + 'a>) -> Box<dyn Source + 'a> {
        (**self).unapply(source)
    }
}

impl<T: Transformation + ?Sized> Transformation for Box<T> {
    fn apply<'a>(&self, sink: Box<dyn Sink + 'a>) -> Box<dyn Sink + 'a> {
        (**self).apply(sink)
    }

    fn unapply<'a>(&self, source: Box<dyn Source + 'a>) -> Box<dyn Source + 'a> {
        (**self).unapply(source)
    }
}

impl<T: Transformation + ?Sized> Transformation for Arc<T> {
    fn apply<'a>(&self, sink: Box<dyn Sink + 'a>) -> Box<dyn Sink + 'a> {
        (**self).apply(sink)
    }

    fn unapply<'a>(&self, source: Box<dyn Source + 'a>) -> Box<dyn Source + 'a> {
        (**self).unapply(source)
    }
}
