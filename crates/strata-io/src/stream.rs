use std::io::{self, Read, Write};

use crate::traits::{Sink, Source};

/// A readable byte stream opened from a [`Source`].
pub type InputStream = Box<dyn Read + Send>;

/// A writable byte stream that must be closed to complete the write.
///
/// Codecs that need the whole payload (or a trailer) finish their encoding in
/// `close` and then close the stream they wrap, so a single `close` on the
/// outermost stream drains every layer down to the raw endpoint. Errors from
/// any layer are returned from `close`.
pub trait WriteStream: Write + Send {
    /// Finish the stream, flushing every layer beneath it.
    fn close(self: Box<Self>) -> io::Result<()>;
}

/// A writable byte stream opened from a [`Sink`].
pub type OutputStream = Box<dyn WriteStream>;

/// Adapts any writer into a [`WriteStream`] whose `close` is a flush.
#[derive(Debug)]
pub struct FlushOnClose<W> {
    inner: W,
}

impl<W: Write + Send> FlushOnClose<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for FlushOnClose<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write + Send> WriteStream for FlushOnClose<W> {
    fn close(mut self: Box<Self>) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Write `data` to a fresh output stream of `sink` and close it.
pub fn write_bytes<S: Sink + ?Sized>(sink: &S, data: &[u8]) -> io::Result<()> {
    let mut out = sink.output()?;
    out.write_all(data)?;
    out.close()
}

/// Read a fresh input stream of `source` to the end.
pub fn read_bytes<S: Source + ?Sized>(source: &S) -> io::Result<Vec<u8>> {
    let mut input = source.input()?;
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;
    Ok(data)
}

/// Copy `reader` into a fresh output stream of `sink`, closing it afterwards.
///
/// Returns the number of bytes read from `reader`.
pub fn copy_into<R, S>(reader: &mut R, sink: &S) -> io::Result<u64>
where
    R: Read + ?Sized,
    S: Sink + ?Sized,
{
    let mut out = sink.output()?;
    let copied = io::copy(reader, &mut out)?;
    out.close()?;
    Ok(copied)
}
