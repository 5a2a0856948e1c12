use std::io::{self, Cursor, Read, Write};

use strata_io::{InputStream, OutputStream, Sink, Source, Transformation, WriteStream};

/// Stores the payload back to front.
///
/// The whole payload is buffered: the writer emits the reversed bytes when it
/// is closed, and the reader loads the stored bytes before handing out the
/// first one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReverseBytes;

impl Transformation for ReverseBytes {
    fn apply<'a>(&self, sink: Box<dyn Sink + 'a>) -> Box<dyn Sink + 'a> {
        Box::new(ReversedSink { inner: sink })
    }

    fn unapply<'a>(&self, source: Box<dyn Source + 'a>) -> Box<dyn Source + 'a> {
        Box::new(ReversedSource { inner: source })
    }
}

struct ReversedSink<'a> {
    inner: Box<dyn Sink + 'a>,
}

impl Sink for ReversedSink<'_> {
    fn output(&self) -> io::Result<OutputStream> {
        Ok(Box::new(ReversingWriter {
            buffer: Vec::new(),
            inner: self.inner.output()?,
        }))
    }
}

struct ReversedSource<'a> {
    inner: Box<dyn Source + 'a>,
}

impl Source for ReversedSource<'_> {
    fn input(&self) -> io::Result<InputStream> {
        let mut data = Vec::new();
        self.inner.input()?.read_to_end(&mut data)?;
        data.reverse();
        Ok(Box::new(Cursor::new(data)))
    }
}

struct ReversingWriter {
    buffer: Vec<u8>,
    inner: OutputStream,
}

impl Write for ReversingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    // Nothing reaches the inner stream before close.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl WriteStream for ReversingWriter {
    fn close(self: Box<Self>) -> io::Result<()> {
        let ReversingWriter { mut buffer, mut inner } = *self;
        buffer.reverse();
        inner.write_all(&buffer)?;
        inner.close()
    }
}
