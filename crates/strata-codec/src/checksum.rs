use std::io::{self, Cursor, Read, Write};

use crc32fast::Hasher;
use strata_io::{InputStream, OutputStream, Sink, Source, Transformation, WriteStream};

/// Size of the trailer in bytes.
pub const TRAILER_LEN: usize = 4;

/// Appends the CRC32 of the payload and verifies it on read.
///
/// Stored format:
/// ```text
/// [N bytes: payload]
/// [4 bytes: CRC32 of payload (little-endian u32)]
/// ```
///
/// Writes stream straight through to the inner sink; the trailer is emitted
/// on close. Reads load the whole stored value, fail with `InvalidData` if it
/// is shorter than the trailer or the checksum does not match, and yield the
/// payload without the trailer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Crc32Trailer;

impl Transformation for Crc32Trailer {
    fn apply<'a>(&self, sink: Box<dyn Sink + 'a>) -> Box<dyn Sink + 'a> {
        Box::new(ChecksummedSink { inner: sink })
    }

    fn unapply<'a>(&self, source: Box<dyn Source + 'a>) -> Box<dyn Source + 'a> {
        Box::new(VerifiedSource { inner: source })
    }
}

struct ChecksummedSink<'a> {
    inner: Box<dyn Sink + 'a>,
}

impl Sink for ChecksummedSink<'_> {
    fn output(&self) -> io::Result<OutputStream> {
        Ok(Box::new(ChecksumWriter {
            hasher: Hasher::new(),
            inner: self.inner.output()?,
        }))
    }
}

struct VerifiedSource<'a> {
    inner: Box<dyn Source + 'a>,
}

impl Source for VerifiedSource<'_> {
    fn input(&self) -> io::Result<InputStream> {
        let mut data = Vec::new();
        self.inner.input()?.read_to_end(&mut data)?;
        if data.len() < TRAILER_LEN {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("checksummed payload too short: {} bytes", data.len()),
            ));
        }
        let split = data.len() - TRAILER_LEN;
        let mut trailer = [0u8; TRAILER_LEN];
        trailer.copy_from_slice(&data[split..]);
        let expected = u32::from_le_bytes(trailer);
        data.truncate(split);
        let computed = crc32fast::hash(&data);
        if computed != expected {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("CRC32 mismatch: stored {expected:08x}, computed {computed:08x}"),
            ));
        }
        Ok(Box::new(Cursor::new(data)))
    }
}

struct ChecksumWriter {
    hasher: Hasher,
    inner: OutputStream,
}

impl Write for ChecksumWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.hasher.update(&buf[..written]);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl WriteStream for ChecksumWriter {
    fn close(self: Box<Self>) -> io::Result<()> {
        let ChecksumWriter { hasher, mut inner } = *self;
        inner.write_all(&hasher.finalize().to_le_bytes())?;
        inner.close()
    }
}
