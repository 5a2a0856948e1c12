use std::io::{self, Cursor, Read, Write};

use strata_io::{InputStream, OutputStream, Sink, Source, Transformation, WriteStream};

/// Stores the payload as lowercase hex text.
///
/// Encoding streams chunk by chunk. Decoding loads the stored text and fails
/// with `InvalidData` on odd length or non-hex characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HexEncoding;

impl Transformation for HexEncoding {
    fn apply<'a>(&self, sink: Box<dyn Sink + 'a>) -> Box<dyn Sink + 'a> {
        Box::new(HexSink { inner: sink })
    }

    fn unapply<'a>(&self, source: Box<dyn Source + 'a>) -> Box<dyn Source + 'a> {
        Box::new(HexSource { inner: source })
    }
}

struct HexSink<'a> {
    inner: Box<dyn Sink + 'a>,
}

impl Sink for HexSink<'_> {
    fn output(&self) -> io::Result<OutputStream> {
        Ok(Box::new(HexWriter {
            inner: self.inner.output()?,
        }))
    }
}

struct HexSource<'a> {
    inner: Box<dyn Source + 'a>,
}

impl Source for HexSource<'_> {
    fn input(&self) -> io::Result<InputStream> {
        let mut text = Vec::new();
        self.inner.input()?.read_to_end(&mut text)?;
        let data = hex::decode(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Box::new(Cursor::new(data)))
    }
}

struct HexWriter {
    inner: OutputStream,
}

impl Write for HexWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write_all(hex::encode(buf).as_bytes())?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl WriteStream for HexWriter {
    fn close(self: Box<Self>) -> io::Result<()> {
        self.inner.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_io::{read_bytes, write_bytes, MemoryStore};

    #[test]
    fn encodes_lowercase_hex() {
        let raw = MemoryStore::new();
        write_bytes(&*HexEncoding.apply(Box::new(&raw)), &[0x00, 0xab, 0xff]).unwrap();
        assert_eq!(read_bytes(&raw).unwrap(), b"00abff");
    }

    #[test]
    fn decodes_mixed_case() {
        let raw = MemoryStore::with_content(b"48656C6c6f".to_vec());
        assert_eq!(read_bytes(&*HexEncoding.unapply(Box::new(&raw))).unwrap(), b"Hello");
    }

    #[test]
    fn rejects_odd_length() {
        let raw = MemoryStore::with_content(b"abc".to_vec());
        let err = read_bytes(&*HexEncoding.unapply(Box::new(&raw))).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn rejects_non_hex() {
        let raw = MemoryStore::with_content(b"zz".to_vec());
        let err = read_bytes(&*HexEncoding.unapply(Box::new(&raw))).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
