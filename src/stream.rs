//! Byte stream abstractions for the codec endpoints.
//!
//! The codec treats its endpoints as opaque ordered byte streams: a
//! [`ByteSource`] it reads one byte at a time, and a [`ByteSink`] it writes
//! one byte at a time. Anything that is `io::Read + io::Seek` is a source
//! (`File`, `BufReader<File>`, `Cursor<&[u8]>`, ...); anything that is
//! `io::Write` is a sink.

use std::io;

use crate::error::Error;

/// A sequential byte source that can be repositioned to its start.
///
/// `encode` reads the source twice (histogram pass, then body pass) and
/// rewinds in between. `decode` consumes its source forward only and never
/// calls [`rewind`](ByteSource::rewind).
pub trait ByteSource {
    /// Read the next byte, or `None` at end of stream.
    fn next_byte(&mut self) -> Result<Option<u8>, Error>;

    /// Reposition to the start of the stream.
    fn rewind(&mut self) -> Result<(), Error>;
}

/// A sequential byte sink.
pub trait ByteSink {
    /// Append one byte to the stream.
    fn put_byte(&mut self, byte: u8) -> Result<(), Error>;
}

impl<R: io::Read + io::Seek> ByteSource for R {
    fn next_byte(&mut self) -> Result<Option<u8>, Error> {
        let mut byte = [0u8; 1];
        loop {
            match self.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn rewind(&mut self) -> Result<(), Error> {
        self.seek(io::SeekFrom::Start(0))?;
        Ok(())
    }
}

impl<W: io::Write> ByteSink for W {
    fn put_byte(&mut self, byte: u8) -> Result<(), Error> {
        self.write_all(&[byte])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn cursor_reads_then_signals_eof() {
        let mut src = Cursor::new(vec![0x01u8, 0x02]);
        assert!(matches!(src.next_byte(), Ok(Some(0x01))));
        assert!(matches!(src.next_byte(), Ok(Some(0x02))));
        assert!(matches!(src.next_byte(), Ok(None)));
        // EOF is sticky, not an error
        assert!(matches!(src.next_byte(), Ok(None)));
    }

    #[test]
    fn rewind_restarts_the_stream() {
        let mut src = Cursor::new(vec![0xaau8, 0xbb]);
        assert!(matches!(src.next_byte(), Ok(Some(0xaa))));
        src.rewind().unwrap();
        assert!(matches!(src.next_byte(), Ok(Some(0xaa))));
    }

    #[test]
    fn vec_sink_appends() {
        let mut dst: Vec<u8> = Vec::new();
        dst.put_byte(0x10).unwrap();
        dst.put_byte(0x20).unwrap();
        assert_eq!(dst, vec![0x10, 0x20]);
    }
}
