//! Sizable in-memory buffer
//!
//! The conditional-content responder wants a `Read + Seek` source so it
//! can ask for the total length before reading. A plain byte buffer can't
//! really seek, so this wrapper only answers the questions that get asked:
//! seeking to the end reports the length, any other seek is a no-op at
//! position 0, and reads drain the buffer front to back.

use std::io::{self, Read, Seek, SeekFrom};

#[derive(Debug, Default)]
pub struct SizableBuffer {
    data: Vec<u8>,
    pos: usize,
}

impl SizableBuffer {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, pos: 0 }
    }

    /// Total number of bytes held, independent of how much was read
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl From<Vec<u8>> for SizableBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl Read for SizableBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = &self.data[self.pos..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        Ok(n)
    }
}

impl Seek for SizableBuffer {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match pos {
            SeekFrom::End(_) => Ok(self.data.len() as u64),
            SeekFrom::Start(_) | SeekFrom::Current(_) => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_end_reports_length_without_moving() {
        let mut buf = SizableBuffer::new(b"one\ntwo\n".to_vec());
        assert_eq!(buf.seek(SeekFrom::End(0)).unwrap(), 8);
        assert_eq!(buf.seek(SeekFrom::End(-3)).unwrap(), 8);

        let mut out = String::new();
        buf.read_to_string(&mut out).unwrap();
        assert_eq!(out, "one\ntwo\n");
    }

    #[test]
    fn test_other_seeks_are_noops() {
        let mut buf = SizableBuffer::new(b"abcdef".to_vec());
        let mut head = [0u8; 2];
        buf.read_exact(&mut head).unwrap();
        assert_eq!(&head, b"ab");

        assert_eq!(buf.seek(SeekFrom::Start(0)).unwrap(), 0);
        assert_eq!(buf.seek(SeekFrom::Current(3)).unwrap(), 0);

        let mut rest = Vec::new();
        buf.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, b"cdef");
    }

    #[test]
    fn test_empty_buffer() {
        let mut buf = SizableBuffer::default();
        assert!(buf.is_empty());
        assert_eq!(buf.seek(SeekFrom::End(0)).unwrap(), 0);
        let mut out = Vec::new();
        assert_eq!(buf.read_to_end(&mut out).unwrap(), 0);
    }

    #[test]
    fn test_len_ignores_read_position() {
        let mut buf = SizableBuffer::from(b"xyz".to_vec());
        let mut one = [0u8; 1];
        buf.read_exact(&mut one).unwrap();
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.into_inner(), b"xyz");
    }
}
