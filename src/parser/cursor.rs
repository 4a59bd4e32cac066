//! Big-endian byte cursor over an in-memory buffer.

use crate::error::{Error, Result};

/// Sequential reader over a byte slice.
///
/// Every consuming read either returns the full value or fails with
/// [`Error::UnexpectedEof`] without moving the cursor.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Next byte without consuming it; 0 at end of buffer.
    pub fn peek_u8(&self) -> u8 {
        self.data.get(self.pos).copied().unwrap_or(0)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(Error::UnexpectedEof {
                requested: n,
                offset: self.pos,
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_u24(&mut self) -> Result<u32> {
        let b = self.take(3)?;
        Ok((u32::from(b[0]) << 16) | u32::from(u16::from_be_bytes([b[1], b[2]])))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_i8(&mut self) -> Result<i32> {
        Ok(i32::from(self.read_u8()? as i8))
    }

    pub fn read_i16(&mut self) -> Result<i32> {
        Ok(i32::from(self.read_u16()? as i16))
    }

    pub fn read_i24(&mut self) -> Result<i32> {
        let value = self.read_u24()?;
        // Sign-extend bit 23.
        Ok(((value << 8) as i32) >> 8)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    /// Read an unsigned integer of `width` bytes (1 to 4).
    pub fn read_unsigned(&mut self, width: usize) -> Result<u32> {
        match width {
            1 => self.read_u8().map(u32::from),
            2 => self.read_u16().map(u32::from),
            3 => self.read_u24(),
            _ => self.read_u32(),
        }
    }

    /// Read a signed integer of `width` bytes (1 to 4).
    pub fn read_signed(&mut self, width: usize) -> Result<i32> {
        match width {
            1 => self.read_i8(),
            2 => self.read_i16(),
            3 => self.read_i24(),
            _ => self.read_i32(),
        }
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.take(n)
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_reads_are_big_endian() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_u8().unwrap(), 0x01);
        assert_eq!(cursor.read_u16().unwrap(), 0x0203);
        assert_eq!(cursor.read_u24().unwrap(), 0x040506);
        assert_eq!(cursor.read_u32().unwrap(), 0x0708090A);
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_signed_reads() {
        let mut cursor = ByteCursor::new(&[0xFF]);
        assert_eq!(cursor.read_i8().unwrap(), -1);

        let mut cursor = ByteCursor::new(&[0x80, 0x00]);
        assert_eq!(cursor.read_i16().unwrap(), -32768);

        let mut cursor = ByteCursor::new(&[0xFF, 0xFF, 0xFE]);
        assert_eq!(cursor.read_i24().unwrap(), -2);

        let mut cursor = ByteCursor::new(&[0x7F, 0xFF, 0xFF]);
        assert_eq!(cursor.read_i24().unwrap(), 8_388_607);

        let mut cursor = ByteCursor::new(&[0x80, 0x00, 0x00, 0x00]);
        assert_eq!(cursor.read_i32().unwrap(), i32::MIN);
    }

    #[test]
    fn test_width_dispatch() {
        let mut cursor = ByteCursor::new(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(cursor.read_signed(2).unwrap(), -1);
        assert_eq!(cursor.read_unsigned(3).unwrap(), 0xFFFFFF);
        assert!(cursor.read_unsigned(1).is_ok());
    }

    #[test]
    fn test_eof_does_not_consume() {
        let data = [0x01, 0x02, 0x03];
        let mut cursor = ByteCursor::new(&data);
        cursor.read_u8().unwrap();

        let err = cursor.read_u32().unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedEof {
                requested: 4,
                offset: 1
            }
        ));
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read_u16().unwrap(), 0x0203);
    }

    #[test]
    fn test_peek_at_end_returns_zero() {
        let mut cursor = ByteCursor::new(&[0xF7]);
        assert_eq!(cursor.peek_u8(), 0xF7);
        assert_eq!(cursor.position(), 0);
        cursor.read_u8().unwrap();
        assert_eq!(cursor.peek_u8(), 0);
    }

    #[test]
    fn test_read_bytes() {
        let mut cursor = ByteCursor::new(b"hello");
        assert_eq!(cursor.read_bytes(0).unwrap(), b"");
        assert_eq!(cursor.read_bytes(5).unwrap(), b"hello");
        assert!(cursor.read_bytes(1).is_err());
    }
}
