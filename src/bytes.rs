use std::{error, fmt};

/// Architectural maximum instruction length.
pub const MAX_INSTR_LEN: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The buffer ended before the instruction did.
    Truncated,
    /// Reading one more byte would exceed the 15-byte limit.
    Limit,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Truncated => "byte stream truncated",
            Self::Limit => "instruction length limit exceeded",
        })
    }
}

impl error::Error for Error {}

/// Read cursor over one instruction window of a byte buffer.
///
/// The window starts at a caller-given offset and is capped at the smaller of
/// the caller's `max_length` and the 15-byte architectural limit. Hitting the
/// architectural limit and running out of buffer are distinct errors.
#[derive(Clone)]
pub struct Cursor<'input> {
    buffer: &'input [u8],
    start: usize,
    offset: usize,
    limit: usize,
}

impl<'input> Cursor<'input> {
    #[must_use]
    pub fn new(buffer: &'input [u8], offset: usize, max_length: usize) -> Self {
        let limit = max_length.min(MAX_INSTR_LEN);
        Self {
            buffer,
            start: offset,
            offset,
            limit,
        }
    }

    /// Bytes consumed so far.
    #[inline]
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.offset - self.start
    }

    #[inline]
    fn check(&self, want: usize) -> Result<(), Error> {
        if self.consumed() + want > self.limit {
            // A caller-shortened window means the caller simply has no more
            // bytes; only the full architectural window reports a hard limit.
            return Err(if self.limit == MAX_INSTR_LEN {
                Error::Limit
            } else {
                Error::Truncated
            });
        }
        if self.offset + want > self.buffer.len() {
            return Err(Error::Truncated);
        }
        Ok(())
    }

    #[inline]
    pub fn read(&mut self) -> Result<u8, Error> {
        self.check(1)?;
        let b = self.buffer[self.offset];
        self.offset += 1;
        Ok(b)
    }

    /// Next byte without consuming it.
    #[inline]
    pub fn peek(&self) -> Result<u8, Error> {
        self.check(1)?;
        Ok(self.buffer[self.offset])
    }

    /// Consume `count` bytes without inspecting them (displacements and
    /// immediates, whose values this layer does not decode).
    pub fn skip(&mut self, count: usize) -> Result<(), Error> {
        self.check(count)?;
        self.offset += count;
        Ok(())
    }
}

impl fmt::Debug for Cursor<'_> {
    #[cold]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("consumed", &self.consumed())
            .field("limit", &self.limit)
            .field("next", &self.peek().ok())
            .finish()
    }
}

#[test]
fn test_cursor_window() {
    let buf = [0x90u8, 0x48, 0x01, 0xc3];
    let mut c = Cursor::new(&buf, 1, 15);
    assert_eq!(0, c.consumed());
    assert_eq!(0x48, c.peek().unwrap());
    assert_eq!(0x48, c.read().unwrap());
    assert_eq!(0x01, c.read().unwrap());
    c.skip(1).unwrap();
    assert_eq!(3, c.consumed());
    assert_eq!(Err(Error::Truncated), c.read());
}

#[test]
fn test_cursor_limits() {
    let buf = [0x66u8; 32];
    let mut c = Cursor::new(&buf, 0, 15);
    for _ in 0..15 {
        c.read().unwrap();
    }
    // Plenty of buffer left, but the architectural window is spent.
    assert_eq!(Err(Error::Limit), c.read());

    let mut c = Cursor::new(&buf, 0, 4);
    c.skip(4).unwrap();
    assert_eq!(Err(Error::Truncated), c.read());

    let mut c = Cursor::new(&buf[..2], 0, 15);
    assert_eq!(Err(Error::Truncated), c.skip(3));
    c.skip(2).unwrap();
}
