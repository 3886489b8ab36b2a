//! `CharacterStream` (spec §4.1): a unified forward-with-pushback cursor over
//! a source buffer, with one concrete backend per source encoding.
//!
//! Dispatch is a closed `enum` rather than a trait object — the teacher's
//! `oxc_parser::lexer::Source` keeps the hot loop monomorphic by avoiding
//! virtual calls, and an enum match compiles down to the same thing without
//! needing a generic parameter threaded through `Scanner`.

mod one_byte;
mod two_byte;
mod utf8;

pub use one_byte::OneByteStream;
pub use two_byte::TwoByteStream;
pub use utf8::Utf8Stream;

/// One code unit of the source encoding, or [`END_OF_INPUT`].
pub type CodeUnit = i32;

/// Sentinel returned by `peek`/`advance` at end of input. Outside the range
/// of any valid code unit (bytes are `0..=255`, UTF-16 code units are
/// `0..=0xFFFF`), so it can never be confused with real source content.
pub const END_OF_INPUT: CodeUnit = -1;

/// Bounded pushback: the scanner never needs more than three code units of
/// lookahead (spec §3.5/§4.1). Exceeding this is a caller bug, not a
/// recoverable condition.
const PUSHBACK_CAPACITY: usize = 3;

#[derive(Debug, Clone, Default)]
struct Pushback {
    buf: [CodeUnit; PUSHBACK_CAPACITY],
    len: u8,
}

impl Pushback {
    #[inline]
    fn push(&mut self, ch: CodeUnit) {
        debug_assert!(
            (self.len as usize) < PUSHBACK_CAPACITY,
            "pushback buffer exceeded (max {PUSHBACK_CAPACITY}); caller violated the lookahead budget"
        );
        self.buf[self.len as usize] = ch;
        self.len += 1;
    }

    #[inline]
    fn peek(&self) -> Option<CodeUnit> {
        if self.len == 0 {
            None
        } else {
            Some(self.buf[self.len as usize - 1])
        }
    }

    #[inline]
    fn pop(&mut self) -> Option<CodeUnit> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            Some(self.buf[self.len as usize])
        }
    }

    #[inline]
    fn clear(&mut self) {
        self.len = 0;
    }
}

/// A source cursor over one of the three encodings a loader may hand the
/// lexer. `peek`/`advance`/`push_back`/`position`/`seek` all behave per
/// spec §4.1, regardless of which backend is active.
#[derive(Debug, Clone)]
pub enum CharacterStream<'s> {
    OneByte(OneByteStream<'s>),
    TwoByte(TwoByteStream<'s>),
    Utf8(Utf8Stream<'s>),
}

impl<'s> CharacterStream<'s> {
    pub fn from_one_byte(bytes: &'s [u8]) -> Self {
        Self::OneByte(OneByteStream::new(bytes))
    }

    pub fn from_two_byte(code_units: &'s [u16]) -> Self {
        Self::TwoByte(TwoByteStream::new(code_units))
    }

    /// `bytes` should not include a leading UTF-8 BOM; strip it before
    /// constructing, or rely on `Utf8Stream::new`'s own BOM skip (spec
    /// §4.1: "BOM at offset 0 is skipped before any token is produced").
    pub fn from_utf8(bytes: &'s [u8]) -> Self {
        Self::Utf8(Utf8Stream::new(bytes))
    }

    #[inline]
    pub fn peek(&self) -> CodeUnit {
        match self {
            Self::OneByte(s) => s.peek(),
            Self::TwoByte(s) => s.peek(),
            Self::Utf8(s) => s.peek(),
        }
    }

    #[inline]
    pub fn advance(&mut self) -> CodeUnit {
        match self {
            Self::OneByte(s) => s.advance(),
            Self::TwoByte(s) => s.advance(),
            Self::Utf8(s) => s.advance(),
        }
    }

    /// Rewind by one code unit. See module docs on `Utf8Stream` for the one
    /// restriction this carries for UTF-8 sources.
    #[inline]
    pub fn push_back(&mut self, ch: CodeUnit) {
        match self {
            Self::OneByte(s) => s.push_back(ch),
            Self::TwoByte(s) => s.push_back(ch),
            Self::Utf8(s) => s.push_back(ch),
        }
    }

    #[inline]
    pub fn position(&self) -> u32 {
        match self {
            Self::OneByte(s) => s.position(),
            Self::TwoByte(s) => s.position(),
            Self::Utf8(s) => s.position(),
        }
    }

    #[inline]
    pub fn seek(&mut self, pos: u32) {
        match self {
            Self::OneByte(s) => s.seek(pos),
            Self::TwoByte(s) => s.seek(pos),
            Self::Utf8(s) => s.seek(pos),
        }
    }

    pub fn is_eof(&self) -> bool {
        self.peek() == END_OF_INPUT
    }
}
