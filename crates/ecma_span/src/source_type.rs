//! Source encoding markers.
//!
//! Mirrors the three `CharacterStream` backends described in the lexer's
//! design: source text may arrive as Latin-1, UTF-8, or (BOM-stripped)
//! native-endian UTF-16.

/// Which code-unit width a `CharacterStream` is reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// One byte per code point (ISO-8859-1 / Latin-1).
    OneByte,
    /// Well-formed-or-not UTF-8, decoded on demand into UTF-16 code units.
    Utf8,
    /// Native-endian UTF-16 code units, BOM already stripped by the loader.
    TwoByte,
}

/// Metadata the CLI and library callers pass alongside source text.
///
/// Unlike `oxc_span::SourceType` (which additionally tracks TS/JSX/module
/// variants for the parser) this only needs to record encoding, since the
/// grammar variant is controlled purely via `LexerFlags`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceType {
    encoding: Encoding,
}

impl SourceType {
    #[inline]
    pub const fn new(encoding: Encoding) -> Self {
        Self { encoding }
    }

    #[inline]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    #[inline]
    pub const fn latin1() -> Self {
        Self::new(Encoding::OneByte)
    }

    #[inline]
    pub const fn utf8() -> Self {
        Self::new(Encoding::Utf8)
    }

    #[inline]
    pub const fn utf16() -> Self {
        Self::new(Encoding::TwoByte)
    }
}

impl Default for SourceType {
    fn default() -> Self {
        Self::utf8()
    }
}
