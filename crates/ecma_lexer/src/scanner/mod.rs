//! `Scanner` (spec §4.3): consumes a `CharacterStream`, produces
//! `(Token, Span, LiteralRef, octal_pos)` tuples, and maintains one-token
//! lookahead via a ping-ponged pair of `LiteralBuffer`s.

mod comment;
mod identifier;
mod number;
mod punctuation;
mod regex;
mod string;
mod template;

use ecma_allocator::Allocator;
use ecma_diagnostics::LexError;
use ecma_span::Span;
use ecma_syntax::{Kind, LexerFlags};

use crate::literal_buffer::LiteralBuffer;
use crate::stream::{CharacterStream, CodeUnit, END_OF_INPUT};
use crate::token::{LiteralRef, Token};

/// A scanned identifier/string/template/regexp literal, resolved against
/// whichever backing it lives in.
#[derive(Debug, Clone, Copy)]
pub enum Literal<'a> {
    OneByte(&'a [u8]),
    TwoByte(&'a [u16]),
    None,
}

pub struct Scanner<'a> {
    allocator: &'a Allocator,
    stream: CharacterStream<'a>,
    flags: LexerFlags,

    current: Token,
    next: Token,

    /// Index (0 or 1) of the `literal_buffers` entry backing `current`'s
    /// literal. The other entry is either being filled for `next`, or is
    /// stale and about to be reset.
    current_buffer: usize,
    literal_buffers: [LiteralBuffer<'a>; 2],

    has_line_terminator_before_next: bool,
    has_multiline_comment_before_next: bool,

    /// Location of the most recent legacy-octal literal or octal escape
    /// seen anywhere in the token stream so far (spec §4.3.3/§4.3.4/§7).
    octal_position: Span,

    pub(crate) errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    /// `init(stream, flags)`: prime the scanner by scanning twice from
    /// position 0, so both `current` and `next` are ready (spec §4.3).
    pub fn new(allocator: &'a Allocator, stream: CharacterStream<'a>, flags: LexerFlags) -> Self {
        let mut scanner = Self {
            allocator,
            stream,
            flags,
            current: Token::new_at_start_of_file(),
            next: Token::default(),
            current_buffer: 0,
            literal_buffers: [LiteralBuffer::new(allocator), LiteralBuffer::new(allocator)],
            has_line_terminator_before_next: false,
            has_multiline_comment_before_next: false,
            octal_position: Span::invalid(),
            errors: Vec::new(),
        };

        // First scan fills `current`; its literal (if any) lives in buffer 1.
        scanner.current = scanner.scan_one();
        scanner.current.preceded_by_line_terminator = true;
        scanner.current_buffer = 1;

        // Second scan fills `next`, reusing the now-stale buffer 0.
        scanner.literal_buffers[0].reset();
        scanner.has_line_terminator_before_next = false;
        scanner.has_multiline_comment_before_next = false;
        scanner.next = scanner.scan_one();

        scanner
    }

    /// `next() -> Token`: promote `next` to `current`, refill `next`.
    pub fn advance(&mut self) -> Kind {
        self.current = self.next;
        self.has_line_terminator_before_next = false;
        self.has_multiline_comment_before_next = false;

        // The buffer we just filled (for the token now becoming `current`)
        // is `1 - current_buffer`; that becomes the new current buffer.
        self.current_buffer = 1 - self.current_buffer;
        let stale = 1 - self.current_buffer;
        self.literal_buffers[stale].reset();

        self.next = self.scan_one();
        self.current.kind
    }

    #[inline]
    pub fn peek(&self) -> Kind {
        self.next.kind
    }

    #[inline]
    pub fn location(&self) -> Span {
        self.current.span
    }

    #[inline]
    pub fn peek_location(&self) -> Span {
        self.next.span
    }

    #[inline]
    pub fn has_line_terminator_before_next(&self) -> bool {
        self.has_line_terminator_before_next
    }

    #[inline]
    pub fn has_multiline_comment_before_next(&self) -> bool {
        self.has_multiline_comment_before_next
    }

    #[inline]
    pub fn octal_position(&self) -> Span {
        self.octal_position
    }

    #[inline]
    pub fn current_token(&self) -> Token {
        self.current
    }

    /// Decoded content of `current` (spec §6.1 `literal()`).
    pub fn literal(&self) -> Literal<'_> {
        self.resolve_literal(self.current.literal)
    }

    #[inline]
    pub fn literal_is_one_byte(&self) -> bool {
        self.current.literal.is_one_byte()
    }

    fn resolve_literal(&self, literal: LiteralRef) -> Literal<'_> {
        match literal {
            LiteralRef::None => Literal::None,
            LiteralRef::Source { .. } => {
                // Source-slice literals are resolved by the caller against
                // the original source buffer (the scanner doesn't retain a
                // copy of it beyond the `CharacterStream`). Exposed via
                // `Token::literal`/`Span::source_text` instead.
                Literal::None
            }
            LiteralRef::Buffer { buffer, .. } => {
                let buf = &self.literal_buffers[buffer as usize];
                if let Some(bytes) = buf.as_one_byte() {
                    Literal::OneByte(bytes)
                } else if let Some(units) = buf.as_two_byte() {
                    Literal::TwoByte(units)
                } else {
                    Literal::None
                }
            }
        }
    }

    /// `seek_forward(position)`: used when the parser skips a previously
    /// analysed function body. Re-primes `current`/`next` from `pos`.
    pub fn seek_forward(&mut self, pos: u32) {
        self.stream.seek(pos);
        self.has_line_terminator_before_next = false;
        self.has_multiline_comment_before_next = false;

        self.current = self.scan_one();
        self.current_buffer = 1 - self.current_buffer;
        let stale = 1 - self.current_buffer;
        self.literal_buffers[stale].reset();

        self.has_line_terminator_before_next = false;
        self.has_multiline_comment_before_next = false;
        self.next = self.scan_one();
    }

    // ---------- Internal helpers shared by the per-construct modules ---------- //

    #[inline]
    fn peek_char(&self) -> CodeUnit {
        self.stream.peek()
    }

    #[inline]
    fn advance_char(&mut self) -> CodeUnit {
        self.stream.advance()
    }

    #[inline]
    fn push_back(&mut self, ch: CodeUnit) {
        self.stream.push_back(ch);
    }

    #[inline]
    fn position(&self) -> u32 {
        self.stream.position()
    }

    /// The `LiteralBuffer` currently being filled for `next` (i.e. not
    /// `current`'s buffer).
    fn active_literal_buffer(&mut self) -> &mut LiteralBuffer<'a> {
        let idx = 1 - self.current_buffer;
        &mut self.literal_buffers[idx]
    }

    #[inline]
    fn active_buffer_index(&self) -> u8 {
        (1 - self.current_buffer) as u8
    }

    fn record_error(&mut self, error: LexError) {
        self.errors.push(error);
    }

    fn record_octal(&mut self, span: Span) {
        self.octal_position = span;
    }

    /// Read each code unit and build up the next token. Whitespace and line
    /// terminators are skipped (spec §4.3.1 step 1); the other steps are
    /// implemented by the per-construct modules (`identifier`, `number`,
    /// `string`, `template`, `punctuation`, `comment`).
    fn scan_one(&mut self) -> Token {
        loop {
            if self.skip_trivia() {
                continue;
            }

            let begin = self.position();
            let ch = self.peek_char();

            if ch == END_OF_INPUT {
                return Token {
                    kind: Kind::Eof,
                    span: Span::new(begin, begin),
                    has_escapes: false,
                    literal: LiteralRef::None,
                    preceded_by_line_terminator: false,
                    contains_legacy_octal: false,
                };
            }

            let mut token = Token {
                kind: Kind::Undetermined,
                span: Span::new(begin, begin),
                has_escapes: false,
                literal: LiteralRef::None,
                preceded_by_line_terminator: false,
                contains_legacy_octal: false,
            };

            let kind = self.dispatch(ch, &mut token);
            token.kind = kind;
            token.span.end = self.position();
            debug_assert!(token.span.start <= token.span.end);
            return token;
        }
    }

    /// Dispatch on the current code unit to the right per-construct scan
    /// routine (spec §4.3.1 step 3).
    fn dispatch(&mut self, ch: CodeUnit, token: &mut Token) -> Kind {
        if ch < 0x80 {
            let byte = ch as u8;
            if ecma_syntax::identifier::is_identifier_start_ascii_byte(byte) {
                return self.scan_identifier_or_keyword(token);
            }
            if byte.is_ascii_digit() {
                return self.scan_number(token);
            }
            match byte {
                b'\'' | b'"' => return self.scan_string(token, byte),
                b'`' => return self.scan_template(token),
                b'\\' => return self.scan_identifier_or_keyword(token),
                _ => {}
            }
            return self.scan_punctuation(token, byte);
        }

        // Non-ASCII: identifier or stray character.
        if let Some(c) = char::from_u32(ch as u32) {
            if ecma_syntax::identifier::is_identifier_start_unicode(c) {
                return self.scan_identifier_or_keyword(token);
            }
        }

        self.advance_char();
        self.record_error(LexError::StrayCharacter { span: Span::new(token.span.start, self.position()) });
        Kind::Illegal
    }

    /// Skip one run of whitespace, line terminators, and comments. Returns
    /// `true` if anything was skipped (caller loops to look for more).
    fn skip_trivia(&mut self) -> bool {
        self.skip_whitespace_and_comments()
    }

    /// Re-decode `[start, end)` from the character stream into the active
    /// literal buffer. Used the moment a construct that started as a plain
    /// source slice (identifier, string, template) turns out to contain an
    /// escape: everything consumed so far has to be transcribed before the
    /// decoded escape value can be appended after it.
    fn transcribe_source_range_into_active_buffer(&mut self, start: u32, end: u32) {
        let resume = self.position();
        self.stream.seek(start);
        let idx = 1 - self.current_buffer;
        while self.position() < end {
            let ch = self.stream.advance();
            self.literal_buffers[idx].push(ch as u32);
        }
        self.stream.seek(resume);
    }

    /// Shared `\uXXXX` / `\u{hex+}` decoder for identifier escapes, string
    /// escapes, and regex flags. Expects to be called with the cursor right
    /// after the backslash, with `u` not yet consumed. Does not itself
    /// validate the result against any identifier-character predicate — see
    /// `scan_identifier_unicode_escape` for that.
    fn scan_unicode_escape_value(&mut self) -> Option<u32> {
        if self.peek_char() != CodeUnit::from(b'u') {
            return None;
        }
        self.advance_char();

        if self.peek_char() == CodeUnit::from(b'{') && self.flags.contains(LexerFlags::HARMONY_SCOPING) {
            self.advance_char();
            let mut value: u32 = 0;
            let mut digits = 0u32;
            loop {
                let d = hex_digit_value(self.peek_char())?;
                self.advance_char();
                value = value.checked_mul(16)?.checked_add(d)?;
                digits += 1;
                if value > 0x10FFFF {
                    return None;
                }
                if self.peek_char() == CodeUnit::from(b'}') {
                    break;
                }
            }
            if digits == 0 {
                return None;
            }
            self.advance_char();
            Some(value)
        } else {
            let mut value: u32 = 0;
            for _ in 0..4 {
                let d = hex_digit_value(self.peek_char())?;
                self.advance_char();
                value = value * 16 + d;
            }
            Some(value)
        }
    }
}

fn hex_digit_value(ch: CodeUnit) -> Option<u32> {
    match ch {
        c if (CodeUnit::from(b'0')..=CodeUnit::from(b'9')).contains(&c) => Some((c - CodeUnit::from(b'0')) as u32),
        c if (CodeUnit::from(b'a')..=CodeUnit::from(b'f')).contains(&c) => {
            Some((c - CodeUnit::from(b'a')) as u32 + 10)
        }
        c if (CodeUnit::from(b'A')..=CodeUnit::from(b'F')).contains(&c) => {
            Some((c - CodeUnit::from(b'A')) as u32 + 10)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecma_span::Encoding;

    fn scan_all(source: &str, flags: LexerFlags) -> (Vec<Kind>, Vec<LexError>) {
        let allocator = Allocator::default();
        let stream = CharacterStream::from_utf8(source.as_bytes());
        let mut scanner = Scanner::new(&allocator, stream, flags);
        let mut kinds = vec![scanner.current_token().kind];
        loop {
            let kind = scanner.advance();
            kinds.push(kind);
            if kind == Kind::Eof {
                break;
            }
        }
        (kinds, scanner.errors.clone())
    }

    #[test]
    fn scenario_var_declaration() {
        let (kinds, _) = scan_all("var x = 42;", LexerFlags::empty());
        assert_eq!(
            kinds,
            vec![
                Kind::Var,
                Kind::Identifier,
                Kind::Eq,
                Kind::Number,
                Kind::Semicolon,
                Kind::Eof,
            ]
        );
    }

    #[test]
    fn empty_source_is_immediately_eof() {
        let (kinds, _) = scan_all("", LexerFlags::empty());
        assert_eq!(kinds, vec![Kind::Eof]);
    }

    #[test]
    fn whitespace_and_comments_only_is_eof() {
        let (kinds, _) = scan_all("   // a comment\n/* another */  ", LexerFlags::empty());
        assert_eq!(kinds, vec![Kind::Eof]);
    }

    #[test]
    fn line_comment_sets_line_terminator_flag() {
        let allocator = Allocator::default();
        let stream = CharacterStream::from_utf8(b"// c\nfoo");
        let mut scanner = Scanner::new(&allocator, stream, LexerFlags::empty());
        assert_eq!(scanner.peek(), Kind::Identifier);
        assert!(scanner.has_line_terminator_before_next());
        scanner.advance();
        assert_eq!(scanner.current_token().kind, Kind::Identifier);
    }

    #[test]
    fn digit_followed_by_identifier_start_is_illegal() {
        let (kinds, errors) = scan_all("3in", LexerFlags::empty());
        assert_eq!(kinds, vec![Kind::Illegal, Kind::Eof]);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn encoding_equivalence_for_latin1_subset() {
        let source = "var x = 1;";
        let allocator = Allocator::default();

        let utf8 = CharacterStream::from_utf8(source.as_bytes());
        let mut s1 = Scanner::new(&allocator, utf8, LexerFlags::empty());

        let one_byte = CharacterStream::from_one_byte(source.as_bytes());
        let mut s2 = Scanner::new(&allocator, one_byte, LexerFlags::empty());

        let two_byte: Vec<u16> = source.encode_utf16().collect();
        let two_byte_stream = CharacterStream::from_two_byte(&two_byte);
        let mut s3 = Scanner::new(&allocator, two_byte_stream, LexerFlags::empty());

        loop {
            let k1 = s1.current_token().kind;
            let k2 = s2.current_token().kind;
            let k3 = s3.current_token().kind;
            assert_eq!(k1, k2);
            assert_eq!(k2, k3);
            if k1 == Kind::Eof {
                break;
            }
            s1.advance();
            s2.advance();
            s3.advance();
        }
        let _ = Encoding::Utf8;
    }

    #[test]
    fn idempotent_rescans_produce_identical_token_sequence() {
        let (kinds_a, _) = scan_all("function f(a, b) { return a + b; }", LexerFlags::empty());
        let (kinds_b, _) = scan_all("function f(a, b) { return a + b; }", LexerFlags::empty());
        assert_eq!(kinds_a, kinds_b);
    }

    #[test]
    fn adjacent_tokens_never_overlap() {
        let allocator = Allocator::default();
        let source = "let a = (b + 1) * 2;\n";
        let stream = CharacterStream::from_utf8(source.as_bytes());
        let mut scanner = Scanner::new(&allocator, stream, LexerFlags::HARMONY_SCOPING);
        let mut prev_end = 0u32;
        loop {
            let token = scanner.current_token();
            assert!(token.span.start >= prev_end);
            prev_end = token.span.end;
            if token.kind == Kind::Eof {
                break;
            }
            scanner.advance();
        }
    }
}
