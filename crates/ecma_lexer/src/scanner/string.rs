//! String literal scan (spec §4.3.4, ECMA-262 §7.8.4 escapes). Shared with
//! `template.rs`, which uses the same escape grammar inside backtick bodies.

use ecma_diagnostics::LexError;
use ecma_span::Span;
use ecma_syntax::Kind;

use crate::stream::{CodeUnit, END_OF_INPUT};
use crate::token::{LiteralRef, Token};

use super::Scanner;

pub(super) enum EscapeOutcome {
    CodePoint(u32),
    LineContinuation,
}

fn is_octal_digit_unit(c: CodeUnit) -> bool {
    (CodeUnit::from(b'0')..=CodeUnit::from(b'7')).contains(&c)
}

impl<'a> Scanner<'a> {
    pub(super) fn scan_string(&mut self, token: &mut Token, quote: u8) -> Kind {
        let start = token.span.start;
        self.advance_char(); // opening quote
        let body_start = self.position();
        let mut has_escapes = false;
        let mut saw_non_latin1 = false;

        loop {
            let ch = self.peek_char();

            if ch == END_OF_INPUT {
                self.record_error(LexError::UnterminatedString { span: Span::new(start, self.position()) });
                return Kind::Illegal;
            }

            if let Some(c) = char::from_u32(ch as u32) {
                if ecma_syntax::whitespace::is_line_terminator(c) {
                    self.record_error(LexError::UnterminatedString { span: Span::new(start, self.position()) });
                    return Kind::Illegal;
                }
            }

            if ch == CodeUnit::from(quote) {
                break;
            }

            if ch == CodeUnit::from(b'\\') {
                if !has_escapes {
                    has_escapes = true;
                    let pos = self.position();
                    self.transcribe_source_range_into_active_buffer(body_start, pos);
                }
                self.advance_char();
                match self.scan_string_escape(start) {
                    Some(EscapeOutcome::CodePoint(cp)) => {
                        if cp >= 256 {
                            saw_non_latin1 = true;
                        }
                        self.active_literal_buffer().push(cp);
                    }
                    Some(EscapeOutcome::LineContinuation) => {}
                    None => return Kind::Illegal,
                }
                continue;
            }

            if ch >= 256 {
                saw_non_latin1 = true;
            }
            if has_escapes {
                self.active_literal_buffer().push(ch as u32);
            }
            self.advance_char();
        }

        let body_end = self.position();
        self.advance_char(); // closing quote

        if has_escapes {
            token.has_escapes = true;
            let one_byte = self.active_literal_buffer().is_one_byte();
            token.literal = LiteralRef::Buffer { buffer: self.active_buffer_index(), one_byte };
        } else {
            token.literal =
                LiteralRef::Source { offset: body_start, length: body_end - body_start, one_byte: !saw_non_latin1 };
        }
        Kind::String
    }

    /// Decode one escape sequence. Called with the cursor right after the
    /// backslash. `span_start` anchors the `UnterminatedString` error if the
    /// escape runs into EOF.
    pub(super) fn scan_string_escape(&mut self, span_start: u32) -> Option<EscapeOutcome> {
        let ch = self.peek_char();

        if ch == END_OF_INPUT {
            self.record_error(LexError::UnterminatedString { span: Span::new(span_start, self.position()) });
            return None;
        }

        if let Some(c) = char::from_u32(ch as u32) {
            if ecma_syntax::whitespace::is_line_terminator(c) {
                self.advance_char();
                let cr_lf = ch == CodeUnit::from(b'\r') && self.peek_char() == CodeUnit::from(b'\n');
                let lf_cr = ch == CodeUnit::from(b'\n') && self.peek_char() == CodeUnit::from(b'\r');
                if cr_lf || lf_cr {
                    self.advance_char();
                }
                return Some(EscapeOutcome::LineContinuation);
            }
        }

        match ch {
            c if c == CodeUnit::from(b'\'') => {
                self.advance_char();
                Some(EscapeOutcome::CodePoint(u32::from(b'\'')))
            }
            c if c == CodeUnit::from(b'"') => {
                self.advance_char();
                Some(EscapeOutcome::CodePoint(u32::from(b'"')))
            }
            c if c == CodeUnit::from(b'\\') => {
                self.advance_char();
                Some(EscapeOutcome::CodePoint(u32::from(b'\\')))
            }
            c if c == CodeUnit::from(b'b') => {
                self.advance_char();
                Some(EscapeOutcome::CodePoint(0x08))
            }
            c if c == CodeUnit::from(b'f') => {
                self.advance_char();
                Some(EscapeOutcome::CodePoint(0x0C))
            }
            c if c == CodeUnit::from(b'n') => {
                self.advance_char();
                Some(EscapeOutcome::CodePoint(0x0A))
            }
            c if c == CodeUnit::from(b'r') => {
                self.advance_char();
                Some(EscapeOutcome::CodePoint(0x0D))
            }
            c if c == CodeUnit::from(b't') => {
                self.advance_char();
                Some(EscapeOutcome::CodePoint(0x09))
            }
            c if c == CodeUnit::from(b'v') => {
                self.advance_char();
                Some(EscapeOutcome::CodePoint(0x0B))
            }
            c if c == CodeUnit::from(b'x') => {
                let escape_start = self.position();
                self.advance_char();
                let mut value = 0u32;
                for _ in 0..2 {
                    match super::hex_digit_value(self.peek_char()) {
                        Some(d) => {
                            self.advance_char();
                            value = value * 16 + d;
                        }
                        None => {
                            self.record_error(LexError::InvalidEscape {
                                span: Span::new(escape_start, self.position()),
                            });
                            return None;
                        }
                    }
                }
                Some(EscapeOutcome::CodePoint(value))
            }
            c if c == CodeUnit::from(b'u') => {
                let escape_start = self.position();
                match self.scan_unicode_escape_value() {
                    Some(v) => Some(EscapeOutcome::CodePoint(v)),
                    None => {
                        self.record_error(LexError::InvalidEscape {
                            span: Span::new(escape_start, self.position()),
                        });
                        None
                    }
                }
            }
            c if c == CodeUnit::from(b'0') => {
                self.advance_char();
                if is_octal_digit_unit(self.peek_char()) {
                    // `\0` followed by another digit is a legacy octal
                    // escape, not a plain NUL.
                    self.scan_legacy_octal_escape(span_start, 0)
                } else {
                    Some(EscapeOutcome::CodePoint(0))
                }
            }
            c if (CodeUnit::from(b'1')..=CodeUnit::from(b'7')).contains(&c) => {
                let first_digit = (self.advance_char() - CodeUnit::from(b'0')) as u32;
                self.scan_legacy_octal_escape(span_start, first_digit)
            }
            _ => {
                // Any other `\c`: literal `c` (non-ECMA, but ubiquitous in
                // the wild).
                let c = char::from_u32(ch as u32).unwrap_or('\u{FFFD}');
                self.advance_char();
                Some(EscapeOutcome::CodePoint(c as u32))
            }
        }
    }

    fn scan_legacy_octal_escape(&mut self, span_start: u32, first_digit: u32) -> Option<EscapeOutcome> {
        let mut value = first_digit;
        let mut digits = 1;
        while digits < 3 && is_octal_digit_unit(self.peek_char()) {
            let next_value = value * 8 + (self.peek_char() - CodeUnit::from(b'0')) as u32;
            if next_value > 255 {
                break;
            }
            value = next_value;
            self.advance_char();
            digits += 1;
        }
        self.record_octal(Span::new(span_start, self.position()));
        Some(EscapeOutcome::CodePoint(value))
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Literal, Scanner};
    use ecma_allocator::Allocator;
    use ecma_span::Span;
    use ecma_syntax::{Kind, LexerFlags};

    use crate::stream::CharacterStream;

    #[test]
    fn simple_string_is_a_source_slice() {
        let allocator = Allocator::default();
        let stream = CharacterStream::from_utf8(b"'hello'");
        let scanner = Scanner::new(&allocator, stream, LexerFlags::empty());
        assert_eq!(scanner.current_token().kind, Kind::String);
        assert_eq!(scanner.current_token().span, Span::new(0, 7));
        assert!(!scanner.current_token().has_escapes);
    }

    #[test]
    fn escape_sequence_decodes_into_buffer() {
        let allocator = Allocator::default();
        let stream = CharacterStream::from_utf8(b"'a\\u0041b'");
        let scanner = Scanner::new(&allocator, stream, LexerFlags::empty());
        assert_eq!(scanner.current_token().kind, Kind::String);
        assert!(scanner.current_token().has_escapes);
        match scanner.literal() {
            Literal::OneByte(bytes) => assert_eq!(bytes, b"aAb"),
            other => panic!("expected one-byte buffer literal, got {other:?}"),
        }
    }

    #[test]
    fn unterminated_string_is_illegal_at_eof() {
        let allocator = Allocator::default();
        let stream = CharacterStream::from_utf8(b"'abc");
        let scanner = Scanner::new(&allocator, stream, LexerFlags::empty());
        assert_eq!(scanner.current_token().kind, Kind::Illegal);
        assert_eq!(scanner.current_token().span.end, 4);
    }

    #[test]
    fn raw_line_terminator_terminates_as_illegal() {
        let allocator = Allocator::default();
        let stream = CharacterStream::from_utf8(b"'abc\ndef'");
        let scanner = Scanner::new(&allocator, stream, LexerFlags::empty());
        assert_eq!(scanner.current_token().kind, Kind::Illegal);
    }

    #[test]
    fn legacy_octal_escape_is_recorded() {
        let allocator = Allocator::default();
        let stream = CharacterStream::from_utf8(b"'\\101'");
        let mut scanner = Scanner::new(&allocator, stream, LexerFlags::empty());
        assert_eq!(scanner.current_token().kind, Kind::String);
        match scanner.literal() {
            Literal::OneByte(bytes) => assert_eq!(bytes, b"A"),
            other => panic!("expected one-byte buffer literal, got {other:?}"),
        }
        assert_eq!(scanner.octal_position(), Span::new(0, 5));
        let _ = scanner.advance();
    }
}
