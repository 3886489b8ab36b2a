//! Template literal scan (spec §4.3.1 step 3, "one of four template
//! tokens"). Reuses the string-escape grammar (`scan_string_escape`) for
//! backslash escapes inside the template body.

use ecma_diagnostics::LexError;
use ecma_span::Span;
use ecma_syntax::Kind;

use crate::stream::{CodeUnit, END_OF_INPUT};
use crate::token::{LiteralRef, Token};

use super::string::EscapeOutcome;
use super::Scanner;

impl<'a> Scanner<'a> {
    pub(super) fn scan_template(&mut self, token: &mut Token) -> Kind {
        let start = token.span.start;
        self.advance_char(); // backtick
        self.scan_template_body(token, start, false)
    }

    /// Resumes template scanning after the parser has consumed a `}` that it
    /// determined closes a `${...}` interpolation (there is no public way to
    /// express this via `next()`/`peek()` alone, since the scanner can't
    /// tell a closing `}` of an interpolation apart from an ordinary one).
    pub fn continue_template(&mut self) -> Token {
        let start = self.position();
        let mut token =
            Token { kind: Kind::Undetermined, span: Span::new(start, start), ..Token::default() };
        let kind = self.scan_template_body(&mut token, start, true);
        token.kind = kind;
        token.span.end = self.position();
        token
    }

    fn scan_template_body(&mut self, token: &mut Token, start: u32, is_continuation: bool) -> Kind {
        let body_start = self.position();
        let mut has_escapes = false;
        let mut saw_non_latin1 = false;

        loop {
            let ch = self.peek_char();

            if ch == END_OF_INPUT {
                self.record_error(LexError::UnterminatedString { span: Span::new(start, self.position()) });
                return Kind::Illegal;
            }

            if ch == CodeUnit::from(b'`') {
                let body_end = self.position();
                self.advance_char();
                self.finish_template_literal(token, body_start, body_end, has_escapes, saw_non_latin1);
                return if is_continuation { Kind::TemplateTail } else { Kind::NoSubstitutionTemplate };
            }

            if ch == CodeUnit::from(b'$') {
                let body_end_candidate = self.position();
                self.advance_char();
                if self.peek_char() == CodeUnit::from(b'{') {
                    self.advance_char();
                    self.finish_template_literal(token, body_start, body_end_candidate, has_escapes, saw_non_latin1);
                    return if is_continuation { Kind::TemplateMiddle } else { Kind::TemplateHead };
                }
                if has_escapes {
                    self.active_literal_buffer().push(u32::from(b'$'));
                }
                continue;
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
    }

    fn finish_template_literal(
        &mut self,
        token: &mut Token,
        body_start: u32,
        body_end: u32,
        has_escapes: bool,
        saw_non_latin1: bool,
    ) {
        if has_escapes {
            token.has_escapes = true;
            let one_byte = self.active_literal_buffer().is_one_byte();
            token.literal = LiteralRef::Buffer { buffer: self.active_buffer_index(), one_byte };
        } else {
            token.literal =
                LiteralRef::Source { offset: body_start, length: body_end - body_start, one_byte: !saw_non_latin1 };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Scanner;
    use ecma_allocator::Allocator;
    use ecma_syntax::{Kind, LexerFlags};

    use crate::stream::CharacterStream;

    #[test]
    fn plain_template_is_no_substitution() {
        let allocator = Allocator::default();
        let stream = CharacterStream::from_utf8(b"`hello`");
        let scanner = Scanner::new(&allocator, stream, LexerFlags::empty());
        assert_eq!(scanner.current_token().kind, Kind::NoSubstitutionTemplate);
    }

    #[test]
    fn template_head_stops_at_interpolation() {
        let allocator = Allocator::default();
        let stream = CharacterStream::from_utf8(b"`a${b}c`");
        let scanner = Scanner::new(&allocator, stream, LexerFlags::empty());
        assert_eq!(scanner.current_token().kind, Kind::TemplateHead);
        assert_eq!(scanner.current_token().span.end, 4); // "`a${" is 4 code units
    }

    #[test]
    fn continue_template_after_interpolation_yields_tail() {
        let allocator = Allocator::default();
        // Simulate: lexer already produced `` `a${ `` then the parser
        // consumed `b` and `}`; now it resumes template scanning at `c```,
        // i.e. after whatever the interpolated expression was.
        let stream = CharacterStream::from_utf8(b"x; c`");
        let mut scanner = Scanner::new(&allocator, stream, LexerFlags::empty());
        scanner.stream.seek(3); // position of 'c'
        let token = scanner.continue_template();
        assert_eq!(token.kind, Kind::TemplateTail);
    }
}
