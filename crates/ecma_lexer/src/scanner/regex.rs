//! Regular-expression literal scan (spec §4.3.5). Parser-driven: invoked
//! after the parser has decided a `/` or `/=` token it just consumed from
//! `current` actually opens a regex, not a division operator.

use ecma_diagnostics::LexError;
use ecma_span::Span;

use crate::stream::{CodeUnit, END_OF_INPUT};

use super::Scanner;

fn is_line_terminator_unit(c: CodeUnit) -> bool {
    c == 0x0A || c == 0x0D || c == 0x2028 || c == 0x2029
}

impl<'a> Scanner<'a> {
    /// Rewind to just after the leading `/` of `current` and scan the regex
    /// body up to (and including) the closing, unescaped `/`. `seen_equal`
    /// is accepted for parity with the public contract but doesn't change
    /// the rewind point: whether `current` was lexed as `/` or `/=`, the
    /// body always starts one code unit after the leading slash (an `=`
    /// consumed as part of `/=` simply becomes the first body character).
    pub fn scan_regexp_pattern(&mut self, seen_equal: bool) -> Result<Span, LexError> {
        let _ = seen_equal;
        let start = self.current.span.start;
        let body_start = start + 1;
        self.stream.seek(body_start);

        let mut in_class = false;
        loop {
            let ch = self.peek_char();

            if ch == END_OF_INPUT || is_line_terminator_unit(ch) {
                let err = LexError::UnterminatedRegExp { span: Span::new(start, self.position()) };
                self.record_error(err.clone());
                return Err(err);
            }

            if ch == CodeUnit::from(b'\\') {
                self.advance_char();
                let escaped = self.advance_char();
                // A leading surrogate means the stream just emitted the
                // first half of an astral code point; the scanner's
                // code-unit-level view makes this "two code units" in
                // exactly the sense the spec means by "the unit after `\`
                // is a leading surrogate".
                if (0xD800..=0xDBFF).contains(&escaped) {
                    self.advance_char();
                }
                continue;
            }

            if ch == CodeUnit::from(b'[') {
                in_class = true;
                self.advance_char();
                continue;
            }

            if ch == CodeUnit::from(b']') {
                in_class = false;
                self.advance_char();
                continue;
            }

            if ch == CodeUnit::from(b'/') && !in_class {
                self.advance_char();
                break;
            }

            self.advance_char();
        }

        Ok(Span::new(start, self.position()))
    }

    /// Scan the flag letters immediately following a regex body, treating
    /// `\u` escapes the same as in identifiers. Refills `next` afterward,
    /// since whatever `scan_one` speculatively produced for `next` while
    /// `current` still looked like a division expression is now stale.
    pub fn scan_regexp_flags(&mut self) -> Span {
        let start = self.position();
        loop {
            let ch = self.peek_char();
            if ch == CodeUnit::from(b'\\') {
                self.advance_char();
                let _ = self.scan_unicode_escape_value();
                continue;
            }
            let is_part = if ch == END_OF_INPUT {
                false
            } else if ch < 0x80 {
                ecma_syntax::identifier::is_identifier_part_ascii_byte(ch as u8)
            } else {
                char::from_u32(ch as u32).map(ecma_syntax::identifier::is_identifier_part_unicode).unwrap_or(false)
            };
            if !is_part {
                break;
            }
            self.advance_char();
        }
        let end = self.position();

        self.has_line_terminator_before_next = false;
        self.has_multiline_comment_before_next = false;
        self.next = self.scan_one();

        Span::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::super::Scanner;
    use ecma_allocator::Allocator;
    use ecma_span::Span;
    use ecma_syntax::{Kind, LexerFlags};

    use crate::stream::CharacterStream;

    #[test]
    fn pattern_and_flags_spans_match_scenario() {
        // `/re[gex]/gi` — pattern span [0, 10], flags span [10, 12].
        let allocator = Allocator::default();
        let stream = CharacterStream::from_utf8(b"/re[gex]/gi");
        let mut scanner = Scanner::new(&allocator, stream, LexerFlags::empty());
        assert_eq!(scanner.current_token().kind, Kind::Slash);

        let pattern = scanner.scan_regexp_pattern(false).expect("pattern scans");
        assert_eq!(pattern, Span::new(0, 10));

        let flags = scanner.scan_regexp_flags();
        assert_eq!(flags, Span::new(10, 12));
    }

    #[test]
    fn bracket_slash_does_not_close_the_pattern() {
        let allocator = Allocator::default();
        let stream = CharacterStream::from_utf8(b"/[a/b]c/");
        let mut scanner = Scanner::new(&allocator, stream, LexerFlags::empty());
        let pattern = scanner.scan_regexp_pattern(false).expect("pattern scans");
        assert_eq!(pattern, Span::new(0, 8));
    }

    #[test]
    fn unterminated_regexp_fails() {
        let allocator = Allocator::default();
        let stream = CharacterStream::from_utf8(b"/abc");
        let mut scanner = Scanner::new(&allocator, stream, LexerFlags::empty());
        assert!(scanner.scan_regexp_pattern(false).is_err());
    }
}
