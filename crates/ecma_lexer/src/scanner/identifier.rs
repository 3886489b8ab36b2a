//! Identifier and keyword scan (spec §4.3.2).

use ecma_diagnostics::LexError;
use ecma_span::Span;
use ecma_syntax::Kind;

use crate::stream::{CodeUnit, END_OF_INPUT};
use crate::token::{LiteralRef, Token};

use super::Scanner;

/// Longest keyword (`instanceof`). Identifiers that exceed this while still
/// escape-free can never match a keyword, so the fast-path buffer never
/// needs to grow past it.
const MAX_KEYWORD_LEN: usize = 10;

impl<'a> Scanner<'a> {
    pub(super) fn scan_identifier_or_keyword(&mut self, token: &mut Token) -> Kind {
        let start = token.span.start;
        let mut has_escapes = false;
        let mut first_unit = true;
        let mut saw_non_latin1 = false;

        let mut ascii_buf = [0u8; MAX_KEYWORD_LEN];
        let mut ascii_len = 0usize;
        let mut ascii_overflowed = false;

        loop {
            let ch = self.peek_char();

            if ch == CodeUnit::from(b'\\') {
                if !has_escapes {
                    has_escapes = true;
                    let pos = self.position();
                    self.transcribe_source_range_into_active_buffer(start, pos);
                }
                self.advance_char();
                match self.scan_identifier_unicode_escape(first_unit) {
                    Some(code_point) => {
                        if code_point >= 256 {
                            saw_non_latin1 = true;
                        }
                        self.active_literal_buffer().push(code_point);
                    }
                    None => {
                        self.record_error(LexError::InvalidIdentifierEscape {
                            span: Span::new(start, self.position()),
                        });
                        return Kind::Illegal;
                    }
                }
                first_unit = false;
                continue;
            }

            if ch == END_OF_INPUT {
                break;
            }

            let is_part = if ch < 0x80 {
                ecma_syntax::identifier::is_identifier_part_ascii_byte(ch as u8)
            } else {
                char::from_u32(ch as u32).map(ecma_syntax::identifier::is_identifier_part_unicode).unwrap_or(false)
            };
            if !is_part {
                break;
            }

            if ch >= 256 {
                saw_non_latin1 = true;
            }
            if has_escapes {
                self.active_literal_buffer().push(ch as u32);
            } else if ch < 0x80 {
                if ascii_len < MAX_KEYWORD_LEN {
                    ascii_buf[ascii_len] = ch as u8;
                    ascii_len += 1;
                } else {
                    ascii_overflowed = true;
                }
            } else {
                ascii_overflowed = true;
            }
            self.advance_char();
            first_unit = false;
        }

        let end = self.position();

        if has_escapes {
            token.has_escapes = true;
            let one_byte = self.active_literal_buffer().is_one_byte();
            token.literal = LiteralRef::Buffer { buffer: self.active_buffer_index(), one_byte };
            return Kind::Identifier;
        }

        token.literal = LiteralRef::Source { offset: start, length: end - start, one_byte: !saw_non_latin1 };

        if !ascii_overflowed {
            if let Ok(text) = std::str::from_utf8(&ascii_buf[..ascii_len]) {
                return ecma_syntax::keyword::lookup(text, self.flags);
            }
        }
        Kind::Identifier
    }

    /// Decode one `\uXXXX`/`\u{hex+}` escape within an identifier, requiring
    /// the result to be a valid `IdentifierStart` (first code point of the
    /// identifier) or `IdentifierPart` (every subsequent one).
    fn scan_identifier_unicode_escape(&mut self, first_unit: bool) -> Option<u32> {
        let code_point = self.scan_unicode_escape_value()?;
        let c = char::from_u32(code_point)?;
        let valid = if first_unit {
            ecma_syntax::identifier::is_identifier_start(c)
        } else {
            ecma_syntax::identifier::is_identifier_part(c)
        };
        if valid {
            Some(code_point)
        } else {
            None
        }
    }
}
