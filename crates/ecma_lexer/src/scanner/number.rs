//! Numeric literal scan (spec §4.3.3). The scanner only validates and spans
//! the literal; numeric conversion is left to the parser.

use ecma_diagnostics::LexError;
use ecma_span::Span;
use ecma_syntax::{Kind, LexerFlags};

use crate::stream::{CodeUnit, END_OF_INPUT};
use crate::token::{LiteralRef, Token};

use super::Scanner;

fn is_ascii_digit_unit(c: CodeUnit) -> bool {
    (CodeUnit::from(b'0')..=CodeUnit::from(b'9')).contains(&c)
}

fn is_octal_digit_unit(c: CodeUnit) -> bool {
    (CodeUnit::from(b'0')..=CodeUnit::from(b'7')).contains(&c)
}

fn is_hex_digit_unit(c: CodeUnit) -> bool {
    is_ascii_digit_unit(c)
        || (CodeUnit::from(b'a')..=CodeUnit::from(b'f')).contains(&c)
        || (CodeUnit::from(b'A')..=CodeUnit::from(b'F')).contains(&c)
}

fn is_binary_digit_unit(c: CodeUnit) -> bool {
    c == CodeUnit::from(b'0') || c == CodeUnit::from(b'1')
}

impl<'a> Scanner<'a> {
    pub(super) fn scan_number(&mut self, token: &mut Token) -> Kind {
        let start = token.span.start;
        let mut illegal = false;

        let first = self.advance_char();

        if first == CodeUnit::from(b'0') {
            let next = self.peek_char();
            if next == CodeUnit::from(b'x') || next == CodeUnit::from(b'X') {
                self.advance_char();
                if !self.scan_digit_run(is_hex_digit_unit) {
                    illegal = true;
                }
            } else if (next == CodeUnit::from(b'o') || next == CodeUnit::from(b'O'))
                && self.flags.contains(LexerFlags::HARMONY_NUMERIC_LITERALS)
            {
                self.advance_char();
                if !self.scan_digit_run(is_octal_digit_unit) {
                    illegal = true;
                }
            } else if (next == CodeUnit::from(b'b') || next == CodeUnit::from(b'B'))
                && self.flags.contains(LexerFlags::HARMONY_NUMERIC_LITERALS)
            {
                self.advance_char();
                if !self.scan_digit_run(is_binary_digit_unit) {
                    illegal = true;
                }
            } else if is_octal_digit_unit(next) {
                let mut all_octal = true;
                loop {
                    let d = self.peek_char();
                    if is_octal_digit_unit(d) {
                        self.advance_char();
                    } else if is_ascii_digit_unit(d) {
                        all_octal = false;
                        self.advance_char();
                    } else {
                        break;
                    }
                }
                if all_octal {
                    self.record_octal(Span::new(start, self.position()));
                    token.contains_legacy_octal = true;
                } else {
                    self.scan_decimal_tail();
                }
            } else {
                self.scan_decimal_tail();
            }
        } else {
            self.scan_decimal_digits();
            self.scan_decimal_tail();
        }

        let end = self.position();

        let next = self.peek_char();
        let next_is_bad = if next == END_OF_INPUT {
            false
        } else if next < 0x80 {
            ecma_syntax::identifier::is_identifier_start_ascii_byte(next as u8) || is_ascii_digit_unit(next)
        } else {
            char::from_u32(next as u32).map(ecma_syntax::identifier::is_identifier_start_unicode).unwrap_or(false)
        };
        if next_is_bad {
            illegal = true;
        }

        token.literal = LiteralRef::Source { offset: start, length: end - start, one_byte: true };

        if illegal {
            loop {
                let c = self.peek_char();
                let is_trailing_part = c != END_OF_INPUT
                    && if c < 0x80 {
                        ecma_syntax::identifier::is_identifier_part_ascii_byte(c as u8)
                    } else {
                        char::from_u32(c as u32)
                            .map(ecma_syntax::identifier::is_identifier_part_unicode)
                            .unwrap_or(false)
                    };
                if !is_trailing_part {
                    break;
                }
                self.advance_char();
            }
            self.record_error(LexError::InvalidNumericLiteral { span: Span::new(start, self.position()) });
            return Kind::Illegal;
        }

        Kind::Number
    }

    fn scan_digit_run(&mut self, pred: fn(CodeUnit) -> bool) -> bool {
        let mut count = 0;
        while pred(self.peek_char()) {
            self.advance_char();
            count += 1;
        }
        count > 0
    }

    fn scan_decimal_digits(&mut self) {
        while is_ascii_digit_unit(self.peek_char()) {
            self.advance_char();
        }
    }

    fn scan_decimal_tail(&mut self) {
        if self.peek_char() == CodeUnit::from(b'.') {
            self.advance_char();
            self.scan_decimal_digits();
        }

        let peek = self.peek_char();
        if peek == CodeUnit::from(b'e') || peek == CodeUnit::from(b'E') {
            let e = self.advance_char();
            let sign = if self.peek_char() == CodeUnit::from(b'+') || self.peek_char() == CodeUnit::from(b'-') {
                Some(self.advance_char())
            } else {
                None
            };
            if is_ascii_digit_unit(self.peek_char()) {
                self.scan_decimal_digits();
            } else {
                if let Some(s) = sign {
                    self.push_back(s);
                }
                self.push_back(e);
            }
        }
    }
}
