//! Punctuation and operator maximal munch (spec §4.3.1 step 3).

use ecma_diagnostics::LexError;
use ecma_span::Span;
use ecma_syntax::Kind;

use crate::stream::CodeUnit;
use crate::token::Token;

use super::Scanner;

impl<'a> Scanner<'a> {
    pub(super) fn scan_punctuation(&mut self, token: &mut Token, first: u8) -> Kind {
        self.advance_char();
        match first {
            b'(' => Kind::LParen,
            b')' => Kind::RParen,
            b'[' => Kind::LBrack,
            b']' => Kind::RBrack,
            b'{' => Kind::LCurly,
            b'}' => Kind::RCurly,
            b';' => Kind::Semicolon,
            b',' => Kind::Comma,
            b':' => Kind::Colon,
            b'~' => Kind::Tilde,
            b'.' => self.scan_dot(),
            b'?' => self.scan_question(),
            b'!' => self.scan_bang(),
            b'=' => self.scan_equal(),
            b'+' => self.scan_plus(),
            b'-' => self.scan_minus(),
            b'*' => self.scan_star(),
            b'/' => self.scan_slash(),
            b'%' => self.scan_percent(),
            b'<' => self.scan_langle(),
            b'>' => self.scan_rangle(),
            b'&' => self.scan_amp(),
            b'|' => self.scan_pipe(),
            b'^' => self.scan_caret(),
            _ => {
                self.record_error(LexError::StrayCharacter { span: Span::new(token.span.start, self.position()) });
                Kind::Illegal
            }
        }
    }

    #[inline]
    fn eat(&mut self, b: u8) -> bool {
        if self.peek_char() == CodeUnit::from(b) {
            self.advance_char();
            true
        } else {
            false
        }
    }

    fn scan_dot(&mut self) -> Kind {
        if self.eat(b'.') {
            if self.eat(b'.') {
                Kind::Dot3
            } else {
                self.push_back(CodeUnit::from(b'.'));
                Kind::Dot
            }
        } else {
            Kind::Dot
        }
    }

    fn scan_question(&mut self) -> Kind {
        if self.peek_char() == CodeUnit::from(b'.') {
            let dot = self.advance_char();
            // `?.3` is `?` then `.3`: a numeric literal, not optional
            // chaining into a property named `3`.
            let after = self.peek_char();
            if (CodeUnit::from(b'0')..=CodeUnit::from(b'9')).contains(&after) {
                self.push_back(dot);
                return Kind::Question;
            }
            return Kind::QuestionDot;
        }
        if self.eat(b'?') {
            if self.eat(b'=') {
                Kind::Question2Eq
            } else {
                Kind::QuestionQuestion
            }
        } else {
            Kind::Question
        }
    }

    fn scan_bang(&mut self) -> Kind {
        if self.eat(b'=') {
            if self.eat(b'=') {
                Kind::Neq2
            } else {
                Kind::Neq
            }
        } else {
            Kind::Bang
        }
    }

    fn scan_equal(&mut self) -> Kind {
        if self.eat(b'=') {
            if self.eat(b'=') {
                Kind::Eq3
            } else {
                Kind::Eq2
            }
        } else if self.eat(b'>') {
            Kind::Arrow
        } else {
            Kind::Eq
        }
    }

    fn scan_plus(&mut self) -> Kind {
        if self.eat(b'+') {
            Kind::Plus2
        } else if self.eat(b'=') {
            Kind::PlusEq
        } else {
            Kind::Plus
        }
    }

    fn scan_minus(&mut self) -> Kind {
        if self.eat(b'-') {
            Kind::Minus2
        } else if self.eat(b'=') {
            Kind::MinusEq
        } else {
            Kind::Minus
        }
    }

    fn scan_star(&mut self) -> Kind {
        if self.eat(b'*') {
            if self.eat(b'=') {
                Kind::Star2Eq
            } else {
                Kind::Star2
            }
        } else if self.eat(b'=') {
            Kind::StarEq
        } else {
            Kind::Star
        }
    }

    fn scan_slash(&mut self) -> Kind {
        // `/` vs the start of a regex literal is ambiguous at this level;
        // the parser re-dispatches via `scan_regexp_pattern` when it decides
        // a `/` (or `/=`) token actually opens a regex.
        if self.eat(b'=') {
            Kind::SlashEq
        } else {
            Kind::Slash
        }
    }

    fn scan_percent(&mut self) -> Kind {
        if self.eat(b'=') {
            Kind::PercentEq
        } else {
            Kind::Percent
        }
    }

    fn scan_langle(&mut self) -> Kind {
        if self.eat(b'<') {
            if self.eat(b'=') {
                Kind::ShiftLeftEq
            } else {
                Kind::ShiftLeft
            }
        } else if self.eat(b'=') {
            Kind::LtEq
        } else {
            Kind::LAngle
        }
    }

    fn scan_rangle(&mut self) -> Kind {
        if self.eat(b'>') {
            if self.eat(b'>') {
                if self.eat(b'=') {
                    Kind::ShiftRight3Eq
                } else {
                    Kind::ShiftRight3
                }
            } else if self.eat(b'=') {
                Kind::ShiftRightEq
            } else {
                Kind::ShiftRight
            }
        } else if self.eat(b'=') {
            Kind::GtEq
        } else {
            Kind::RAngle
        }
    }

    fn scan_amp(&mut self) -> Kind {
        if self.eat(b'&') {
            if self.eat(b'=') {
                Kind::Amp2Eq
            } else {
                Kind::Amp2
            }
        } else if self.eat(b'=') {
            Kind::AmpEq
        } else {
            Kind::Amp
        }
    }

    fn scan_pipe(&mut self) -> Kind {
        if self.eat(b'|') {
            if self.eat(b'=') {
                Kind::Pipe2Eq
            } else {
                Kind::Pipe2
            }
        } else if self.eat(b'=') {
            Kind::PipeEq
        } else {
            Kind::Pipe
        }
    }

    fn scan_caret(&mut self) -> Kind {
        if self.eat(b'=') {
            Kind::CaretEq
        } else {
            Kind::Caret
        }
    }
}
