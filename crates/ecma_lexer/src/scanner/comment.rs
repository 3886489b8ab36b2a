//! Whitespace, line-terminator, and comment skipping (spec §4.3.1 step 1).

use ecma_diagnostics::LexError;
use ecma_span::Span;

use crate::stream::{CodeUnit, END_OF_INPUT};

use super::Scanner;

impl<'a> Scanner<'a> {
    /// Skip one run of whitespace, line terminators, and comments, updating
    /// `has_line_terminator_before_next` / `has_multiline_comment_before_next`
    /// as it goes. Returns whether anything was consumed.
    pub(super) fn skip_whitespace_and_comments(&mut self) -> bool {
        let start = self.position();
        let mut line_start = start == 0 || self.has_line_terminator_before_next;

        loop {
            let ch = self.peek_char();

            if ch == END_OF_INPUT {
                break;
            }

            if let Some(c) = char::from_u32(ch as u32) {
                if ecma_syntax::whitespace::is_line_terminator(c) {
                    self.advance_char();
                    self.has_line_terminator_before_next = true;
                    line_start = true;
                    continue;
                }
                if ecma_syntax::whitespace::is_white_space(c) {
                    self.advance_char();
                    continue;
                }
            }

            if ch == CodeUnit::from(b'/') {
                let slash_pos = self.position();
                self.advance_char();
                match self.peek_char() {
                    c if c == CodeUnit::from(b'/') => {
                        self.advance_char();
                        self.skip_line_comment_body();
                        line_start = false;
                        continue;
                    }
                    c if c == CodeUnit::from(b'*') => {
                        self.advance_char();
                        if self.skip_block_comment_body(slash_pos) {
                            self.has_multiline_comment_before_next = true;
                            line_start = true;
                        } else {
                            line_start = false;
                        }
                        continue;
                    }
                    _ => {
                        self.push_back(CodeUnit::from(b'/'));
                        break;
                    }
                }
            }

            // Legacy HTML comment open, Annex B: `<!--` at start of line.
            if line_start && ch == CodeUnit::from(b'<') {
                let c1 = self.advance_char();
                if self.peek_char() == CodeUnit::from(b'!') {
                    let c2 = self.advance_char();
                    if self.peek_char() == CodeUnit::from(b'-') {
                        let c3 = self.advance_char();
                        if self.peek_char() == CodeUnit::from(b'-') {
                            self.advance_char();
                            self.skip_line_comment_body();
                            line_start = false;
                            continue;
                        }
                        self.push_back(c3);
                        self.push_back(c2);
                        self.push_back(c1);
                    } else {
                        self.push_back(c2);
                        self.push_back(c1);
                    }
                } else {
                    self.push_back(c1);
                }
                break;
            }

            // Legacy HTML comment close, Annex B: `-->` preceded by a line
            // terminator (approximated here by "preceded by trivia that
            // included one", matching the same leniency as `line_start`).
            if ch == CodeUnit::from(b'-') && self.has_line_terminator_before_next {
                let c1 = self.advance_char();
                if self.peek_char() == CodeUnit::from(b'-') {
                    let c2 = self.advance_char();
                    if self.peek_char() == CodeUnit::from(b'>') {
                        self.advance_char();
                        self.skip_line_comment_body();
                        line_start = false;
                        continue;
                    }
                    self.push_back(c2);
                    self.push_back(c1);
                } else {
                    self.push_back(c1);
                }
                break;
            }

            break;
        }

        self.position() != start
    }

    fn skip_line_comment_body(&mut self) {
        loop {
            let ch = self.peek_char();
            if ch == END_OF_INPUT {
                return;
            }
            if let Some(c) = char::from_u32(ch as u32) {
                if ecma_syntax::whitespace::is_line_terminator(c) {
                    return;
                }
            }
            self.advance_char();
        }
    }

    /// Returns whether the comment body contained a line terminator.
    fn skip_block_comment_body(&mut self, start: u32) -> bool {
        let mut saw_newline = false;
        loop {
            let ch = self.peek_char();
            if ch == END_OF_INPUT {
                self.record_error(LexError::UnterminatedComment { span: Span::new(start, self.position()) });
                return saw_newline;
            }
            if let Some(c) = char::from_u32(ch as u32) {
                if ecma_syntax::whitespace::is_line_terminator(c) {
                    saw_newline = true;
                }
            }
            self.advance_char();
            if ch == CodeUnit::from(b'*') && self.peek_char() == CodeUnit::from(b'/') {
                self.advance_char();
                return saw_newline;
            }
        }
    }
}
