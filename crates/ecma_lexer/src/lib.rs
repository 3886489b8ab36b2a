//! Character-stream abstraction and ECMAScript token scanner (spec §2/§4).
//!
//! The public surface is deliberately thin: construct a [`CharacterStream`]
//! over source text, hand it to [`Scanner::new`] along with an [`Allocator`]
//! and [`LexerFlags`], then drive it with [`Scanner::advance`]/`peek`. Parser
//! re-dispatch (regex bodies, template continuations) is exposed as its own
//! methods rather than folded into `advance`, since only the caller knows
//! when those apply.

pub mod literal_buffer;
pub mod scanner;
pub mod stream;
pub mod token;

pub use ecma_allocator::Allocator;
pub use ecma_diagnostics::LexError;
pub use ecma_syntax::{Kind, LexerFlags};

pub use literal_buffer::LiteralBuffer;
pub use scanner::{Literal, Scanner};
pub use stream::{CharacterStream, CodeUnit, END_OF_INPUT};
pub use token::{LiteralRef, Token};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_scan_of_a_small_program() {
        let allocator = Allocator::default();
        let source = "function f(a, b) {\n  return a + b;\n}\n";
        let stream = CharacterStream::from_utf8(source.as_bytes());
        let mut scanner = Scanner::new(&allocator, stream, LexerFlags::empty());

        let mut kinds = Vec::new();
        loop {
            let kind = scanner.current_token().kind;
            kinds.push(kind);
            if kind == Kind::Eof {
                break;
            }
            scanner.advance();
        }

        assert_eq!(kinds.first(), Some(&Kind::Function));
        assert_eq!(kinds.last(), Some(&Kind::Eof));
        assert!(scanner.errors.is_empty());
    }

    #[test]
    fn harmony_flags_gate_modern_numeric_literals() {
        let allocator = Allocator::default();

        // Without the flag, "0" immediately followed by the identifier-start
        // `o` is a malformed numeric literal, not legacy octal.
        let plain_stream = CharacterStream::from_utf8(b"0o17");
        let plain = Scanner::new(&allocator, plain_stream, LexerFlags::empty());
        assert_eq!(plain.current_token().kind, Kind::Illegal);

        let harmony_stream = CharacterStream::from_utf8(b"0o17");
        let harmony = Scanner::new(&allocator, harmony_stream, LexerFlags::HARMONY_NUMERIC_LITERALS);
        assert_eq!(harmony.current_token().kind, Kind::Number);
        assert_eq!(harmony.current_token().span.end, 4);
    }

    #[test]
    fn eos_test_truncation_never_panics() {
        let source = "let x = `a${1 + 2}b`; /re[gex]/gi // trailing comment";
        for len in (0..=source.len()).rev() {
            let allocator = Allocator::default();
            let stream = CharacterStream::from_utf8(source[..len].as_bytes());
            let mut scanner = Scanner::new(&allocator, stream, LexerFlags::all_harmony());
            loop {
                let kind = scanner.current_token().kind;
                if kind == Kind::Eof {
                    break;
                }
                scanner.advance();
            }
        }
    }
}
