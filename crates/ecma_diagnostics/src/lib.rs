//! Closed error taxonomy for the lexer (spec §7).
//!
//! None of these abort scanning: the scanner always pushes one of these onto
//! its error list and still returns an `Illegal` token with the offending
//! span, so the parser (or whatever the caller is) decides how to report it.

use ecma_span::Span;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unterminated string literal")]
    #[diagnostic(code(lexer::unterminated_string))]
    UnterminatedString {
        #[label("string starts here and is never closed")]
        span: Span,
    },

    #[error("unterminated comment")]
    #[diagnostic(code(lexer::unterminated_comment))]
    UnterminatedComment {
        #[label("comment starts here and is never closed")]
        span: Span,
    },

    #[error("unterminated regular expression literal")]
    #[diagnostic(code(lexer::unterminated_regexp))]
    UnterminatedRegExp {
        #[label("regular expression starts here and is never closed")]
        span: Span,
    },

    #[error("invalid escape sequence")]
    #[diagnostic(code(lexer::invalid_escape))]
    InvalidEscape {
        #[label("this escape sequence is malformed")]
        span: Span,
    },

    #[error("invalid numeric literal")]
    #[diagnostic(code(lexer::invalid_numeric_literal))]
    InvalidNumericLiteral {
        #[label("this numeric literal is malformed")]
        span: Span,
    },

    #[error("invalid unicode escape in identifier")]
    #[diagnostic(code(lexer::invalid_identifier_escape))]
    InvalidIdentifierEscape {
        #[label("escape does not decode to a valid identifier character")]
        span: Span,
    },

    #[error("unexpected character")]
    #[diagnostic(code(lexer::stray_character))]
    StrayCharacter {
        #[label("not a recognized token")]
        span: Span,
    },
}

impl LexError {
    /// The span every variant carries, useful for callers that just want to
    /// know where to point without matching on the kind.
    pub fn span(&self) -> Span {
        match self {
            Self::UnterminatedString { span }
            | Self::UnterminatedComment { span }
            | Self::UnterminatedRegExp { span }
            | Self::InvalidEscape { span }
            | Self::InvalidNumericLiteral { span }
            | Self::InvalidIdentifierEscape { span }
            | Self::StrayCharacter { span } => *span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_accessor_matches_each_variant() {
        let span = Span::new(3, 7);
        let errors = [
            LexError::UnterminatedString { span },
            LexError::UnterminatedComment { span },
            LexError::UnterminatedRegExp { span },
            LexError::InvalidEscape { span },
            LexError::InvalidNumericLiteral { span },
            LexError::InvalidIdentifierEscape { span },
            LexError::StrayCharacter { span },
        ];
        for error in errors {
            assert_eq!(error.span(), span);
        }
    }
}
