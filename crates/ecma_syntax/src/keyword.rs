//! `KeywordTable` (spec §4.4): maps a one-byte-encodable identifier to
//! either a keyword `Kind` or `Kind::Identifier`.
//!
//! Uses `phf` (the teacher's `oxc_syntax` depends on it for exactly this
//! kind of lookup) so the whole table is a perfect hash built at compile
//! time — no allocation, no runtime hashing setup, and a miss is a single
//! failed probe.

use crate::flags::LexerFlags;
use crate::kind::Kind;

static KEYWORDS: phf::Map<&'static str, Kind> = phf::phf_map! {
    "if" => Kind::If,
    "else" => Kind::Else,
    "while" => Kind::While,
    "for" => Kind::For,
    "do" => Kind::Do,
    "break" => Kind::Break,
    "continue" => Kind::Continue,
    "return" => Kind::Return,
    "function" => Kind::Function,
    "var" => Kind::Var,
    "switch" => Kind::Switch,
    "case" => Kind::Case,
    "default" => Kind::Default,
    "throw" => Kind::Throw,
    "try" => Kind::Try,
    "catch" => Kind::Catch,
    "finally" => Kind::Finally,
    "new" => Kind::New,
    "delete" => Kind::Delete,
    "typeof" => Kind::Typeof,
    "instanceof" => Kind::Instanceof,
    "in" => Kind::In,
    "void" => Kind::Void,
    "this" => Kind::This,
    "null" => Kind::Null,
    "true" => Kind::True,
    "false" => Kind::False,
    "debugger" => Kind::Debugger,
    "enum" => Kind::Enum,
    "super" => Kind::Super,
    "let" => Kind::Let,
    "const" => Kind::Const,
    "class" => Kind::Class,
    "extends" => Kind::Extends,
    "import" => Kind::Import,
    "export" => Kind::Export,
    "async" => Kind::Async,
    "await" => Kind::Await,
    "yield" => Kind::Yield,
    "of" => Kind::Of,
};

/// Look up a (non-escaped) identifier's text against the reserved-word
/// table, honoring the contextual-keyword gating of spec §4.4/§6.1.
///
/// Callers must only invoke this for identifiers that contained no `\u`
/// escapes: "escapes disqualify keyword recognition" (spec §4.3.2), so the
/// lexer should never call `lookup` on an escaped identifier's decoded text.
pub fn lookup(text: &str, flags: LexerFlags) -> Kind {
    match KEYWORDS.get(text) {
        Some(&kind) if is_enabled(kind, flags) => kind,
        _ => Kind::Identifier,
    }
}

fn is_enabled(kind: Kind, flags: LexerFlags) -> bool {
    match kind {
        Kind::Let | Kind::Yield | Kind::Async | Kind::Await | Kind::Of => {
            flags.contains(kind_flag(kind))
        }
        Kind::Class | Kind::Const => flags.contains(LexerFlags::HARMONY_SCOPING),
        Kind::Export | Kind::Import => flags.contains(LexerFlags::HARMONY_MODULES),
        // All other keywords are unconditionally reserved.
        _ => true,
    }
}

fn kind_flag(kind: Kind) -> LexerFlags {
    match kind {
        Kind::Async | Kind::Await => LexerFlags::ASYNC_AWAIT,
        // `let`, `yield`, and `of` are gated behind the same scoping switch
        // that enables block-scoped declarations in the original harmony
        // proposals they shipped alongside.
        Kind::Let | Kind::Yield | Kind::Of => LexerFlags::HARMONY_SCOPING,
        _ => LexerFlags::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconditional_keywords_always_win() {
        assert_eq!(lookup("if", LexerFlags::empty()), Kind::If);
        assert_eq!(lookup("return", LexerFlags::all_harmony()), Kind::Return);
    }

    #[test]
    fn contextual_keywords_need_their_flag() {
        assert_eq!(lookup("let", LexerFlags::empty()), Kind::Identifier);
        assert_eq!(lookup("let", LexerFlags::HARMONY_SCOPING), Kind::Let);

        assert_eq!(lookup("async", LexerFlags::empty()), Kind::Identifier);
        assert_eq!(lookup("async", LexerFlags::ASYNC_AWAIT), Kind::Async);

        assert_eq!(lookup("import", LexerFlags::empty()), Kind::Identifier);
        assert_eq!(lookup("import", LexerFlags::HARMONY_MODULES), Kind::Import);
    }

    #[test]
    fn unknown_word_is_identifier() {
        assert_eq!(lookup("foo", LexerFlags::all_harmony()), Kind::Identifier);
    }

    #[test]
    fn every_harmony_flag_enables_its_own_keyword_set_only() {
        // Numeric literals flag doesn't leak into keyword gating.
        assert_eq!(
            lookup("let", LexerFlags::HARMONY_NUMERIC_LITERALS),
            Kind::Identifier
        );
    }
}
