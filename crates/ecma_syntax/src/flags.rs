//! Harmony feature flags (spec §6.1), controlling which then-new ECMAScript
//! features the scanner recognizes.

use bitflags::bitflags;

bitflags! {
    /// Flags passed to `Lexer::new`/`init`, one bit per `harmony_*` switch
    /// from spec §4.3 and §6.1.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LexerFlags: u8 {
        /// Enables `0o...` and `0b...` numeric literals.
        const HARMONY_NUMERIC_LITERALS = 1 << 0;
        /// Enables `import` / `export` as keywords.
        const HARMONY_MODULES = 1 << 1;
        /// Enables `let` / `const` / `class` as keywords.
        const HARMONY_SCOPING = 1 << 2;
        /// Enables `async` / `await` as contextual keywords.
        const ASYNC_AWAIT = 1 << 3;
    }
}

impl LexerFlags {
    /// All harmony flags set, as produced by the CLI's `--use-harmony`.
    pub const fn all_harmony() -> Self {
        Self::HARMONY_NUMERIC_LITERALS
            .union(Self::HARMONY_MODULES)
            .union(Self::HARMONY_SCOPING)
            .union(Self::ASYNC_AWAIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_harmony_sets_every_bit() {
        let flags = LexerFlags::all_harmony();
        assert!(flags.contains(LexerFlags::HARMONY_NUMERIC_LITERALS));
        assert!(flags.contains(LexerFlags::HARMONY_MODULES));
        assert!(flags.contains(LexerFlags::HARMONY_SCOPING));
        assert!(flags.contains(LexerFlags::ASYNC_AWAIT));
    }

    #[test]
    fn default_has_no_flags() {
        assert_eq!(LexerFlags::default(), LexerFlags::empty());
    }
}
