//! Whitespace and line-terminator predicates (spec §4.5).

/// ECMA-262 `LineTerminator`: LF, CR, U+2028 (LS), U+2029 (PS).
#[inline]
pub const fn is_line_terminator(c: char) -> bool {
    matches!(c, '\u{000A}' | '\u{000D}' | '\u{2028}' | '\u{2029}')
}

/// ECMA-262 `WhiteSpace`, not including line terminators: TAB, VT, FF, SP,
/// NBSP, ZWNBSP (BOM), and the Unicode `Zs` category.
#[inline]
pub fn is_white_space(c: char) -> bool {
    matches!(
        c,
        '\u{0009}' // TAB
            | '\u{000B}' // VT
            | '\u{000C}' // FF
            | '\u{0020}' // SP
            | '\u{00A0}' // NBSP
            | '\u{FEFF}' // BOM / ZWNBSP
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_line_terminators() {
        for c in ['\n', '\r', '\u{2028}', '\u{2029}'] {
            assert!(is_line_terminator(c));
        }
        assert!(!is_line_terminator(' '));
    }

    #[test]
    fn recognizes_whitespace() {
        for c in [' ', '\t', '\u{000B}', '\u{000C}', '\u{00A0}', '\u{FEFF}', '\u{3000}'] {
            assert!(is_white_space(c));
        }
        assert!(!is_white_space('a'));
        assert!(!is_white_space('\n'));
    }
}
