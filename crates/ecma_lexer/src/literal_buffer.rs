//! `LiteralBuffer` (spec §3.4/§4.2): append-only scratch storage for one
//! token's decoded identifier/string/template contents, auto-widening from
//! one-byte to two-byte the first time a code point `>= 256` is appended.

use ecma_allocator::{Allocator, Vec as ArenaVec};

enum Backing<'a> {
    OneByte(ArenaVec<'a, u8>),
    TwoByte(ArenaVec<'a, u16>),
}

/// Scratch buffer for decoded literal content. Two of these are owned by a
/// `Scanner` and ping-ponged between `current` and `next` tokens (spec
/// §4.3.6), so that `current`'s literal stays valid while `next` is being
/// scanned into the other buffer.
pub struct LiteralBuffer<'a> {
    allocator: &'a Allocator,
    backing: Backing<'a>,
}

impl<'a> LiteralBuffer<'a> {
    pub fn new(allocator: &'a Allocator) -> Self {
        Self { allocator, backing: Backing::OneByte(ArenaVec::new_in(allocator)) }
    }

    /// Drop contents and return to one-byte mode. O(1): the arena is never
    /// freed here, just the vectors are recreated empty (matching the
    /// teacher's bump allocator, which doesn't support individual frees
    /// anyway — the memory is reclaimed when the whole `Allocator` drops).
    pub fn reset(&mut self) {
        self.backing = Backing::OneByte(ArenaVec::new_in(self.allocator));
    }

    /// Append one decoded code point. Triggers a one-shot promotion to
    /// two-byte storage the first time a code point `>= 256` arrives while
    /// still in one-byte mode (spec §3.4).
    pub fn push(&mut self, code_point: u32) {
        match &mut self.backing {
            Backing::OneByte(buf) if code_point < 256 => buf.push(code_point as u8),
            Backing::OneByte(buf) => {
                let mut widened = ArenaVec::with_capacity_in(buf.len() + 1, self.allocator);
                for &b in buf.iter() {
                    widened.push(u16::from(b));
                }
                if code_point <= 0xFFFF {
                    widened.push(code_point as u16);
                } else {
                    // Supplementary code point as the very first non-Latin1
                    // append: split into a surrogate pair (spec §4.6), same
                    // as the already-two-byte arm below.
                    let v = code_point - 0x10000;
                    widened.push(0xD800 + (v >> 10) as u16);
                    widened.push(0xDC00 + (v & 0x3FF) as u16);
                }
                self.backing = Backing::TwoByte(widened);
            }
            Backing::TwoByte(buf) => {
                if code_point <= 0xFFFF {
                    buf.push(code_point as u16);
                } else {
                    // Supplementary code point in an already-widened buffer:
                    // split into a surrogate pair (spec §4.6).
                    let v = code_point - 0x10000;
                    buf.push(0xD800 + (v >> 10) as u16);
                    buf.push(0xDC00 + (v & 0x3FF) as u16);
                }
            }
        }
    }

    /// Append a run of source text known to contain only one-byte-encodable
    /// (Latin-1) characters, without going through `push` char-by-char.
    pub fn push_str_one_byte(&mut self, text: &str) {
        for b in text.bytes() {
            self.push(u32::from(b));
        }
    }

    #[inline]
    pub fn is_one_byte(&self) -> bool {
        matches!(self.backing, Backing::OneByte(_))
    }

    #[inline]
    pub fn len(&self) -> usize {
        match &self.backing {
            Backing::OneByte(buf) => buf.len(),
            Backing::TwoByte(buf) => buf.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_one_byte(&self) -> Option<&[u8]> {
        match &self.backing {
            Backing::OneByte(buf) => Some(buf.as_slice()),
            Backing::TwoByte(_) => None,
        }
    }

    pub fn as_two_byte(&self) -> Option<&[u16]> {
        match &self.backing {
            Backing::TwoByte(buf) => Some(buf.as_slice()),
            Backing::OneByte(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_one_byte_and_stays_one_byte_for_latin1_content() {
        let allocator = Allocator::default();
        let mut buf = LiteralBuffer::new(&allocator);
        buf.push('a' as u32);
        buf.push(0xE9); // é, Latin-1
        assert!(buf.is_one_byte());
        assert_eq!(buf.as_one_byte().unwrap(), &[b'a', 0xE9]);
    }

    #[test]
    fn promotes_to_two_byte_on_first_high_code_point() {
        let allocator = Allocator::default();
        let mut buf = LiteralBuffer::new(&allocator);
        buf.push('a' as u32);
        buf.push(0x4E2D); // 中
        assert!(!buf.is_one_byte());
        assert_eq!(buf.as_two_byte().unwrap(), &[u16::from(b'a'), 0x4E2D]);
    }

    #[test]
    fn stays_two_byte_after_reset_is_called() {
        let allocator = Allocator::default();
        let mut buf = LiteralBuffer::new(&allocator);
        buf.push(0x4E2D);
        assert!(!buf.is_one_byte());
        buf.reset();
        assert!(buf.is_one_byte());
        assert!(buf.is_empty());
    }

    #[test]
    fn supplementary_code_point_becomes_surrogate_pair_in_two_byte_buffer() {
        let allocator = Allocator::default();
        let mut buf = LiteralBuffer::new(&allocator);
        buf.push(0x4E2D); // force two-byte mode
        buf.push(0x1F600); // astral
        let units = buf.as_two_byte().unwrap();
        assert_eq!(units, &[0x4E2D, 0xD83D, 0xDE00]);
    }

    #[test]
    fn supplementary_code_point_as_first_append_still_becomes_surrogate_pair() {
        let allocator = Allocator::default();
        let mut buf = LiteralBuffer::new(&allocator);
        buf.push(0x1F600); // astral, while still one-byte: must promote and split
        assert!(!buf.is_one_byte());
        let units = buf.as_two_byte().unwrap();
        assert_eq!(units, &[0xD83D, 0xDE00]);
    }
}
