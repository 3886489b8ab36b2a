//! Bump allocator used to own literal strings decoded by the lexer's
//! literal buffers when they cannot be exposed as a slice of the original
//! source (escape processing, or encoding widening from one-byte to two-byte).

use std::ops::Deref;

mod arena;

pub use arena::{Box, String, Vec};
use bumpalo::Bump;
use bumpalo::ChunkIter;

#[derive(Default)]
pub struct Allocator {
    bump: Bump,
}

impl Deref for Allocator {
    type Target = Bump;

    fn deref(&self) -> &Self::Target {
        &self.bump
    }
}

impl Allocator {
    pub fn iter_allocated_chunks(&mut self) -> ChunkIter<'_> {
        self.bump.iter_allocated_chunks()
    }

    /// Total bytes currently allocated. Used by the CLI's `--repeat` benchmarking
    /// mode to report arena growth.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}
