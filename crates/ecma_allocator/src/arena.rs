//! Thin re-exports of `bumpalo`'s arena-backed collections, so callers never
//! need to depend on `bumpalo` directly.

pub use bumpalo::boxed::Box;
pub use bumpalo::collections::String;
pub use bumpalo::collections::Vec;
