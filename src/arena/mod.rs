//! The word arena heap numeric objects are allocated from.

pub mod arena;

pub use arena::{AllocSpan, Arena, InterruptHandle, ObjRef};
