//! Growable word arena with interrupt-safe allocation spans.

use crate::errors::Interrupted;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// A reference to an object allocated in an [Arena].
///
/// Refs are minted by the converters in this crate and are only meaningful
/// for the arena that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjRef(pub(crate) usize);

impl ObjRef {
    /// The arena word index this ref points at.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The single growable word stack all heap numeric objects live in.
///
/// The arena is not synchronized; conversions take `&mut Arena` so callers
/// serialize them naturally. Objects are contiguous word runs and are never
/// moved or freed individually, only rolled back wholesale when an
/// allocation span aborts.
pub struct Arena {
    words: Vec<u64>,
    interrupt: Arc<AtomicBool>,
}

impl Arena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self { words: Vec::new(), interrupt: Arc::new(AtomicBool::new(false)) }
    }

    /// Returns a handle that can cancel in-flight conversions.
    pub fn interrupt_handle(&self) -> InterruptHandle {
        InterruptHandle { flag: self.interrupt.clone() }
    }

    /// Number of words currently allocated.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the arena holds no objects.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Opens an allocation span for one conversion sequence.
    ///
    /// Every allocation of the sequence goes through the returned span; the
    /// span must be committed once the last allocation succeeded.
    pub fn begin(&mut self) -> AllocSpan<'_> {
        let mark = self.words.len();
        AllocSpan { arena: self, mark, committed: false }
    }

    /// Reads one word of an object.
    pub(crate) fn word(&self, obj: ObjRef, offset: usize) -> u64 {
        self.words.get(obj.0.saturating_add(offset)).copied().unwrap_or_default()
    }

    /// Reads a run of `len` words starting at `obj + offset`.
    pub(crate) fn run(&self, obj: ObjRef, offset: usize, len: usize) -> &[u64] {
        let start = obj.0.saturating_add(offset);
        let end = start.saturating_add(len);
        self.words.get(start..end).unwrap_or_default()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable handle used to cancel conversions from outside.
#[derive(Clone)]
pub struct InterruptHandle {
    flag: Arc<AtomicBool>,
}

impl InterruptHandle {
    /// Requests that the next allocation in any open span fail.
    pub fn interrupt(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Clears a previously raised interrupt.
    pub fn clear(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

/// Scoped allocation boundary for one conversion sequence.
///
/// Each allocation checks the arena's interrupt flag first and fails with
/// [Interrupted] once it is raised. Dropping the span without
/// [AllocSpan::commit] truncates the arena back to where the span started,
/// so an aborted sequence never leaves a partially initialized object
/// visible.
pub struct AllocSpan<'a> {
    arena: &'a mut Arena,
    mark: usize,
    committed: bool,
}

impl AllocSpan<'_> {
    /// Reserves a zero-filled run of `len` words.
    pub fn alloc(&mut self, len: usize) -> Result<ObjRef, Interrupted> {
        if self.arena.interrupt.load(Ordering::Relaxed) {
            return Err(Interrupted);
        }
        let at = self.arena.words.len();
        self.arena.words.resize(at.saturating_add(len), 0);
        Ok(ObjRef(at))
    }

    /// Writes one word of a run reserved by this span.
    pub(crate) fn set(&mut self, obj: ObjRef, offset: usize, word: u64) {
        if let Some(slot) = self.arena.words.get_mut(obj.0.saturating_add(offset)) {
            *slot = word;
        }
    }

    /// Reads back one word of a run reserved by this span.
    pub(crate) fn word(&self, obj: ObjRef, offset: usize) -> u64 {
        self.arena.word(obj, offset)
    }

    /// Makes the span's allocations permanent.
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for AllocSpan<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.arena.words.truncate(self.mark);
        }
    }
}
