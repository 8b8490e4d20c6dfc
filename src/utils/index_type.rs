//! Shared index types for index-linked collections.

use std::fmt::Debug;

/// A trait for integer types used as **compact singly-linked node indices**.
///
/// Instead of pointer-based links, [`HeaplessQueue`](crate::HeaplessQueue) stores
/// indices into arrays. This keeps the structure `#[no_std]`-friendly and shrinks
/// each link from 8 bytes (a pointer on 64-bit platforms) to 1, 2, or 4 bytes.
///
/// # Sentinel value
/// `NONE` is the sentinel for "no node" (equivalent to a null pointer). It is set to
/// the maximum value of the integer type, so it can never clash with a valid slot
/// index as long as the slot count stays within `MAX_SLOTS`.
///
/// # Implementations
/// | Type  | `NONE`     | `MAX_SLOTS` |
/// |-------|------------|-------------|
/// | `u8`  | 255        | 255         |
/// | `u16` | 65535      | 65535       |
/// | `u32` | 4294967295 | 4294967295  |
pub trait IndexType: Copy + Eq + Debug + 'static {
    /// Sentinel value indicating "no node" (analogous to a null pointer).
    /// Used for representing the end of a chain and an exhausted free-list.
    const NONE: Self;

    /// The first valid index (typically 0).
    const ZERO: Self;

    /// The largest slot count an arena indexed by this type may have.
    /// Valid slot indices are `0..MAX_SLOTS`, leaving `NONE` free as a sentinel.
    const MAX_SLOTS: usize;

    /// Converts this index to a `usize` for array access.
    fn as_usize(self) -> usize;

    /// Converts a `usize` slot index to this compact type.
    ///
    /// # Panics
    /// May truncate or panic if `i` does not fit the underlying type
    /// (e.g., > 255 for `u8`); callers must keep `i < MAX_SLOTS`.
    fn from_usize(i: usize) -> Self;
}

impl IndexType for u8 {
    const NONE: Self = u8::MAX;
    const ZERO: Self = 0;
    const MAX_SLOTS: usize = u8::MAX as usize;
    #[inline(always)]
    fn as_usize(self) -> usize {
        self as usize
    }
    #[inline(always)]
    fn from_usize(i: usize) -> Self {
        i as u8
    }
}

impl IndexType for u16 {
    const NONE: Self = u16::MAX;
    const ZERO: Self = 0;
    const MAX_SLOTS: usize = u16::MAX as usize;
    #[inline(always)]
    fn as_usize(self) -> usize {
        self as usize
    }
    #[inline(always)]
    fn from_usize(i: usize) -> Self {
        i as u16
    }
}

impl IndexType for u32 {
    const NONE: Self = u32::MAX;
    const ZERO: Self = 0;
    const MAX_SLOTS: usize = u32::MAX as usize;
    #[inline(always)]
    fn as_usize(self) -> usize {
        self as usize
    }
    #[inline(always)]
    fn from_usize(i: usize) -> Self {
        i as u32
    }
}
