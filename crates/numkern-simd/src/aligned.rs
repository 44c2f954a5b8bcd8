// ─────────────────────────────────────────────────────────────────────
// Numkern — Aligned Buffers
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Zero-initialised scalar storage with a caller-chosen alignment, for
//! slices that should start on a register boundary.

use std::alloc::{alloc_zeroed, dealloc, handle_alloc_error, Layout};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use numkern_types::error::{KernelError, KernelResult};
use numkern_types::tier::FloatTier;

use crate::lanes::LaneOps;

pub const MIN_ALIGNMENT: usize = 16;

pub struct AlignedBuffer<T: FloatTier> {
    ptr: NonNull<T>,
    len: usize,
    layout: Layout,
}

impl<T: FloatTier> AlignedBuffer<T> {
    /// `len` zeros starting on an `align`-byte boundary.
    pub fn new(len: usize, align: usize) -> KernelResult<Self> {
        if !align.is_power_of_two() || align < MIN_ALIGNMENT {
            return Err(KernelError::Alignment(align));
        }
        let align = align.max(std::mem::align_of::<T>());
        let bytes = len
            .checked_mul(std::mem::size_of::<T>())
            .ok_or_else(|| KernelError::ConfigError(format!("buffer of {len} elements overflows")))?;
        // Zero-sized requests still get a real allocation of one unit.
        let layout = Layout::from_size_align(bytes.max(align), align)
            .map_err(|e| KernelError::ConfigError(e.to_string()))?;

        // SAFETY: the layout has non-zero size.
        let raw = unsafe { alloc_zeroed(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            handle_alloc_error(layout);
        };
        tracing::debug!(len, align, "aligned buffer allocated");
        Ok(AlignedBuffer { ptr, len, layout })
    }

    /// Buffer aligned to the register width of `V`.
    pub fn for_lanes<V: LaneOps<Scalar = T>>(len: usize) -> KernelResult<Self> {
        let width = V::LANES * std::mem::size_of::<T>();
        Self::new(len, width.next_power_of_two().max(MIN_ALIGNMENT))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn alignment(&self) -> usize {
        self.layout.align()
    }
}

impl<T: FloatTier> Deref for AlignedBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        // SAFETY: `ptr` owns `len` zero-initialised elements, and all-zero
        // bits are +0.0 for every tier.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: FloatTier> DerefMut for AlignedBuffer<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: as for `deref`, with unique access through `&mut self`.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: FloatTier> Drop for AlignedBuffer<T> {
    fn drop(&mut self) {
        // SAFETY: allocated in `new` with exactly this layout.
        unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), self.layout) }
    }
}

impl<T: FloatTier> std::fmt::Debug for AlignedBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedBuffer")
            .field("len", &self.len)
            .field("align", &self.layout.align())
            .finish()
    }
}

// SAFETY: the buffer uniquely owns plain float data.
unsafe impl<T: FloatTier> Send for AlignedBuffer<T> {}
unsafe impl<T: FloatTier> Sync for AlignedBuffer<T> {}
