//! Unsafe, centralized operations on a `MaybeUninit<T>` slot.
//!
//! `Optional<T>` keeps its payload in a single `MaybeUninit<T>` guarded by a
//! presence flag. These helpers provide a single place to audit:
//! - writes (`MaybeUninit::write`)
//! - moves out (`assume_init_read`)
//! - drops (`assume_init_drop`)
//! - conversion to references (`assume_init_ref` / `assume_init_mut`)
//!
//! ## Core invariant
//! For every caller in this crate the slot is initialized *exactly when* the
//! owning container's flag is set. The flag is set only after a write
//! completes and is cleared before a drop or move-out begins.

use core::mem::MaybeUninit;

/// Writes `value` into an uninitialized slot and returns a reference to it.
///
/// Safe to call, but if the slot already holds a live value that value is
/// leaked. Callers only write into slots whose flag is clear.
#[inline(always)]
pub(crate) fn write<T>(slot: &mut MaybeUninit<T>, value: T) -> &mut T {
    slot.write(value)
}

/// Interprets an initialized slot as `&T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is initialized.
    unsafe { slot.assume_init_ref() }
}

/// Interprets an initialized slot as `&mut T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is initialized; `&mut` gives exclusivity.
    unsafe { slot.assume_init_mut() }
}

/// Bitwise-moves an initialized value out of a slot.
///
/// # Safety
/// - `slot` must be initialized.
/// - The slot must be treated as uninitialized afterwards, otherwise the
///   value is dropped twice.
#[inline(always)]
pub(crate) unsafe fn read<T>(slot: &MaybeUninit<T>) -> T {
    // SAFETY: caller asserts initialization and gives up the slot's value.
    unsafe { slot.assume_init_read() }
}

/// Drops an initialized value in place.
///
/// # Safety
/// - `slot` must be initialized.
/// - Must not be called more than once for the same logical value.
#[inline(always)]
pub(crate) unsafe fn drop_in_place<T>(slot: &mut MaybeUninit<T>) {
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { slot.assume_init_drop() }
}
