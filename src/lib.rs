//! # `inplace-optional` - an optional value with hand-managed inline storage
//!
//! [`Optional<T>`] represents "a `T`, or nothing" without a sentinel value,
//! heap allocation, or boxing. The payload lives in a `MaybeUninit<T>` slot
//! inside the container and a presence flag records whether that slot holds a
//! live value.
//!
//! ## Safety Guarantees
//!
//! - **At most one live value**: the slot never holds two values, not even
//!   while a replacement is in progress.
//! - **Drop exactly once**: the flag is cleared before a value is dropped or
//!   moved out, so panics in `T`'s constructor or destructor cannot cause a
//!   double drop.
//! - **Centralized unsafe**: every `MaybeUninit` operation goes through the
//!   small audited surface in `raw::slot`.
//!
//! ## Access paths
//!
//! - Checked: [`Optional::value`] / [`Optional::value_mut`] return
//!   `Err(BadOptionalAccess)` on an empty container.
//! - Borrowing: [`Optional::get`] / [`Optional::get_mut`] return `Option<&T>`.
//! - Unchecked: [`Optional::get_unchecked`] / [`Optional::get_unchecked_mut`]
//!   are `unsafe` and skip the presence check in release builds.
//!
//! ## Replacement semantics
//!
//! - `assign` / `assign_ref` / `clone_from` reuse the live value through
//!   `T`'s own assignment or `Clone::clone_from`.
//! - `emplace*` always drops the old value first, then builds the new one.
//!   If building fails, the container is left empty.
//!
//! ## Example
//!
//! ```rust
//! use inplace_optional::{BadOptionalAccess, Optional};
//!
//! let mut o: Optional<i32> = Optional::new();
//! assert!(!o.has_value());
//! assert_eq!(o.value(), Err(BadOptionalAccess));
//!
//! o.emplace(42);
//! assert!(o.has_value());
//! // SAFETY: presence checked above.
//! assert_eq!(unsafe { *o.get_unchecked() }, 42);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod optional;
mod raw;

pub use error::BadOptionalAccess;
pub use optional::Optional;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // For payloads without a niche, the flag fits where `Option` puts its tag.
    assert!(mem::size_of::<Optional<u64>>() == mem::size_of::<Option<u64>>());
    assert!(mem::size_of::<Optional<u32>>() == mem::size_of::<Option<u32>>());
    assert!(mem::align_of::<Optional<u64>>() == mem::align_of::<u64>());

    // A zero-sized payload costs only the flag.
    assert!(mem::size_of::<Optional<()>>() == 1);
};
