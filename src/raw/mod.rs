//! Raw storage building blocks.
//!
//! This layer concentrates every unsafe `MaybeUninit` operation the crate
//! performs. Higher layers (`optional::*`) should not touch `MaybeUninit`
//! directly; they call the small, audited surface in [`slot`].

pub(crate) mod slot;
