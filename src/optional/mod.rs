//! `Optional` — zero-or-one value in inline storage (no sentinel, no heap).
//!
//! The payload lives in a `MaybeUninit<T>` next to a presence flag. Every
//! state transition goes through the audited helpers in `raw::slot`, and the
//! flag is the single source of truth for whether the slot holds a live `T`:
//! - the flag is set only after the value has been written, and
//! - the flag is cleared before the value is dropped or moved out,
//!
//! so a panic in `T`'s constructor or destructor can never lead to a double
//! drop, and the slot never holds two values at once.

mod inner;
mod traits;
mod serde_impl;
#[cfg(feature = "proptest")]
pub mod arbitrary;

use crate::error::BadOptionalAccess;
use crate::raw::slot;
use inner::Inner;

/// A value of type `T`, or nothing.
///
/// Unlike `Option<T>`, presence is tracked by an explicit flag and the
/// payload is constructed and destroyed by hand inside inline storage. The
/// container never allocates.
///
/// # Example
/// ```
/// use inplace_optional::Optional;
///
/// let mut name = Optional::some(String::from("hi"));
/// let copy = name.clone();
/// name.emplace_from("bye");
///
/// assert_eq!(copy.value().map(String::as_str), Ok("hi"));
/// assert_eq!(name.value().map(String::as_str), Ok("bye"));
/// ```
pub struct Optional<T> {
    inner: Inner<T>,
}

impl<T> Optional<T> {
    /// Creates an empty `Optional`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            inner: Inner::empty(),
        }
    }

    /// Creates an `Optional` holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self {
            inner: Inner::new(value),
        }
    }

    /// Creates an `Optional` holding a clone of `value`.
    #[inline]
    pub fn from_ref(value: &T) -> Self
    where
        T: Clone,
    {
        Self::some(value.clone())
    }

    /// Returns `true` if a value is present.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.inner.is_init
    }

    /// Returns a reference to the contained value, or `None` if empty.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        if self.inner.is_init {
            // SAFETY: flag is set, so the slot is initialized.
            Some(unsafe { slot::assume_init_ref(&self.inner.value) })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the contained value, or `None` if empty.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.inner.is_init {
            // SAFETY: flag is set, so the slot is initialized.
            Some(unsafe { slot::assume_init_mut(&mut self.inner.value) })
        } else {
            None
        }
    }

    /// Returns a reference to the contained value.
    ///
    /// # Errors
    /// Returns [`BadOptionalAccess`] if the container is empty.
    #[inline]
    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        self.get().ok_or(BadOptionalAccess)
    }

    /// Returns a mutable reference to the contained value.
    ///
    /// # Errors
    /// Returns [`BadOptionalAccess`] if the container is empty.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        self.get_mut().ok_or(BadOptionalAccess)
    }

    /// Returns a reference to the contained value without checking presence.
    ///
    /// # Safety
    /// The container must hold a value (`has_value()` is `true`). Calling this
    /// on an empty container is undefined behavior. The check is only
    /// performed in debug builds.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(self.inner.is_init, "get_unchecked on an empty Optional");
        // SAFETY: caller guarantees presence.
        unsafe { slot::assume_init_ref(&self.inner.value) }
    }

    /// Returns a mutable reference to the contained value without checking presence.
    ///
    /// # Safety
    /// The container must hold a value (`has_value()` is `true`).
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.inner.is_init, "get_unchecked_mut on an empty Optional");
        // SAFETY: caller guarantees presence.
        unsafe { slot::assume_init_mut(&mut self.inner.value) }
    }

    /// Returns a raw pointer to the storage slot.
    ///
    /// The pointer is always aligned for `T`, but it only points at a live
    /// value while `has_value()` is `true`.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.inner.value.as_ptr()
    }

    /// Returns a raw mutable pointer to the storage slot.
    ///
    /// Same validity rules as [`as_ptr`](Self::as_ptr). Writing through it
    /// does not change `has_value()`.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.inner.value.as_mut_ptr()
    }

    /// Drops the contained value, if any. Idempotent.
    #[inline]
    pub fn reset(&mut self) {
        self.release("reset");
    }

    /// Replaces the contents with `value`, dropping any previous value first.
    ///
    /// Returns a mutable reference to the new value.
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.release("emplace");
        self.init(value)
    }

    /// Replaces the contents with `T::from(args)`.
    ///
    /// The previous value is dropped *before* the conversion runs. If the
    /// conversion panics, the container is left empty and the previous value
    /// is gone.
    #[inline]
    pub fn emplace_from<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.emplace_with(|| T::from(args))
    }

    /// Replaces the contents with the value built by `f`.
    ///
    /// The previous value is dropped *before* `f` runs. If `f` panics, the
    /// container is left empty and the previous value is gone.
    #[inline]
    pub fn emplace_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.release("emplace");
        let value = f();
        self.init(value)
    }

    /// Replaces the contents with the value built by a fallible `f`.
    ///
    /// The previous value is dropped *before* `f` runs.
    ///
    /// # Errors
    /// Propagates `f`'s error unchanged. The container is then empty and the
    /// previous value is gone.
    #[inline]
    pub fn try_emplace_with<E, F>(&mut self, f: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.release("emplace");
        let value = f()?;
        Ok(self.init(value))
    }

    /// Assigns `value`, reusing the live value when present.
    ///
    /// When present, this is `T`'s own assignment (`*live = value`), which
    /// drops the old value. When empty, `value` is moved into the slot.
    #[inline]
    pub fn assign(&mut self, value: T) {
        match self.get_mut() {
            Some(live) => *live = value,
            None => {
                self.init(value);
            }
        }
    }

    /// Assigns a clone of `value`, reusing the live value when present.
    ///
    /// When present this calls [`Clone::clone_from`] on the live value, so
    /// types like `String` and `Vec` keep their buffers.
    #[inline]
    pub fn assign_ref(&mut self, value: &T)
    where
        T: Clone,
    {
        match self.get_mut() {
            Some(live) => live.clone_from(value),
            None => {
                self.init(value.clone());
            }
        }
    }

    /// Move-assigns from another container.
    ///
    /// If `source` holds a value it is move-assigned into the live value (or
    /// moved into the slot when empty). If `source` is empty, the contained
    /// value is dropped. Afterwards `self.has_value()` equals what
    /// `source.has_value()` was.
    #[inline]
    pub fn assign_from(&mut self, source: Optional<T>) {
        match source.into_option() {
            Some(value) => self.assign(value),
            None => self.release("assign_from"),
        }
    }

    /// Moves the value out into a new container, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Optional<T> {
        match self.take_value() {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }

    /// Writes `value`, returning the previous contents.
    #[inline]
    pub fn replace(&mut self, value: T) -> Optional<T> {
        let previous = self.take();
        self.init(value);
        previous
    }

    /// Converts into a standard `Option`, moving the value out.
    #[inline]
    pub fn into_option(mut self) -> Option<T> {
        self.take_value()
    }

    /// Drops the contained value, if any, clearing the flag first.
    #[inline]
    fn release(&mut self, op: &'static str) {
        if self.inner.is_init {
            trace_release::<T>(op);
            self.drop_value();
        }
    }

    /// Untraced release shared with `Drop`.
    #[inline(always)]
    fn drop_value(&mut self) {
        if self.inner.is_init {
            self.inner.is_init = false;
            // SAFETY: the flag was set, so the slot was live; it is now marked
            // empty, so this is the only drop.
            unsafe { slot::drop_in_place(&mut self.inner.value) };
        }
    }

    /// Writes into an empty slot and sets the flag.
    #[inline(always)]
    fn init(&mut self, value: T) -> &mut T {
        debug_assert!(!self.inner.is_init, "init over a live value");
        let Inner { value: storage, is_init } = &mut self.inner;
        let live = slot::write(storage, value);
        *is_init = true;
        live
    }

    #[inline]
    fn take_value(&mut self) -> Option<T> {
        if !self.inner.is_init {
            return None;
        }
        self.inner.is_init = false;
        // SAFETY: the flag was set; it is now cleared, so the slot is never
        // read or dropped again.
        Some(unsafe { slot::read(&self.inner.value) })
    }
}

impl<T> Drop for Optional<T> {
    fn drop(&mut self) {
        // Scope-end destruction is not traced; only explicit transitions are.
        self.drop_value();
    }
}

#[inline(always)]
fn trace_release<T>(op: &'static str) {
    #[cfg(feature = "tracing")]
    tracing::trace!(op, type_name = core::any::type_name::<T>(), "dropping contained value");
    #[cfg(not(feature = "tracing"))]
    let _ = op;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_default_is_empty() {
        let o: Optional<i32> = Optional::new();
        assert!(!o.has_value());
        assert_eq!(o.value(), Err(BadOptionalAccess));
        assert_eq!(o.get(), None);
    }

    #[test]
    fn test_some_and_unchecked_access() {
        let mut o = Optional::some(5);
        assert!(o.has_value());
        // SAFETY: constructed with a value.
        unsafe {
            assert_eq!(*o.get_unchecked(), 5);
            *o.get_unchecked_mut() += 1;
            assert_eq!(*o.as_ptr(), 6);
        }
        assert_eq!(o.value(), Ok(&6));
    }

    #[test]
    fn test_reset_then_emplace() {
        let mut o = Optional::some(5);
        o.reset();
        assert!(!o.has_value());
        o.reset();
        assert!(!o.has_value());

        assert_eq!(*o.emplace(42), 42);
        assert!(o.has_value());
        assert_eq!(o.value(), Ok(&42));
    }

    #[test]
    fn test_emplace_drops_previous_value() {
        let first = Rc::new(1);
        let second = Rc::new(2);
        let mut o = Optional::some(Rc::clone(&first));
        assert_eq!(Rc::strong_count(&first), 2);

        o.emplace(Rc::clone(&second));
        assert_eq!(Rc::strong_count(&first), 1);
        assert_eq!(Rc::strong_count(&second), 2);

        drop(o);
        assert_eq!(Rc::strong_count(&second), 1);
    }

    #[test]
    fn test_try_emplace_error_leaves_empty() {
        let mut o = Optional::some(String::from("old"));
        let res: Result<&mut String, &str> = o.try_emplace_with(|| Err("nope"));
        assert_eq!(res, Err("nope"));
        assert!(!o.has_value());

        let res: Result<&mut String, &str> = o.try_emplace_with(|| Ok(String::from("new")));
        assert_eq!(res.map(|s| s.clone()), Ok(String::from("new")));
        assert_eq!(o.value().map(String::as_str), Ok("new"));
    }

    #[test]
    fn test_assign_into_empty_and_present() {
        let mut o = Optional::new();
        o.assign(1);
        assert_eq!(o.value(), Ok(&1));
        o.assign(2);
        assert_eq!(o.value(), Ok(&2));
    }

    #[test]
    fn test_assign_ref_reuses_buffer() {
        let mut o = Optional::some(String::with_capacity(64));
        let before = o.value().map(|s| s.as_ptr()).ok();
        o.assign_ref(&String::from("short"));
        assert_eq!(o.value().map(String::as_str), Ok("short"));
        assert_eq!(o.value().map(|s| s.as_ptr()).ok(), before);
    }

    #[test]
    fn test_assign_from_empty_source_resets() {
        let mut o = Optional::some(3);
        o.assign_from(Optional::new());
        assert!(!o.has_value());

        o.assign_from(Optional::some(4));
        assert_eq!(o.value(), Ok(&4));
    }

    #[test]
    fn test_take_and_replace() {
        let mut o = Optional::some(1);
        let taken = o.take();
        assert!(!o.has_value());
        assert_eq!(taken.value(), Ok(&1));

        let previous = o.replace(2);
        assert!(!previous.has_value());
        let previous = o.replace(3);
        assert_eq!(previous.into_option(), Some(2));
        assert_eq!(o.into_option(), Some(3));
    }

    #[test]
    fn test_zero_sized_payload() {
        let mut o = Optional::some(());
        assert!(o.has_value());
        o.reset();
        assert_eq!(o.value(), Err(BadOptionalAccess));
    }
}
