use core::mem::MaybeUninit;

/// Layout note: store `value` first; keep `is_init` in tail padding.
pub(super) struct Inner<T> {
    pub(super) value: MaybeUninit<T>,
    pub(super) is_init: bool,
}

impl<T> Inner<T> {
    pub(super) const fn empty() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            is_init: false,
        }
    }

    pub(super) const fn new(value: T) -> Self {
        Self {
            value: MaybeUninit::new(value),
            is_init: true,
        }
    }
}
