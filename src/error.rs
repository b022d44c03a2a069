//! Error type for checked access.

/// Returned by [`Optional::value`](crate::Optional::value) and
/// [`Optional::value_mut`](crate::Optional::value_mut) when the container is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BadOptionalAccess;

impl core::fmt::Display for BadOptionalAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("bad optional access")
    }
}

impl std::error::Error for BadOptionalAccess {}
