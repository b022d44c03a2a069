//! `proptest` strategies for `Optional` (enabled by the `proptest` feature).

use proptest::arbitrary::{any_with, Arbitrary};
use proptest::strategy::{BoxedStrategy, Strategy};

use super::Optional;

/// Generates empty and present containers, drawing values from `values`.
pub fn optional_of<S>(values: S) -> impl Strategy<Value = Optional<S::Value>>
where
    S: Strategy,
{
    proptest::option::of(values).prop_map(Optional::from)
}

impl<T> Arbitrary for Optional<T>
where
    T: Arbitrary + 'static,
    T::Strategy: 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        optional_of(any_with::<T>(args)).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_arbitrary_round_trips_through_option(o in any::<Optional<u8>>()) {
            let copy = o.clone();
            prop_assert_eq!(Optional::<u8>::from(o.into_option()), copy);
        }

        #[test]
        fn test_optional_of_respects_value_strategy(o in optional_of(10u32..20)) {
            if let Some(v) = o.get() {
                prop_assert!((10..20).contains(v));
            }
        }
    }
}
