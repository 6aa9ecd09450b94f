use super::common::{arb_json, arb_object};
use deep_builder::{DeepPartial, builder_for, deep_merge};
use proptest::prelude::*;
use serde_json::Value;
use std::borrow::Cow;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn no_override_is_the_base(base in arb_json(3)) {
        let builder = builder_for(base.clone());
        let built = builder.build(None).unwrap();
        prop_assert!(matches!(built, Cow::Borrowed(_)));
        prop_assert_eq!(built.into_owned(), base);
    }

    #[test]
    fn build_agrees_with_deep_merge(base in arb_object(3), overlay in arb_object(3)) {
        let builder = builder_for(base.clone());
        let partial: DeepPartial<Value> = DeepPartial::from_value(overlay.clone());
        let built = builder.build_owned(Some(&partial)).unwrap();
        prop_assert_eq!(built, deep_merge(&base, &overlay));
    }

    #[test]
    fn builds_do_not_leak_into_each_other(
        base in arb_object(3),
        first in arb_object(2),
        second in arb_object(2),
    ) {
        let builder = builder_for(base.clone());
        let second_partial: DeepPartial<Value> = DeepPartial::from_value(second);
        let expected = builder.build_owned(Some(&second_partial)).unwrap();

        let _ = builder.build_owned(Some(&DeepPartial::from_value(first))).unwrap();
        let again = builder.build_owned(Some(&second_partial)).unwrap();

        prop_assert_eq!(again, expected);
        prop_assert_eq!(builder.base(), &base);
    }
}
