#![cfg(feature = "typeclass")]
//! Property-based tests for Functor laws.
//!
//! This module verifies that all Functor implementations satisfy the required laws:
//!
//! - **Identity Law**: `fmap(fa, |x| x) == fa`
//! - **Composition Law**: `fmap(fmap(fa, f), g) == fmap(fa, |x| g(f(x)))`
//!
//! Using proptest, we generate random inputs to thoroughly verify these laws
//! across a wide range of values.

use std::collections::HashMap;

use proptest::prelude::*;
use semialign::data::NonEmpty;
use semialign::typeclass::{
    Functor, NonEmptyInstance, OptionInstance, StringMapInstance, VecInstance,
};

fn identity_law<I>(instance: &I, fa: I::Applied<i32>) -> (I::Applied<i32>, I::Applied<i32>)
where
    I: Functor,
    I::Applied<i32>: Clone,
{
    (instance.fmap::<i32, i32, _>(fa.clone(), |x| x), fa)
}

fn composition_law<I>(instance: &I, fa: I::Applied<i32>) -> (I::Applied<String>, I::Applied<String>)
where
    I: Functor,
    I::Applied<i32>: Clone,
{
    let function1 = |n: i32| n.wrapping_add(1);
    let function2 = |n: i32| n.to_string();

    let left = instance.fmap::<i32, String, _>(
        instance.fmap::<i32, i32, _>(fa.clone(), function1),
        function2,
    );
    let right = instance.fmap::<i32, String, _>(fa, |x| function2(function1(x)));
    (left, right)
}

fn non_empty_strategy() -> impl Strategy<Value = NonEmpty<i32>> {
    (any::<i32>(), prop::collection::vec(any::<i32>(), 0..16))
        .prop_map(|(head, tail)| NonEmpty::new(head, tail))
}

fn string_map_strategy() -> impl Strategy<Value = HashMap<String, i32>> {
    prop::collection::hash_map("[a-z]{1,3}", any::<i32>(), 0..8)
}

proptest! {
    /// Identity Law for Option<i32>: fmap with identity function returns the original value
    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        let (mapped, original) = identity_law(&OptionInstance, value);
        prop_assert_eq!(mapped, original);
    }

    /// Composition Law for Option<i32>: mapping composed functions equals composing maps
    #[test]
    fn prop_option_composition_law(value in any::<Option<i32>>()) {
        let (left, right) = composition_law(&OptionInstance, value);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_vec_identity_law(value in prop::collection::vec(any::<i32>(), 0..32)) {
        let (mapped, original) = identity_law(&VecInstance, value);
        prop_assert_eq!(mapped, original);
    }

    #[test]
    fn prop_vec_composition_law(value in prop::collection::vec(any::<i32>(), 0..32)) {
        let (left, right) = composition_law(&VecInstance, value);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_non_empty_identity_law(value in non_empty_strategy()) {
        let (mapped, original) = identity_law(&NonEmptyInstance, value);
        prop_assert_eq!(mapped, original);
    }

    #[test]
    fn prop_non_empty_composition_law(value in non_empty_strategy()) {
        let (left, right) = composition_law(&NonEmptyInstance, value);
        prop_assert_eq!(left, right);
    }

    /// Mapping a HashMap keeps every key and transforms only the values
    #[test]
    fn prop_hash_map_identity_law(value in string_map_strategy()) {
        let (mapped, original) = identity_law(&StringMapInstance::new(), value);
        prop_assert_eq!(mapped, original);
    }

    #[test]
    fn prop_hash_map_composition_law(value in string_map_strategy()) {
        let (left, right) = composition_law(&StringMapInstance::new(), value);
        prop_assert_eq!(left, right);
    }

    /// fmap preserves the shape: length for sequences, keys for maps
    #[test]
    fn prop_fmap_preserves_shape(
        sequence in prop::collection::vec(any::<i32>(), 0..32),
        mapping in string_map_strategy(),
    ) {
        let expected_length = sequence.len();
        prop_assert_eq!(VecInstance.fmap(sequence, |x| x % 7).len(), expected_length);

        let mut expected_keys: Vec<String> = mapping.keys().cloned().collect();
        let mut mapped_keys: Vec<String> = StringMapInstance::new()
            .fmap(mapping, |x| x > 0)
            .into_keys()
            .collect();
        expected_keys.sort();
        mapped_keys.sort();
        prop_assert_eq!(mapped_keys, expected_keys);
    }
}
