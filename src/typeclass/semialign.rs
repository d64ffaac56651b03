//! Semialign type class - zipping without discarding elements.
//!
//! A plain zip stops at the shorter input. `Semialign` combines two containers
//! of the same family position by position (or key by key) and records at
//! every position which inputs were present, using [`These`]:
//!
//! | Family | Rule |
//! |---|---|
//! | `Option` | `Both` if both present, `Left`/`Right` if one is, absent if neither |
//! | `Vec` | `Both` up to the shorter length, then `Left`/`Right` for the rest |
//! | `NonEmpty` | `Both` for the heads, then the `Vec` rule for the tails |
//! | `HashMap` | `Both` for shared keys, `Left`/`Right` for keys on one side only |
//!
//! # Laws
//!
//! All `Semialign` implementations must satisfy these laws:
//!
//! ## Idempotency
//!
//! ```text
//! align(fa, fa) == fmap(fa, |a| Both(a, a))
//! ```
//!
//! ## Naturality
//!
//! ```text
//! align(fmap(fa, f), fmap(fb, g)) == fmap(align(fa, fb), |t| t.bimap(f, g))
//! ```
//!
//! ## alignWith
//!
//! ```text
//! align_with(fa, fb, f) == fmap(align(fa, fb), f)
//! ```
//!
//! ## Associativity
//!
//! ```text
//! fmap(align(align(fa, fb), fc), These::assoc) == align(fa, align(fb, fc))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use semialign::data::These;
//! use semialign::typeclass::{OptionInstance, Semialign, VecInstance};
//!
//! assert_eq!(
//!     VecInstance.align(vec![1, 2], vec!["a"]),
//!     vec![These::Both(1, "a"), These::Left(2)]
//! );
//! assert_eq!(OptionInstance.align(Some(1), None::<&str>), Some(These::Left(1)));
//! assert_eq!(OptionInstance.align(None::<i32>, None::<&str>), None);
//! ```

use std::collections::HashMap;
use std::convert::identity;
use std::hash::{BuildHasher, Hash};

use super::functor::Functor;
use super::instances::{HashMapInstance, NonEmptyInstance, OptionInstance, VecInstance};
use crate::data::{NonEmpty, These};

/// A type class for container families whose values can be combined without
/// discarding elements.
///
/// Both operations are total: every pair of inputs, including empty ones and
/// inputs of different lengths or key sets, has a defined result.
///
/// # Examples
///
/// ```rust
/// use semialign::data::These;
/// use semialign::typeclass::{Semialign, VecInstance};
///
/// let sums = VecInstance.align_with(vec![1, 2, 3], vec![10], |these| {
///     these.fold(|l| l, |r| r, |l, r| l + r)
/// });
/// assert_eq!(sums, vec![11, 2, 3]);
/// ```
pub trait Semialign: Functor {
    /// Combines two containers, transforming each aligned position with
    /// `function` as it is produced.
    ///
    /// `function` is called exactly once per position of the result.
    ///
    /// # Arguments
    ///
    /// * `left` - The left container
    /// * `right` - The right container
    /// * `function` - Resolves each aligned position
    fn align_with<A, B, C, F>(
        &self,
        left: Self::Applied<A>,
        right: Self::Applied<B>,
        function: F,
    ) -> Self::Applied<C>
    where
        F: FnMut(These<A, B>) -> C;

    /// Combines two containers into a container of [`These`] values.
    ///
    /// Equivalent to `align_with(left, right, identity)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::data::These;
    /// use semialign::typeclass::{Semialign, VecInstance};
    ///
    /// assert_eq!(
    ///     VecInstance.align(vec![1], vec!["a", "b"]),
    ///     vec![These::Both(1, "a"), These::Right("b")]
    /// );
    /// ```
    #[inline]
    fn align<A, B>(
        &self,
        left: Self::Applied<A>,
        right: Self::Applied<B>,
    ) -> Self::Applied<These<A, B>> {
        self.align_with::<A, B, These<A, B>, _>(left, right, identity)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl Semialign for OptionInstance {
    #[inline]
    fn align_with<A, B, C, F>(&self, left: Option<A>, right: Option<B>, function: F) -> Option<C>
    where
        F: FnMut(These<A, B>) -> C,
    {
        These::from_options(left, right).map(function)
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl Semialign for VecInstance {
    fn align_with<A, B, C, F>(&self, left: Vec<A>, right: Vec<B>, mut function: F) -> Vec<C>
    where
        F: FnMut(These<A, B>) -> C,
    {
        let mut result = Vec::with_capacity(left.len().max(right.len()));
        let mut left = left.into_iter();
        let mut right = right.into_iter();

        loop {
            let these = match (left.next(), right.next()) {
                (Some(a), Some(b)) => These::Both(a, b),
                (Some(a), None) => These::Left(a),
                (None, Some(b)) => These::Right(b),
                (None, None) => break,
            };
            result.push(function(these));
        }

        result
    }
}

// =============================================================================
// NonEmpty<A> Implementation
// =============================================================================

impl Semialign for NonEmptyInstance {
    fn align_with<A, B, C, F>(
        &self,
        left: NonEmpty<A>,
        right: NonEmpty<B>,
        mut function: F,
    ) -> NonEmpty<C>
    where
        F: FnMut(These<A, B>) -> C,
    {
        let (left_head, left_tail) = left.into_parts();
        let (right_head, right_tail) = right.into_parts();

        let head = function(These::Both(left_head, right_head));
        let tail = VecInstance.align_with(left_tail, right_tail, &mut function);
        NonEmpty::new(head, tail)
    }
}

// =============================================================================
// HashMap<K, A, S> Implementation
// =============================================================================

/// Keys of `left` are resolved first; the keys found only in `right` follow.
/// The iteration order of the resulting map is that of `HashMap` and carries
/// no meaning.
impl<K, S> Semialign for HashMapInstance<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn align_with<A, B, C, F>(
        &self,
        left: HashMap<K, A, S>,
        mut right: HashMap<K, B, S>,
        mut function: F,
    ) -> HashMap<K, C, S>
    where
        F: FnMut(These<A, B>) -> C,
    {
        let mut result =
            HashMap::with_capacity_and_hasher(left.len().max(right.len()), S::default());

        for (key, a) in left {
            let these = match right.remove(&key) {
                Some(b) => These::Both(a, b),
                None => These::Left(a),
            };
            result.insert(key, function(these));
        }

        for (key, b) in right {
            result.insert(key, function(These::Right(b)));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::StringMapInstance;
    use rstest::rstest;

    fn string_map<V>(entries: Vec<(&str, V)>) -> HashMap<String, V> {
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    // =========================================================================
    // Option
    // =========================================================================

    #[rstest]
    #[case(Some(1), Some("a"), Some(These::Both(1, "a")))]
    #[case(Some(1), None, Some(These::Left(1)))]
    #[case(None, Some("a"), Some(These::Right("a")))]
    #[case(None, None, None)]
    fn option_align_covers_every_shape(
        #[case] left: Option<i32>,
        #[case] right: Option<&'static str>,
        #[case] expected: Option<These<i32, &'static str>>,
    ) {
        assert_eq!(OptionInstance.align(left, right), expected);
    }

    #[rstest]
    fn option_align_with_neither_never_calls_function() {
        let mut calls = 0;
        let result: Option<()> = OptionInstance.align_with(None::<i32>, None::<i32>, |_| calls += 1);
        assert_eq!(result, None);
        assert_eq!(calls, 0);
    }

    // =========================================================================
    // Vec
    // =========================================================================

    #[rstest]
    fn vec_align_longer_left() {
        assert_eq!(
            VecInstance.align(vec![1, 2], vec!["a"]),
            vec![These::Both(1, "a"), These::Left(2)]
        );
    }

    #[rstest]
    fn vec_align_longer_right() {
        assert_eq!(
            VecInstance.align(vec![1], vec!["a", "b"]),
            vec![These::Both(1, "a"), These::Right("b")]
        );
    }

    #[rstest]
    fn vec_align_both_empty() {
        let result = VecInstance.align(Vec::<i32>::new(), Vec::<char>::new());
        assert!(result.is_empty());
    }

    #[rstest]
    fn vec_align_with_empty_right_tags_everything_left() {
        assert_eq!(
            VecInstance.align(vec![1, 2, 3], Vec::<char>::new()),
            vec![These::Left(1), These::Left(2), These::Left(3)]
        );
    }

    #[rstest]
    #[case(0, 0)]
    #[case(3, 1)]
    #[case(1, 4)]
    #[case(5, 5)]
    fn vec_align_length_is_max(#[case] left_length: usize, #[case] right_length: usize) {
        let left: Vec<usize> = (0..left_length).collect();
        let right: Vec<usize> = (0..right_length).collect();
        assert_eq!(
            VecInstance.align(left, right).len(),
            left_length.max(right_length)
        );
    }

    #[rstest]
    fn vec_align_with_visits_positions_in_order() {
        let mut visited = Vec::new();
        let _ = VecInstance.align_with(vec![1, 2, 3], vec![10], |these| visited.push(these));
        assert_eq!(
            visited,
            vec![These::Both(1, 10), These::Left(2), These::Left(3)]
        );
    }

    // =========================================================================
    // NonEmpty
    // =========================================================================

    #[rstest]
    fn non_empty_align_pairs_heads_then_tails() {
        let result = NonEmptyInstance.align(NonEmpty::new(1, vec![2, 3]), NonEmpty::singleton('a'));
        assert_eq!(
            result,
            NonEmpty::new(These::Both(1, 'a'), vec![These::Left(2), These::Left(3)])
        );
    }

    #[rstest]
    fn non_empty_align_longer_right_tail() {
        let result = NonEmptyInstance.align(NonEmpty::singleton(1), NonEmpty::new('a', vec!['b']));
        assert_eq!(
            result,
            NonEmpty::new(These::Both(1, 'a'), vec![These::Right('b')])
        );
    }

    // =========================================================================
    // HashMap
    // =========================================================================

    #[rstest]
    fn hash_map_align_shared_and_left_keys() {
        let left = string_map(vec![("a", 1), ("b", 2)]);
        let right = string_map(vec![("a", "a")]);

        let expected = string_map(vec![("a", These::Both(1, "a")), ("b", These::Left(2))]);
        assert_eq!(StringMapInstance::new().align(left, right), expected);
    }

    #[rstest]
    fn hash_map_align_right_only_keys() {
        let left = string_map(vec![("a", 1)]);
        let right = string_map(vec![("b", 'x'), ("c", 'y')]);

        let expected = string_map(vec![
            ("a", These::Left(1)),
            ("b", These::Right('x')),
            ("c", These::Right('y')),
        ]);
        assert_eq!(StringMapInstance::new().align(left, right), expected);
    }

    #[rstest]
    fn hash_map_align_calls_function_once_per_key() {
        let left = string_map(vec![("a", 1), ("b", 2)]);
        let right = string_map(vec![("b", 20), ("c", 30)]);

        let mut calls = 0;
        let result = StringMapInstance::new().align_with(left, right, |these| {
            calls += 1;
            these.merge_with(|l, r| l + r)
        });

        assert_eq!(calls, 3);
        assert_eq!(result, string_map(vec![("a", 1), ("b", 22), ("c", 30)]));
    }
}
