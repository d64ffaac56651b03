//! Align type class - Semialign with an empty container.
//!
//! `Align` adds [`nil`](Align::nil), the container with no elements, which is
//! the identity of alignment on both sides.
//!
//! # Laws
//!
//! In addition to the [`Semialign`] laws:
//!
//! ## Right Identity
//!
//! ```text
//! align(fa, nil()) == fmap(fa, Left)
//! ```
//!
//! ## Left Identity
//!
//! ```text
//! align(nil(), fa) == fmap(fa, Right)
//! ```
//!
//! `NonEmpty` has no empty value and so is only a [`Semialign`].
//!
//! # Examples
//!
//! ```rust
//! use semialign::data::These;
//! use semialign::typeclass::{Align, Semialign, VecInstance};
//!
//! let empty: Vec<char> = VecInstance.nil();
//! assert_eq!(
//!     VecInstance.align(vec![1, 2], empty),
//!     vec![These::Left(1), These::Left(2)]
//! );
//! ```

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::instances::{HashMapInstance, OptionInstance, VecInstance};
use super::semialign::Semialign;
use super::semigroup::Semigroup;

/// A [`Semialign`] family with an empty container.
pub trait Align: Semialign {
    /// Returns the empty container of this family.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::typeclass::{Align, OptionInstance};
    ///
    /// let nothing: Option<i32> = OptionInstance.nil();
    /// assert_eq!(nothing, None);
    /// ```
    fn nil<A>(&self) -> Self::Applied<A>;
}

impl Align for OptionInstance {
    #[inline]
    fn nil<A>(&self) -> Option<A> {
        None
    }
}

impl Align for VecInstance {
    #[inline]
    fn nil<A>(&self) -> Vec<A> {
        Vec::new()
    }
}

impl<K, S> Align for HashMapInstance<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn nil<A>(&self) -> HashMap<K, A, S> {
        HashMap::with_hasher(S::default())
    }
}

// =============================================================================
// Semigroup-based Alignment
// =============================================================================

/// Aligns two containers and merges the positions present on both sides with
/// [`Semigroup::combine`].
///
/// One-sided positions keep their value unchanged. The element type needs an
/// associative `combine` but no identity element; the container's own
/// identity is [`Align::nil`].
///
/// # Examples
///
/// ```rust
/// use semialign::typeclass::{Sum, VecInstance, salign};
///
/// let result = salign(
///     &VecInstance,
///     vec![Sum::new(1), Sum::new(2), Sum::new(3)],
///     vec![Sum::new(4), Sum::new(5)],
/// );
/// assert_eq!(result, vec![Sum::new(5), Sum::new(7), Sum::new(3)]);
/// ```
pub fn salign<I, A>(instance: &I, left: I::Applied<A>, right: I::Applied<A>) -> I::Applied<A>
where
    I: Semialign,
    A: Semigroup,
{
    salign_with::<I, A, _>(instance, left, right, A::combine)
}

/// Aligns two containers and merges the positions present on both sides with
/// `combine`.
///
/// `combine` should be associative for the result to be independent of how a
/// chain of `salign_with` calls is grouped.
///
/// # Examples
///
/// ```rust
/// use semialign::typeclass::{OptionInstance, VecInstance, salign_with};
///
/// let sums = salign_with(&VecInstance, vec![1, 2, 3], vec![4, 5], |a, b| a + b);
/// assert_eq!(sums, vec![5, 7, 3]);
///
/// let longest = salign_with(&OptionInstance, Some("ab"), Some("abc"), |a, b| {
///     if b.len() > a.len() { b } else { a }
/// });
/// assert_eq!(longest, Some("abc"));
/// ```
pub fn salign_with<I, A, F>(
    instance: &I,
    left: I::Applied<A>,
    right: I::Applied<A>,
    mut combine: F,
) -> I::Applied<A>
where
    I: Semialign,
    F: FnMut(A, A) -> A,
{
    instance.align_with::<A, A, A, _>(left, right, |these| these.merge_with(&mut combine))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{NonEmpty, These};
    use crate::typeclass::{Max, NonEmptyInstance, StringMapInstance, Sum};
    use rstest::rstest;

    #[rstest]
    fn nil_values_are_empty() {
        let option: Option<i32> = OptionInstance.nil();
        let vec: Vec<i32> = VecInstance.nil();
        let map: HashMap<String, i32> = StringMapInstance::new().nil();

        assert_eq!(option, None);
        assert!(vec.is_empty());
        assert!(map.is_empty());
    }

    #[rstest]
    fn align_with_nil_on_left_tags_everything_right() {
        let nil: Vec<i32> = VecInstance.nil();
        assert_eq!(
            VecInstance.align(nil, vec!['a', 'b']),
            vec![These::Right('a'), These::Right('b')]
        );
    }

    #[rstest]
    fn salign_sums_overlapping_positions() {
        let result = salign(
            &VecInstance,
            vec![Sum::new(1), Sum::new(2), Sum::new(3)],
            vec![Sum::new(4), Sum::new(5)],
        );
        assert_eq!(result, vec![Sum::new(5), Sum::new(7), Sum::new(3)]);
    }

    #[rstest]
    #[case(Some(String::from("ab")), Some(String::from("cd")), Some(String::from("abcd")))]
    #[case(Some(String::from("ab")), None, Some(String::from("ab")))]
    #[case(None, Some(String::from("cd")), Some(String::from("cd")))]
    #[case(None, None, None)]
    fn salign_option_concatenates_strings(
        #[case] left: Option<String>,
        #[case] right: Option<String>,
        #[case] expected: Option<String>,
    ) {
        assert_eq!(salign(&OptionInstance, left, right), expected);
    }

    #[rstest]
    fn salign_hash_map_keeps_largest_per_key() {
        let left: HashMap<String, Max<i32>> =
            [("a".to_string(), Max::new(1)), ("b".to_string(), Max::new(9))]
                .into_iter()
                .collect();
        let right: HashMap<String, Max<i32>> =
            [("a".to_string(), Max::new(5)), ("c".to_string(), Max::new(2))]
                .into_iter()
                .collect();

        let expected: HashMap<String, Max<i32>> = [
            ("a".to_string(), Max::new(5)),
            ("b".to_string(), Max::new(9)),
            ("c".to_string(), Max::new(2)),
        ]
        .into_iter()
        .collect();
        assert_eq!(salign(&StringMapInstance::new(), left, right), expected);
    }

    #[rstest]
    fn salign_non_empty_combines_heads() {
        let result = salign(
            &NonEmptyInstance,
            NonEmpty::new(vec![1], vec![vec![2]]),
            NonEmpty::singleton(vec![10]),
        );
        assert_eq!(result, NonEmpty::new(vec![1, 10], vec![vec![2]]));
    }

    #[rstest]
    fn salign_with_nil_is_identity() {
        let values = vec![Sum::new(1), Sum::new(2)];
        assert_eq!(
            salign(&VecInstance, values.clone(), VecInstance.nil()),
            values
        );
        assert_eq!(
            salign(&VecInstance, VecInstance.nil(), values.clone()),
            values
        );
    }
}
