//! Semigroup type class - merging the overlap of an alignment.
//!
//! [`salign`](super::salign) needs a way to merge the two values found at a
//! position present on both sides. A semigroup supplies it: an associative
//! `combine` with no identity element required of the element type. The
//! container supplies the identity instead, through
//! [`Align::nil`](super::Align::nil).
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use semialign::typeclass::{Max, Semigroup, Sum};
//!
//! assert_eq!(Sum::new(2).combine(Sum::new(3)), Sum::new(5));
//! assert_eq!(Max::new('a').combine(Max::new('z')), Max::new('z'));
//! assert_eq!(Some(String::from("ab")).combine(None), Some(String::from("ab")));
//! ```

use std::num::NonZeroUsize;
use std::ops::{Add, Mul};

use super::wrappers::{Max, Min, Product, Sum};
use crate::data::{NonEmpty, These};

/// A type with an associative binary operation.
///
/// See module-level documentation for the law.
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values into a new one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::typeclass::Semigroup;
    ///
    /// let left = vec![1, 2];
    /// let right = vec![3];
    /// assert_eq!(left.combine_ref(&right), vec![1, 2, 3]);
    /// assert_eq!(left, vec![1, 2]);
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines `count` copies of the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::NonZeroUsize;
    /// use semialign::typeclass::Semigroup;
    ///
    /// let three = NonZeroUsize::new(3).unwrap();
    /// assert_eq!(String::from("ab").combine_n(three), "ababab");
    /// ```
    #[must_use]
    fn combine_n(self, count: NonZeroUsize) -> Self
    where
        Self: Clone,
    {
        let mut result = self.clone();
        for _ in 1..count.get() {
            result = result.combine(self.clone());
        }
        result
    }

    /// Folds every element with `combine`, or returns `None` when there are
    /// no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::typeclass::{Min, Semigroup};
    ///
    /// assert_eq!(Min::reduce_all([Min::new(4), Min::new(1), Min::new(7)]), Some(Min::new(1)));
    /// assert_eq!(Min::<i32>::reduce_all([]), None);
    /// ```
    fn reduce_all<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        values.into_iter().reduce(Self::combine)
    }
}

// =============================================================================
// Standard Library Types
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend_from_slice(self);
        result.extend_from_slice(other);
        result
    }
}

/// `None` is skipped; two `Some` values combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

impl<A: Semigroup, B: Semigroup, C: Semigroup> Semigroup for (A, B, C) {
    fn combine(self, other: Self) -> Self {
        (
            self.0.combine(other.0),
            self.1.combine(other.1),
            self.2.combine(other.2),
        )
    }
}

// =============================================================================
// Crate Data Types
// =============================================================================

/// Each side is combined independently. A side present in only one operand
/// is kept as is, so `Left(a).combine(Right(b))` is `Both(a, b)`.
impl<A: Semigroup, B: Semigroup> Semigroup for These<A, B> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Left(left), Self::Left(other_left)) => Self::Left(left.combine(other_left)),
            (Self::Left(left), Self::Right(right)) | (Self::Right(right), Self::Left(left)) => {
                Self::Both(left, right)
            }
            (Self::Left(left), Self::Both(other_left, right)) => {
                Self::Both(left.combine(other_left), right)
            }
            (Self::Right(right), Self::Right(other_right)) => {
                Self::Right(right.combine(other_right))
            }
            (Self::Right(right), Self::Both(left, other_right)) => {
                Self::Both(left, right.combine(other_right))
            }
            (Self::Both(left, right), Self::Left(other_left)) => {
                Self::Both(left.combine(other_left), right)
            }
            (Self::Both(left, right), Self::Right(other_right)) => {
                Self::Both(left, right.combine(other_right))
            }
            (Self::Both(left, right), Self::Both(other_left, other_right)) => {
                Self::Both(left.combine(other_left), right.combine(other_right))
            }
        }
    }
}

/// Concatenation.
impl<T> Semigroup for NonEmpty<T> {
    fn combine(mut self, other: Self) -> Self {
        for value in other {
            self.push(value);
        }
        self
    }
}

// =============================================================================
// Numeric Wrappers
// =============================================================================

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

/// Ties keep the left value.
impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

/// Ties keep the left value.
impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }
}
