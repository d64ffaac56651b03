//! Numeric wrapper types for different semigroup operations.
//!
//! These newtypes let the same underlying type be combined in different ways
//! when two aligned values meet (for example by [`salign`](super::salign)):
//!
//! - [`Sum`]: combine by addition
//! - [`Product`]: combine by multiplication
//! - [`Max`]: keep the larger value
//! - [`Min`]: keep the smaller value
//!
//! # Examples
//!
//! ```rust
//! use semialign::typeclass::{Max, Semigroup, Sum};
//!
//! assert_eq!(Sum::new(3).combine(Sum::new(5)), Sum::new(8));
//! assert_eq!(Max::new(3).combine(Max::new(5)), Max::new(5));
//! ```

macro_rules! define_wrapper {
    ($(#[$attribute:meta])* $name:ident) => {
        $(#[$attribute])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name<A>(pub A);

        impl<A> $name<A> {
            #[doc = concat!("Wraps `value` in a `", stringify!($name), "`.")]
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            /// Unwraps the inner value.
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Borrows the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $name<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }
    };
}

define_wrapper!(
    /// Combines by addition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::typeclass::{Sum, VecInstance, salign};
    ///
    /// let totals = salign(&VecInstance, vec![Sum::new(1)], vec![Sum::new(2), Sum::new(3)]);
    /// assert_eq!(totals, vec![Sum::new(3), Sum::new(3)]);
    /// ```
    Sum
);

define_wrapper!(
    /// Combines by multiplication.
    Product
);

define_wrapper!(
    /// Keeps the larger of two values. When they are equal, the left one is kept.
    Max
);

define_wrapper!(
    /// Keeps the smaller of two values. When they are equal, the left one is kept.
    Min
);
