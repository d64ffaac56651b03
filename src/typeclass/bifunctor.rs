//! Bifunctor type class - mapping over two type parameters.
//!
//! Alignment produces `These<A, B>` values, and its naturality law is stated
//! in terms of mapping both sides of those values at once:
//!
//! ```text
//! align(fmap(fa, f), fmap(fb, g)) == fmap(align(fa, fb), |t| t.bimap(f, g))
//! ```
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use semialign::data::These;
//! use semialign::typeclass::Bifunctor;
//!
//! let both: These<i32, String> = These::Both(42, "hello".to_string());
//! let mapped = Bifunctor::bimap(both, |x| x * 2, |s: String| s.len());
//! assert_eq!(mapped, These::Both(84, 5));
//! ```

use crate::data::These;

/// A type class for types with two type parameters that can have functions
/// mapped over both.
///
/// See module-level documentation for laws.
pub trait Bifunctor<A, B> {
    /// The resulting type constructor after applying the transformation.
    ///
    /// For `These<A, B>`, `Target<C, D> = These<C, D>`.
    /// For `(A, B)`, `Target<C, D> = (C, D)`.
    type Target<C, D>;

    /// Applies two functions to both type parameters simultaneously.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::typeclass::Bifunctor;
    ///
    /// let tuple = (42, "hello".to_string());
    /// let result = tuple.bimap(|x| x * 2, |s| s.len());
    /// assert_eq!(result, (84, 5));
    /// ```
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Applies two functions to references of both type parameters without
    /// consuming self.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

impl<A, B> Bifunctor<A, B> for These<A, B> {
    type Target<C, D> = These<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> These<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        self.map_left(first_function).map_right(second_function)
    }

    #[inline]
    fn first<C, F>(self, function: F) -> These<C, B>
    where
        F: FnOnce(A) -> C,
    {
        self.map_left(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> These<A, D>
    where
        G: FnOnce(B) -> D,
    {
        self.map_right(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> These<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D,
    {
        self.as_ref().bimap(first_function, second_function)
    }
}

impl<A, B> Bifunctor<A, B> for (A, B) {
    type Target<C, D> = (C, D);

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        (first_function(self.0), second_function(self.1))
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D,
    {
        (first_function(&self.0), second_function(&self.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(These::Left(2), These::Left(4))]
    #[case(These::Right("ab"), These::Right(2))]
    #[case(These::Both(2, "abc"), These::Both(4, 3))]
    fn these_bimap_maps_each_present_side(
        #[case] input: These<i32, &str>,
        #[case] expected: These<i32, usize>,
    ) {
        assert_eq!(Bifunctor::bimap(input, |n| n * 2, |s: &str| s.len()), expected);
    }

    #[rstest]
    fn these_first_leaves_right_untouched() {
        let value: These<i32, char> = These::Both(1, 'x');
        assert_eq!(value.first(|n| n + 1), These::Both(2, 'x'));
    }

    #[rstest]
    fn these_second_on_left_is_noop() {
        let value: These<i32, char> = These::Left(1);
        assert_eq!(value.second(|c: char| c.to_ascii_uppercase()), These::Left(1));
    }

    #[rstest]
    fn these_bimap_ref_keeps_original() {
        let value: These<String, i32> = These::Both("abc".to_string(), 2);
        let result = value.bimap_ref(|s| s.len(), |n| n * 3);
        assert_eq!(result, These::Both(3, 6));
        assert!(value.is_both());
    }

    #[rstest]
    fn tuple_first_second() {
        let tuple = (1, "a");
        assert_eq!(tuple.first(|n| n + 1), (2, "a"));
        assert_eq!(tuple.second(|s: &str| s.len()), (1, 1));
    }
}
