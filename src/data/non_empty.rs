//! Non-empty sequence type.
//!
//! `NonEmpty<A>` is an ordered sequence guaranteed to hold at least one
//! element: a head plus a (possibly empty) tail. Aligning two non-empty
//! sequences always pairs their heads.
//!
//! # Examples
//!
//! ```rust
//! use semialign::data::NonEmpty;
//!
//! let values = NonEmpty::new(1, vec![2, 3]);
//! assert_eq!(values.head(), &1);
//! assert_eq!(values.tail(), &[2, 3]);
//! assert_eq!(values.len(), 3);
//! ```

use std::iter::{Chain, Once, once};

use super::error::EmptyError;

/// An ordered sequence with at least one element.
///
/// # Examples
///
/// ```rust
/// use semialign::data::NonEmpty;
///
/// let values = NonEmpty::singleton("only");
/// assert_eq!(values.last(), &"only");
/// assert_eq!(values.into_vec(), vec!["only"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NonEmpty<A> {
    head: A,
    tail: Vec<A>,
}

impl<A> NonEmpty<A> {
    /// Creates a non-empty sequence from a head and a tail.
    #[inline]
    pub const fn new(head: A, tail: Vec<A>) -> Self {
        Self { head, tail }
    }

    /// Creates a non-empty sequence holding exactly one element.
    #[inline]
    pub const fn singleton(head: A) -> Self {
        Self::new(head, Vec::new())
    }

    /// Converts a `Vec` into a non-empty sequence.
    ///
    /// Returns `None` if the vector is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::data::NonEmpty;
    ///
    /// assert_eq!(NonEmpty::from_vec(vec![1, 2]), Some(NonEmpty::new(1, vec![2])));
    /// assert_eq!(NonEmpty::<i32>::from_vec(vec![]), None);
    /// ```
    pub fn from_vec(values: Vec<A>) -> Option<Self> {
        let mut values = values.into_iter();
        let head = values.next()?;
        Some(Self::new(head, values.collect()))
    }

    /// Returns the first element.
    #[inline]
    pub const fn head(&self) -> &A {
        &self.head
    }

    /// Returns every element after the head.
    #[inline]
    pub fn tail(&self) -> &[A] {
        &self.tail
    }

    /// Returns the last element.
    #[inline]
    pub fn last(&self) -> &A {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Returns the element at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&A> {
        match index {
            0 => Some(&self.head),
            _ => self.tail.get(index - 1),
        }
    }

    /// Returns the number of elements, which is at least one.
    #[inline]
    pub const fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Always returns `false`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Appends an element to the end.
    #[inline]
    pub fn push(&mut self, value: A) {
        self.tail.push(value);
    }

    /// Splits into the head and the tail.
    #[inline]
    pub fn into_parts(self) -> (A, Vec<A>) {
        (self.head, self.tail)
    }

    /// Returns an iterator over references to the elements, head first.
    #[inline]
    pub fn iter(&self) -> Chain<Once<&A>, std::slice::Iter<'_, A>> {
        once(&self.head).chain(self.tail.iter())
    }

    /// Applies `function` to every element in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::data::NonEmpty;
    ///
    /// let doubled = NonEmpty::new(1, vec![2, 3]).map(|n| n * 2);
    /// assert_eq!(doubled, NonEmpty::new(2, vec![4, 6]));
    /// ```
    pub fn map<B, F>(self, mut function: F) -> NonEmpty<B>
    where
        F: FnMut(A) -> B,
    {
        let head = function(self.head);
        NonEmpty::new(head, self.tail.into_iter().map(function).collect())
    }

    /// Converts into a `Vec`, head first.
    pub fn into_vec(self) -> Vec<A> {
        let mut result = Vec::with_capacity(self.len());
        result.push(self.head);
        result.extend(self.tail);
        result
    }
}

impl<A> TryFrom<Vec<A>> for NonEmpty<A> {
    type Error = EmptyError;

    fn try_from(values: Vec<A>) -> Result<Self, Self::Error> {
        Self::from_vec(values).ok_or(EmptyError)
    }
}

impl<A> From<NonEmpty<A>> for Vec<A> {
    fn from(values: NonEmpty<A>) -> Self {
        values.into_vec()
    }
}

impl<A> IntoIterator for NonEmpty<A> {
    type Item = A;
    type IntoIter = Chain<Once<A>, std::vec::IntoIter<A>>;

    fn into_iter(self) -> Self::IntoIter {
        once(self.head).chain(self.tail)
    }
}

impl<'a, A> IntoIterator for &'a NonEmpty<A> {
    type Item = &'a A;
    type IntoIter = Chain<Once<&'a A>, std::slice::Iter<'a, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn last_of_singleton_is_head() {
        let values = NonEmpty::singleton(7);
        assert_eq!(values.last(), &7);
        assert_eq!(values.len(), 1);
        assert!(!values.is_empty());
    }

    #[rstest]
    #[case(0, Some(&1))]
    #[case(2, Some(&3))]
    #[case(3, None)]
    fn get_indexes_from_head(#[case] index: usize, #[case] expected: Option<&i32>) {
        let values = NonEmpty::new(1, vec![2, 3]);
        assert_eq!(values.get(index), expected);
    }

    #[rstest]
    fn try_from_empty_vec_fails() {
        let result: Result<NonEmpty<i32>, EmptyError> = NonEmpty::try_from(Vec::new());
        assert_eq!(result, Err(EmptyError));
    }

    #[rstest]
    fn push_extends_tail() {
        let mut values = NonEmpty::singleton(1);
        values.push(2);
        assert_eq!(values.into_parts(), (1, vec![2]));
    }

    #[rstest]
    fn iteration_preserves_order() {
        let values = NonEmpty::new('a', vec!['b', 'c']);
        let borrowed: Vec<&char> = values.iter().collect();
        assert_eq!(borrowed, vec![&'a', &'b', &'c']);

        let owned: Vec<char> = values.into_iter().collect();
        assert_eq!(owned, vec!['a', 'b', 'c']);
    }

    #[rstest]
    fn map_calls_function_in_order() {
        let mut seen = Vec::new();
        let _ = NonEmpty::new(1, vec![2, 3]).map(|n| seen.push(n));
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
