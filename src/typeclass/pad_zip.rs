//! Padded zips built on [`Semialign`].
//!
//! A padded zip pairs positions like `zip` but represents a missing side as
//! `None` instead of truncating:
//!
//! - [`pad_zip`] / [`pad_zip_with`]: both sides optional, for any family
//! - [`lpad_zip`] / [`lpad_zip_with`]: the right `Vec` fixes the length,
//!   the left side is optional
//! - [`rpad_zip`] / [`rpad_zip_with`]: the left `Vec` fixes the length,
//!   the right side is optional
//!
//! # Examples
//!
//! ```rust
//! use semialign::typeclass::{VecInstance, lpad_zip, pad_zip};
//!
//! assert_eq!(
//!     pad_zip(&VecInstance, vec![1, 2, 3], vec![4, 5]),
//!     vec![(Some(1), Some(4)), (Some(2), Some(5)), (Some(3), None)]
//! );
//! assert_eq!(
//!     lpad_zip(vec![1, 2], vec!['a', 'b', 'c']),
//!     vec![(Some(1), 'a'), (Some(2), 'b'), (None, 'c')]
//! );
//! ```

use super::instances::VecInstance;
use super::semialign::Semialign;

/// Pairs every aligned position as `(Option<A>, Option<B>)`.
///
/// Each option is populated exactly when that side had an element at the
/// position; at least one of the two is always populated.
///
/// # Examples
///
/// ```rust
/// use semialign::typeclass::{OptionInstance, pad_zip};
///
/// assert_eq!(pad_zip(&OptionInstance, Some(1), None::<char>), Some((Some(1), None)));
/// ```
pub fn pad_zip<I, A, B>(
    instance: &I,
    left: I::Applied<A>,
    right: I::Applied<B>,
) -> I::Applied<(Option<A>, Option<B>)>
where
    I: Semialign,
{
    pad_zip_with::<I, A, B, (Option<A>, Option<B>), _>(instance, left, right, |a, b| (a, b))
}

/// Applies `function` to `(Option<A>, Option<B>)` at every aligned position.
///
/// # Examples
///
/// ```rust
/// use semialign::typeclass::{VecInstance, pad_zip_with};
///
/// let totals = pad_zip_with(&VecInstance, vec![1, 2, 3], vec![10], |a, b| {
///     a.unwrap_or(0) + b.unwrap_or(0)
/// });
/// assert_eq!(totals, vec![11, 2, 3]);
/// ```
pub fn pad_zip_with<I, A, B, C, F>(
    instance: &I,
    left: I::Applied<A>,
    right: I::Applied<B>,
    mut function: F,
) -> I::Applied<C>
where
    I: Semialign,
    F: FnMut(Option<A>, Option<B>) -> C,
{
    instance.align_with::<A, B, C, _>(left, right, |these| {
        let (a, b) = these.into_options();
        function(a, b)
    })
}

/// Zips two sequences so that the result has the length of `right`.
///
/// At index `i`, `function` receives `(Some(left[i]), right[i])` while `left`
/// lasts and `(None, right[i])` afterwards. Elements of `left` beyond the
/// length of `right` are dropped.
///
/// # Examples
///
/// ```rust
/// use semialign::typeclass::lpad_zip_with;
///
/// let labels = lpad_zip_with(vec![1], vec!["a", "b"], |n, s| match n {
///     Some(n) => format!("{s}{n}"),
///     None => s.to_string(),
/// });
/// assert_eq!(labels, vec!["a1", "b"]);
/// ```
pub fn lpad_zip_with<A, B, C, F>(left: Vec<A>, right: Vec<B>, mut function: F) -> Vec<C>
where
    F: FnMut(Option<A>, B) -> C,
{
    let padded = pad_zip_with::<VecInstance, A, B, Option<C>, _>(&VecInstance, left, right, |a, b| {
        b.map(|b| function(a, b))
    });
    padded.into_iter().flatten().collect()
}

/// Zips two sequences into `(Option<A>, B)` pairs, one per element of `right`.
///
/// # Examples
///
/// ```rust
/// use semialign::typeclass::lpad_zip;
///
/// assert_eq!(
///     lpad_zip(vec![1, 2, 3], vec!['a', 'b']),
///     vec![(Some(1), 'a'), (Some(2), 'b')]
/// );
/// ```
pub fn lpad_zip<A, B>(left: Vec<A>, right: Vec<B>) -> Vec<(Option<A>, B)> {
    lpad_zip_with(left, right, |a, b| (a, b))
}

/// Zips two sequences so that the result has the length of `left`.
///
/// Mirror of [`lpad_zip_with`]: at index `i`, `function` receives
/// `(left[i], Some(right[i]))` while `right` lasts and `(left[i], None)`
/// afterwards.
///
/// # Examples
///
/// ```rust
/// use semialign::typeclass::rpad_zip_with;
///
/// let scaled = rpad_zip_with(vec![1, 2, 3], vec![10, 20], |n, factor| n * factor.unwrap_or(1));
/// assert_eq!(scaled, vec![10, 40, 3]);
/// ```
pub fn rpad_zip_with<A, B, C, F>(left: Vec<A>, right: Vec<B>, mut function: F) -> Vec<C>
where
    F: FnMut(A, Option<B>) -> C,
{
    let padded = pad_zip_with::<VecInstance, A, B, Option<C>, _>(&VecInstance, left, right, |a, b| {
        a.map(|a| function(a, b))
    });
    padded.into_iter().flatten().collect()
}

/// Zips two sequences into `(A, Option<B>)` pairs, one per element of `left`.
///
/// # Examples
///
/// ```rust
/// use semialign::typeclass::rpad_zip;
///
/// assert_eq!(
///     rpad_zip(vec![1, 2, 3], vec!['a', 'b']),
///     vec![(1, Some('a')), (2, Some('b')), (3, None)]
/// );
/// ```
pub fn rpad_zip<A, B>(left: Vec<A>, right: Vec<B>) -> Vec<(A, Option<B>)> {
    rpad_zip_with(left, right, |a, b| (a, b))
}
