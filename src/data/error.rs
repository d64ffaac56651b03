//! Error types for the data module.

/// Returned when an empty `Vec` is converted into a [`NonEmpty`](super::NonEmpty).
///
/// # Examples
///
/// ```rust
/// use semialign::data::{EmptyError, NonEmpty};
///
/// let result = NonEmpty::try_from(Vec::<i32>::new());
/// assert_eq!(result, Err(EmptyError));
/// assert_eq!(format!("{}", EmptyError), "cannot build a NonEmpty from an empty Vec");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyError;

impl std::fmt::Display for EmptyError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "cannot build a NonEmpty from an empty Vec")
    }
}

impl std::error::Error for EmptyError {}
