//! Data types that alignment is built on.
//!
//! - [`These`]: the outcome at one aligned position (left, right or both)
//! - [`NonEmpty`]: an ordered sequence with at least one element
//! - [`EmptyError`]: the error returned when an empty `Vec` is converted
//!   into a `NonEmpty`
//!
//! # Examples
//!
//! ```rust
//! use semialign::data::{NonEmpty, These};
//!
//! let values = NonEmpty::new(These::Left(1), vec![These::Both(2, 'b')]);
//! let lefts: Vec<Option<i32>> = values.into_iter().map(These::left).collect();
//! assert_eq!(lefts, vec![Some(1), Some(2)]);
//! ```

mod error;
mod non_empty;
mod these;

pub use error::EmptyError;
pub use non_empty::NonEmpty;
pub use these::{These, partition_here_there, partition_these};
