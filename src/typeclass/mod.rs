//! Type class traits for aligning containers.
//!
//! This module provides the type classes (traits) that combine two containers
//! of the same family without discarding elements:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Semialign`]: Combining two containers position by position into [`These`](crate::data::These)
//! - [`Align`]: Semialign with an empty container ([`Align::nil`])
//! - [`Bifunctor`]: Mapping over both sides of a two-parameter type
//! - [`Semigroup`]: Associative binary operations
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) on zero-sized family
//! markers to emulate them. The marker is passed explicitly to every
//! operation:
//!
//! - [`OptionInstance`]: `Option<A>`
//! - [`VecInstance`]: `Vec<A>`
//! - [`NonEmptyInstance`]: [`NonEmpty<A>`](crate::data::NonEmpty)
//! - [`HashMapInstance`] / [`StringMapInstance`]: `HashMap<K, A, S>`
//!
//! ## Derived Combinators
//!
//! - [`salign`], [`salign_with`]: merge overlapping positions
//! - [`pad_zip`], [`pad_zip_with`]: zip with both sides optional
//! - [`lpad_zip`], [`lpad_zip_with`], [`rpad_zip`], [`rpad_zip_with`]:
//!   asymmetric padded zips over `Vec`
//!
//! # Examples
//!
//! ## Using Semialign
//!
//! ```rust
//! use semialign::data::These;
//! use semialign::typeclass::{Semialign, VecInstance};
//!
//! assert_eq!(
//!     VecInstance.align(vec![1, 2], vec!["a"]),
//!     vec![These::Both(1, "a"), These::Left(2)]
//! );
//! ```
//!
//! ## Using salign
//!
//! ```rust
//! use semialign::typeclass::{Sum, VecInstance, salign};
//!
//! let sums = salign(&VecInstance, vec![Sum::new(1), Sum::new(2)], vec![Sum::new(3)]);
//! assert_eq!(sums, vec![Sum::new(4), Sum::new(2)]);
//! ```

mod align;
mod bifunctor;
mod functor;
mod higher;
mod instances;
mod pad_zip;
mod semialign;
mod semigroup;
mod wrappers;

pub use align::{Align, salign, salign_with};
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use instances::{HashMapInstance, NonEmptyInstance, OptionInstance, StringMapInstance, VecInstance};
pub use pad_zip::{lpad_zip, lpad_zip_with, pad_zip, pad_zip_with, rpad_zip, rpad_zip_with};
pub use semialign::Semialign;
pub use semigroup::Semigroup;
pub use wrappers::{Max, Min, Product, Sum};

#[cfg(feature = "fxhash")]
pub use instances::FxHashMapInstance;

#[cfg(feature = "ahash")]
pub use instances::AHashMapInstance;
