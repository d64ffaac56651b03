//! # semialign
//!
//! Zipping without discarding elements: the `Semialign` and `Align` type
//! classes and their instances for `Option`, `Vec`, `NonEmpty` and `HashMap`.
//!
//! ## Overview
//!
//! A plain zip truncates to the shorter input. Alignment keeps every element
//! and records at each position which side contributed, using
//! [`These`](data::These):
//!
//! - **Data**: `These` (left, right or both) and `NonEmpty` sequences
//! - **Type Classes**: Functor, Semialign, Align, Bifunctor, Semigroup
//! - **Combinators**: `salign`, `pad_zip`, `lpad_zip`, `rpad_zip` and their
//!   `_with` variants
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and instances (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for `These` and `NonEmpty`
//! - `fxhash`: `FxHashMapInstance`, a mapping instance using `rustc-hash`
//! - `ahash`: `AHashMapInstance`, a mapping instance using `ahash`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use semialign::prelude::*;
//!
//! let aligned = VecInstance.align(vec![1, 2, 3], vec!['a']);
//! assert_eq!(
//!     aligned,
//!     vec![These::Both(1, 'a'), These::Left(2), These::Left(3)]
//! );
//!
//! assert_eq!(
//!     rpad_zip(vec![1, 2], vec!['a']),
//!     vec![(1, Some('a')), (2, None)]
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use semialign::prelude::*;
/// ```
pub mod prelude {
    pub use crate::data::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod data;

#[cfg(feature = "typeclass")]
pub mod typeclass;
