//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! This module provides the foundation for emulating Higher-Kinded Types (HKT)
//! in Rust using Generic Associated Types (GAT). Every type class in this crate
//! is implemented for a *family* value rather than for a container type, so
//! that generic code can name "the same container shape, holding a different
//! element type".
//!
//! # Background
//!
//! Rust does not natively support Higher-Kinded Types. We cannot write a trait
//! that abstracts over `Option<_>` and `Vec<_>` as type constructors. Instead,
//! a zero-sized marker type such as [`VecInstance`](super::VecInstance)
//! implements [`TypeConstructor`] and maps any element type `A` to `Vec<A>`.
//!
//! # Example
//!
//! ```rust
//! use semialign::typeclass::{TypeConstructor, OptionInstance};
//!
//! fn absent<T: TypeConstructor>() -> T::Applied<String>
//! where
//!     T::Applied<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = absent::<OptionInstance>();
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor, implemented by family markers.
///
/// # Associated Types
///
/// - `Applied<A>`: The container of this family holding elements of type `A`.
///   For [`OptionInstance`](super::OptionInstance), `Applied<i32>` is `Option<i32>`.
///
/// # Example
///
/// ```rust
/// use semialign::typeclass::{TypeConstructor, VecInstance};
///
/// fn assert_applied<T: TypeConstructor<Applied<i32> = Vec<i32>>>() {}
/// assert_applied::<VecInstance>();
/// ```
pub trait TypeConstructor {
    /// The container of this family applied to the element type `A`.
    type Applied<A>;
}
