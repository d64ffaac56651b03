//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which every alignment instance
//! builds on. A `Functor` transforms the elements of a container without
//! changing its shape: the same positions (or keys) are present afterwards.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! instance.fmap(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! instance.fmap(instance.fmap(fa, f), g) == instance.fmap(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use semialign::typeclass::{Functor, OptionInstance, VecInstance};
//!
//! let transformed = OptionInstance.fmap(Some(5), |n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let doubled = VecInstance.fmap(vec![1, 2, 3], |n| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::higher::TypeConstructor;
use super::instances::{HashMapInstance, NonEmptyInstance, OptionInstance, VecInstance};
use crate::data::NonEmpty;

/// A type class for container families that can have a function mapped over
/// their contents.
///
/// The function is `FnMut` because most families hold more than one element;
/// it is called once per element, in the container's order.
///
/// # Examples
///
/// ```rust
/// use semialign::typeclass::{Functor, VecInstance};
///
/// let lengths = VecInstance.fmap(vec!["a", "bcd"], |s| s.len());
/// assert_eq!(lengths, vec![1, 3]);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to every element of the container.
    ///
    /// # Arguments
    ///
    /// * `container` - The container to transform
    /// * `function` - A function that transforms each element
    ///
    /// # Returns
    ///
    /// A container of the same shape holding the transformed elements
    fn fmap<A, B, F>(&self, container: Self::Applied<A>, function: F) -> Self::Applied<B>
    where
        F: FnMut(A) -> B;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl Functor for OptionInstance {
    #[inline]
    fn fmap<A, B, F>(&self, container: Option<A>, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        container.map(function)
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl Functor for VecInstance {
    #[inline]
    fn fmap<A, B, F>(&self, container: Vec<A>, function: F) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        container.into_iter().map(function).collect()
    }
}

// =============================================================================
// NonEmpty<A> Implementation
// =============================================================================

impl Functor for NonEmptyInstance {
    #[inline]
    fn fmap<A, B, F>(&self, container: NonEmpty<A>, function: F) -> NonEmpty<B>
    where
        F: FnMut(A) -> B,
    {
        container.map(function)
    }
}

// =============================================================================
// HashMap<K, A, S> Implementation
// =============================================================================

impl<K, S> Functor for HashMapInstance<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn fmap<A, B, F>(&self, container: HashMap<K, A, S>, mut function: F) -> HashMap<K, B, S>
    where
        F: FnMut(A) -> B,
    {
        let mut result = HashMap::with_capacity_and_hasher(container.len(), S::default());
        result.extend(
            container
                .into_iter()
                .map(|(key, value)| (key, function(value))),
        );
        result
    }
}
