//! Instance values for the supported container families.
//!
//! Each family is a zero-sized marker. Generic combinators take the marker
//! by reference, so the caller always states which instance is used:
//!
//! | Instance | Container |
//! |---|---|
//! | [`OptionInstance`] | `Option<A>` |
//! | [`VecInstance`] | `Vec<A>` |
//! | [`NonEmptyInstance`] | [`NonEmpty<A>`](crate::data::NonEmpty) |
//! | [`HashMapInstance<K, S>`] | `HashMap<K, A, S>` |
//!
//! # Examples
//!
//! ```rust
//! use semialign::data::These;
//! use semialign::typeclass::{Semialign, VecInstance};
//!
//! let aligned = VecInstance.align(vec![1, 2], vec!['a']);
//! assert_eq!(aligned, vec![These::Both(1, 'a'), These::Left(2)]);
//! ```

use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use super::higher::TypeConstructor;
use crate::data::NonEmpty;

/// The optional-value family: `Applied<A> = Option<A>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionInstance;

/// The sequence family: `Applied<A> = Vec<A>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VecInstance;

/// The non-empty sequence family: `Applied<A> = NonEmpty<A>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NonEmptyInstance;

/// The keyed mapping family: `Applied<A> = HashMap<K, A, S>`.
///
/// The key type and build-hasher are fixed by the instance; only the value
/// type varies.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use semialign::typeclass::{Align, StringMapInstance};
///
/// let empty: HashMap<String, i32> = StringMapInstance::new().nil();
/// assert!(empty.is_empty());
/// ```
pub struct HashMapInstance<K, S = RandomState> {
    marker: PhantomData<fn() -> (K, S)>,
}

/// The string-keyed mapping instance.
pub type StringMapInstance = HashMapInstance<String>;

/// A mapping instance hashing keys with `rustc-hash`.
#[cfg(feature = "fxhash")]
pub type FxHashMapInstance<K> = HashMapInstance<K, rustc_hash::FxBuildHasher>;

/// A mapping instance hashing keys with `ahash`.
#[cfg(feature = "ahash")]
pub type AHashMapInstance<K> = HashMapInstance<K, ahash::RandomState>;

impl<K, S> HashMapInstance<K, S> {
    /// Creates the instance value.
    #[inline]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<K, S> Clone for HashMapInstance<K, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, S> Copy for HashMapInstance<K, S> {}

impl<K, S> Default for HashMapInstance<K, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> fmt::Debug for HashMapInstance<K, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("HashMapInstance")
    }
}

// =============================================================================
// TypeConstructor Implementations
// =============================================================================

impl TypeConstructor for OptionInstance {
    type Applied<A> = Option<A>;
}

impl TypeConstructor for VecInstance {
    type Applied<A> = Vec<A>;
}

impl TypeConstructor for NonEmptyInstance {
    type Applied<A> = NonEmpty<A>;
}

impl<K, S> TypeConstructor for HashMapInstance<K, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Applied<A> = HashMap<K, A, S>;
}

static_assertions::assert_impl_all!(OptionInstance: Copy, Send, Sync, Default);
static_assertions::assert_impl_all!(VecInstance: Copy, Send, Sync, Default);
static_assertions::assert_impl_all!(NonEmptyInstance: Copy, Send, Sync, Default);
static_assertions::assert_impl_all!(StringMapInstance: Copy, Send, Sync, Default);
static_assertions::assert_impl_all!(HashMapInstance<std::rc::Rc<String>>: Copy, Send, Sync);
static_assertions::assert_eq_size!(StringMapInstance, ());
static_assertions::assert_eq_size!(VecInstance, ());

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn hash_map_instance_debug_names_family() {
        assert_eq!(format!("{:?}", StringMapInstance::new()), "HashMapInstance");
    }

    #[rstest]
    fn instances_are_interchangeable_values() {
        let first = VecInstance;
        let second = VecInstance;
        assert_eq!(first, second);
        assert_eq!(OptionInstance::default(), OptionInstance);
    }
}
