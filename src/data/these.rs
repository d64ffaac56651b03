//! These type - a value holding the left side, the right side, or both.
//!
//! `These<A, B>` is the element type produced by alignment. Where a plain
//! zip truncates to the shorter input, alignment keeps every element and
//! records at each position which side contributed:
//!
//! - `Left(a)`: only the left input had a value
//! - `Right(b)`: only the right input had a value
//! - `Both(a, b)`: both inputs had a value
//!
//! # Examples
//!
//! ```rust
//! use semialign::data::These;
//!
//! let both: These<i32, &str> = These::Both(1, "a");
//! let described = both.fold(
//!     |n| format!("left {n}"),
//!     |s| format!("right {s}"),
//!     |n, s| format!("both {n} {s}"),
//! );
//! assert_eq!(described, "both 1 a");
//! ```

/// A value that is the left side only, the right side only, or both.
///
/// # Type Parameters
///
/// * `A` - The type of the left value
/// * `B` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use semialign::data::These;
///
/// let left: These<i32, String> = These::Left(42);
/// assert!(left.is_left());
/// assert_eq!(left.left(), Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum These<A, B> {
    /// Only the left value is present.
    Left(A),
    /// Only the right value is present.
    Right(B),
    /// Both values are present.
    Both(A, B),
}

impl<A, B> These<A, B> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if only the left value is present.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if only the right value is present.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` if both values are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::data::These;
    ///
    /// assert!(These::<i32, i32>::Both(1, 2).is_both());
    /// assert!(!These::<i32, i32>::Left(1).is_both());
    /// ```
    #[inline]
    pub const fn is_both(&self) -> bool {
        matches!(self, Self::Both(_, _))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Returns the left value if there is one, including the `Both` case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::data::These;
    ///
    /// assert_eq!(These::<i32, &str>::Left(1).left(), Some(1));
    /// assert_eq!(These::<i32, &str>::Both(1, "a").left(), Some(1));
    /// assert_eq!(These::<i32, &str>::Right("a").left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<A> {
        match self {
            Self::Left(value) | Self::Both(value, _) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns the right value if there is one, including the `Both` case.
    #[inline]
    pub fn right(self) -> Option<B> {
        match self {
            Self::Right(value) | Self::Both(_, value) => Some(value),
            Self::Left(_) => None,
        }
    }

    /// Returns the left value only when the right side is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::data::These;
    ///
    /// assert_eq!(These::<i32, &str>::Left(1).left_only(), Some(1));
    /// assert_eq!(These::<i32, &str>::Both(1, "a").left_only(), None);
    /// ```
    #[inline]
    pub fn left_only(self) -> Option<A> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) | Self::Both(_, _) => None,
        }
    }

    /// Returns the right value only when the left side is absent.
    #[inline]
    pub fn right_only(self) -> Option<B> {
        match self {
            Self::Right(value) => Some(value),
            Self::Left(_) | Self::Both(_, _) => None,
        }
    }

    /// Returns the pair when both values are present.
    #[inline]
    pub fn both(self) -> Option<(A, B)> {
        match self {
            Self::Both(left, right) => Some((left, right)),
            Self::Left(_) | Self::Right(_) => None,
        }
    }

    /// Splits into a pair of options, each populated exactly when that side
    /// is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::data::These;
    ///
    /// assert_eq!(These::<i32, &str>::Left(1).into_options(), (Some(1), None));
    /// assert_eq!(These::<i32, &str>::Right("a").into_options(), (None, Some("a")));
    /// assert_eq!(These::<i32, &str>::Both(1, "a").into_options(), (Some(1), Some("a")));
    /// ```
    #[inline]
    pub fn into_options(self) -> (Option<A>, Option<B>) {
        match self {
            Self::Left(left) => (Some(left), None),
            Self::Right(right) => (None, Some(right)),
            Self::Both(left, right) => (Some(left), Some(right)),
        }
    }

    /// Builds a `These` from two options.
    ///
    /// Returns `None` when both options are absent, since `These` always
    /// carries at least one value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::data::These;
    ///
    /// assert_eq!(These::from_options(Some(1), Some("a")), Some(These::Both(1, "a")));
    /// assert_eq!(These::<i32, &str>::from_options(None, None), None);
    /// ```
    #[inline]
    pub fn from_options(left: Option<A>, right: Option<B>) -> Option<Self> {
        match (left, right) {
            (Some(left), Some(right)) => Some(Self::Both(left, right)),
            (Some(left), None) => Some(Self::Left(left)),
            (None, Some(right)) => Some(Self::Right(right)),
            (None, None) => None,
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Converts from `&These<A, B>` to `These<&A, &B>`.
    #[inline]
    pub const fn as_ref(&self) -> These<&A, &B> {
        match self {
            Self::Left(left) => These::Left(left),
            Self::Right(right) => These::Right(right),
            Self::Both(left, right) => These::Both(left, right),
        }
    }

    /// Returns a reference to the left value if there is one.
    #[inline]
    pub const fn left_ref(&self) -> Option<&A> {
        match self {
            Self::Left(value) | Self::Both(value, _) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if there is one.
    #[inline]
    pub const fn right_ref(&self) -> Option<&B> {
        match self {
            Self::Right(value) | Self::Both(_, value) => Some(value),
            Self::Left(_) => None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value wherever it is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::data::These;
    ///
    /// let both: These<i32, &str> = These::Both(2, "a");
    /// assert_eq!(both.map_left(|n| n * 10), These::Both(20, "a"));
    /// ```
    #[inline]
    pub fn map_left<C, F>(self, function: F) -> These<C, B>
    where
        F: FnOnce(A) -> C,
    {
        match self {
            Self::Left(left) => These::Left(function(left)),
            Self::Right(right) => These::Right(right),
            Self::Both(left, right) => These::Both(function(left), right),
        }
    }

    /// Applies a function to the right value wherever it is present.
    #[inline]
    pub fn map_right<D, G>(self, function: G) -> These<A, D>
    where
        G: FnOnce(B) -> D,
    {
        match self {
            Self::Left(left) => These::Left(left),
            Self::Right(right) => These::Right(function(right)),
            Self::Both(left, right) => These::Both(left, function(right)),
        }
    }

    /// Applies `left_function` to the left value and `right_function` to the
    /// right value, keeping the shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::data::These;
    ///
    /// let both: These<i32, String> = These::Both(2, "abc".to_string());
    /// assert_eq!(both.bimap(|n| n + 1, |s| s.len()), These::Both(3, 3));
    /// ```
    #[inline]
    pub fn bimap<C, D, F, G>(self, left_function: F, right_function: G) -> These<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        match self {
            Self::Left(left) => These::Left(left_function(left)),
            Self::Right(right) => These::Right(right_function(right)),
            Self::Both(left, right) => These::Both(left_function(left), right_function(right)),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `These` with one handler per shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::data::These;
    ///
    /// let right: These<i32, i32> = These::Right(5);
    /// assert_eq!(right.fold(|l| l, |r| r * 2, |l, r| l + r), 10);
    /// ```
    #[inline]
    pub fn fold<T, F, G, H>(self, left_function: F, right_function: G, both_function: H) -> T
    where
        F: FnOnce(A) -> T,
        G: FnOnce(B) -> T,
        H: FnOnce(A, B) -> T,
    {
        match self {
            Self::Left(left) => left_function(left),
            Self::Right(right) => right_function(right),
            Self::Both(left, right) => both_function(left, right),
        }
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Exchanges the two sides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::data::These;
    ///
    /// let left: These<i32, &str> = These::Left(1);
    /// assert_eq!(left.swap(), These::<&str, i32>::Right(1));
    /// ```
    #[inline]
    pub fn swap(self) -> These<B, A> {
        match self {
            Self::Left(left) => These::Right(left),
            Self::Right(right) => These::Left(right),
            Self::Both(left, right) => These::Both(right, left),
        }
    }
}

impl<A> These<A, A> {
    /// Collapses a `These` whose sides share a type.
    ///
    /// One-sided values pass through; `Both` is combined with `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::data::These;
    ///
    /// assert_eq!(These::Both(2, 3).merge_with(|a, b| a + b), 5);
    /// assert_eq!(These::<i32, i32>::Right(3).merge_with(|a, b| a + b), 3);
    /// ```
    #[inline]
    pub fn merge_with<F>(self, function: F) -> A
    where
        F: FnOnce(A, A) -> A,
    {
        match self {
            Self::Left(value) | Self::Right(value) => value,
            Self::Both(left, right) => function(left, right),
        }
    }
}

// =============================================================================
// Re-association
// =============================================================================

impl<A, B, C> These<These<A, B>, C> {
    /// Re-associates a left-nested `These` to the right.
    ///
    /// This is the isomorphism under which alignment is associative:
    /// `align(align(a, b), c)` re-associated equals `align(a, align(b, c))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use semialign::data::These;
    ///
    /// let nested: These<These<i32, char>, &str> = These::Both(These::Right('x'), "s");
    /// assert_eq!(nested.assoc(), These::Right(These::Both('x', "s")));
    /// ```
    pub fn assoc(self) -> These<A, These<B, C>> {
        match self {
            Self::Left(These::Left(a)) => These::Left(a),
            Self::Left(These::Right(b)) => These::Right(These::Left(b)),
            Self::Left(These::Both(a, b)) => These::Both(a, These::Left(b)),
            Self::Right(c) => These::Right(These::Right(c)),
            Self::Both(These::Left(a), c) => These::Both(a, These::Right(c)),
            Self::Both(These::Right(b), c) => These::Right(These::Both(b, c)),
            Self::Both(These::Both(a, b), c) => These::Both(a, These::Both(b, c)),
        }
    }
}

impl<A, B, C> These<A, These<B, C>> {
    /// Re-associates a right-nested `These` to the left. Inverse of [`These::assoc`].
    pub fn unassoc(self) -> These<These<A, B>, C> {
        match self {
            Self::Left(a) => These::Left(These::Left(a)),
            Self::Right(These::Left(b)) => These::Left(These::Right(b)),
            Self::Right(These::Right(c)) => These::Right(c),
            Self::Right(These::Both(b, c)) => These::Both(These::Right(b), c),
            Self::Both(a, These::Left(b)) => These::Left(These::Both(a, b)),
            Self::Both(a, These::Right(c)) => These::Both(These::Left(a), c),
            Self::Both(a, These::Both(b, c)) => These::Both(These::Both(a, b), c),
        }
    }
}

// =============================================================================
// Partitioning
// =============================================================================

/// Splits a sequence of `These` values into the left-only values, the
/// right-only values and the pairs, each in input order.
///
/// # Examples
///
/// ```rust
/// use semialign::data::{These, partition_these};
///
/// let values = vec![These::Left(1), These::Both(2, 'b'), These::Right('c')];
/// let (lefts, rights, pairs) = partition_these(values);
/// assert_eq!(lefts, vec![1]);
/// assert_eq!(rights, vec!['c']);
/// assert_eq!(pairs, vec![(2, 'b')]);
/// ```
pub fn partition_these<A, B, I>(values: I) -> (Vec<A>, Vec<B>, Vec<(A, B)>)
where
    I: IntoIterator<Item = These<A, B>>,
{
    let mut lefts = Vec::new();
    let mut rights = Vec::new();
    let mut pairs = Vec::new();

    for value in values {
        match value {
            These::Left(left) => lefts.push(left),
            These::Right(right) => rights.push(right),
            These::Both(left, right) => pairs.push((left, right)),
        }
    }

    (lefts, rights, pairs)
}

/// Collects every left value and every right value, with `Both` contributing
/// to both outputs.
///
/// # Examples
///
/// ```rust
/// use semialign::data::{These, partition_here_there};
///
/// let values = vec![These::Left(1), These::Both(2, 'b'), These::Right('c')];
/// let (heres, theres) = partition_here_there(values);
/// assert_eq!(heres, vec![1, 2]);
/// assert_eq!(theres, vec!['b', 'c']);
/// ```
pub fn partition_here_there<A, B, I>(values: I) -> (Vec<A>, Vec<B>)
where
    I: IntoIterator<Item = These<A, B>>,
{
    let mut heres = Vec::new();
    let mut theres = Vec::new();

    for value in values {
        let (here, there) = value.into_options();
        heres.extend(here);
        theres.extend(there);
    }

    (heres, theres)
}
