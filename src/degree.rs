//! Degree type for binomial tree roots.
//!
//! A binomial tree whose root has degree `d` holds exactly `2^d` nodes, so
//! the largest degree that can appear in a heap of `n` elements is
//! `floor(log2(n))`. A `u8` is therefore more than enough for any heap that
//! fits in memory and keeps arena nodes small.

/// Number of direct children of a node.
pub type Degree = u8;

/// Largest representable degree.
pub const MAX_DEGREE: Degree = u8::MAX;

/// Increment a degree after a link, panicking on overflow.
///
/// # Panics
///
/// Panics if `degree == MAX_DEGREE`. Reaching it would need a tree with
/// 2²⁵⁵ nodes, so hitting this is a structural bug rather than a big input.
///
/// # Example
///
/// ```rust
/// use rust_binomial_heap::degree::checked_increment;
///
/// assert_eq!(checked_increment(3), 4);
/// ```
#[inline]
pub fn checked_increment(degree: Degree) -> Degree {
    degree
        .checked_add(1)
        .expect("degree overflow: a binomial tree cannot have more than 2^255 nodes")
}

/// Number of nodes in a binomial tree whose root has the given degree.
///
/// Returns `None` when `2^degree` does not fit in a `usize`.
#[inline]
pub fn tree_size(degree: Degree) -> Option<usize> {
    1usize.checked_shl(u32::from(degree))
}
