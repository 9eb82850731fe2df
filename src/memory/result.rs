//! Comparison result values.
//!
//! Both results use zero for "identical". They are plain newtypes with named
//! operations; there is no operator overloading and no implicit conversion to
//! `bool`.

use std::cmp::Ordering;

/// Outcome of an equality-only comparison.
///
/// Zero means identical. Any non-zero value means the buffers differ; the
/// magnitude carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BcmpResult(u32);

impl BcmpResult {
    /// The buffers are identical.
    pub const ZERO: Self = Self(0);

    /// Wrap a raw value, zero meaning equal.
    #[inline]
    pub const fn from_raw(value: u32) -> Self {
        Self(value)
    }

    /// The raw value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_diff(self) -> bool {
        self.0 != 0
    }

    /// Merge two partial results: differ if either differs.
    #[inline]
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// Outcome of a three-way comparison.
///
/// Carries `p1[i] - p2[i]` for the first differing byte `i`, so the sign
/// follows the usual comparator convention: negative if the first buffer
/// sorts first, zero if identical, positive otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MemcmpResult(i32);

impl MemcmpResult {
    /// The buffers are identical.
    pub const ZERO: Self = Self(0);

    /// Build from a signed byte difference.
    #[inline]
    pub const fn from_diff(diff: i32) -> Self {
        Self(diff)
    }

    /// The signed difference.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_diff(self) -> bool {
        self.0 != 0
    }

    /// The sign as an [`Ordering`].
    #[inline]
    pub fn ordering(self) -> Ordering {
        self.0.cmp(&0)
    }
}

impl From<MemcmpResult> for Ordering {
    fn from(result: MemcmpResult) -> Self {
        result.ordering()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcmp_result() {
        assert!(BcmpResult::ZERO.is_zero());
        assert!(!BcmpResult::ZERO.is_diff());
        assert_eq!(BcmpResult::default(), BcmpResult::ZERO);

        let diff = BcmpResult::from_raw(0x8000_0000);
        assert!(diff.is_diff());
        assert_eq!(diff.raw(), 0x8000_0000);
    }

    #[test]
    fn test_bcmp_combine() {
        let zero = BcmpResult::ZERO;
        let a = BcmpResult::from_raw(0b01);
        let b = BcmpResult::from_raw(0b10);

        assert!(zero.combine(zero).is_zero());
        assert!(zero.combine(a).is_diff());
        assert!(a.combine(zero).is_diff());
        assert_eq!(a.combine(b).raw(), 0b11);
    }

    #[test]
    fn test_memcmp_result() {
        assert!(MemcmpResult::ZERO.is_zero());
        assert_eq!(MemcmpResult::ZERO.ordering(), Ordering::Equal);

        let less = MemcmpResult::from_diff(-255);
        assert!(less.is_diff());
        assert_eq!(less.value(), -255);
        assert_eq!(less.ordering(), Ordering::Less);

        let greater = MemcmpResult::from_diff(4);
        assert_eq!(Ordering::from(greater), Ordering::Greater);
    }
}
