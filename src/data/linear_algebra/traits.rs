//! # Traits for elements in sparse data structures
//!
//! Values that are not stored are zero, so every element type needs to know its zero. All
//! arithmetic on elements is checked: the matrices hold exact integers and a result that doesn't
//! fit the element type is an error, never a wrapped value. Elements are ordered, so that sums can
//! be formed in an order that doesn't pass through values out of range.
use std::fmt::{Debug, Display};

use num_traits::{CheckedAdd, CheckedMul, CheckedNeg, CheckedSub, Zero};

/// Element of a `SparseMatrix`.
///
/// Implemented for all types that have the required properties, most notably the primitive
/// integers.
pub trait Element:
    Copy +
    Ord +
    Debug +
    Display +
    Zero +
    CheckedAdd +
    CheckedSub +
    CheckedMul +
    CheckedNeg +
{
}

impl<T> Element for T
where
    T: Copy + Ord + Debug + Display + Zero + CheckedAdd + CheckedSub + CheckedMul + CheckedNeg,
{
}

#[cfg(test)]
mod test {
    use super::Element;

    fn accepts<F: Element>(value: F) -> bool {
        value.is_zero()
    }

    #[test]
    fn primitive_integers() {
        assert!(accepts(0_i8));
        assert!(accepts(0_i32));
        assert!(!accepts(-3_i64));
        assert!(!accepts(7_i128));
        assert!(accepts(0_u16));
    }
}
