use crate::bitset::{BitSet, RawBitSet};
use crate::index::BitIndex;
use core::fmt::{Binary, Debug};
use core::hash::Hash;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer type that can back a [`BitSet`].
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `u128`; the trait is sealed.
/// The bit width `N` of a bitset is [`Word::BITS`].
///
/// Signed types are rejected at compile time:
///
/// ```compile_fail
/// use word_bitset::BitSet;
///
/// let _ = BitSet::<i32>::empty();
/// ```
pub trait Word:
    sealed::Sealed
    + Copy
    + Default
    + Eq
    + Ord
    + Hash
    + Debug
    + Binary
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + Send
    + Sync
    + 'static
{
    /// Number of bits in the word, `N`.
    const BITS: u32;
    /// All bits unset.
    const ZERO: Self;
    /// Only the least significant bit set.
    const ONE: Self;
    /// All bits set.
    const MAX: Self;

    /// Count of trailing zeros. Returns `BITS` for zero.
    fn ctz(self) -> u32;
    /// Count of leading zeros. Returns `BITS` for zero.
    fn clz(self) -> u32;
    /// Index of the most significant set bit, or `-1` for zero.
    fn log2(self) -> i16;
    /// Number of set bits.
    fn popcount(self) -> u32;
    /// `true` iff exactly one bit is set.
    fn is_power_of_two(self) -> bool;

    /// Wrapping (modular) addition.
    fn wrapping_add(self, rhs: Self) -> Self;
    /// Wrapping (modular) subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;
    /// Two's complement negation.
    fn wrapping_neg(self) -> Self;
    /// Left shift; shifting by `BITS` or more yields zero.
    fn shl(self, n: u32) -> Self;
    /// Right shift; shifting by `BITS` or more yields zero.
    fn shr(self, n: u32) -> Self;

    /// Truncating conversion to `u64`.
    fn to_u64(self) -> u64;
    /// Lossless conversion to `u128`.
    fn to_u128(self) -> u128;
}

/// Anything that denotes a set of bit positions in a word of type `T`.
///
/// This is the operand of [`BitSet::set`], [`BitSet::reset`],
/// [`BitSet::flip`], [`BitSet::test`] and of the bit scans on [`BitIndex`].
/// It is implemented for the raw word `T`, for a single [`BitIndex`], for
/// [`RawBitSet<T>`] and for [`BitSet<T>`].
pub trait IntoMask<T: Word> {
    /// Returns the bits denoted by `self`.
    fn into_mask(self) -> T;
}

impl<T: Word> IntoMask<T> for T {
    #[inline]
    fn into_mask(self) -> T {
        self
    }
}

impl<T: Word> IntoMask<T> for BitIndex {
    #[inline]
    fn into_mask(self) -> T {
        BitSet::<T>::index_to_mask(self)
    }
}

impl<T: Word> IntoMask<T> for RawBitSet<T> {
    #[inline]
    fn into_mask(self) -> T {
        self.bitmask
    }
}

impl<T: Word> IntoMask<T> for BitSet<T> {
    #[inline]
    fn into_mask(self) -> T {
        self.mask()
    }
}

#[cfg(not(feature = "portable-bitscan"))]
macro_rules! scan_primitives {
    ($t:ty) => {
        #[inline]
        fn ctz(self) -> u32 {
            <$t>::trailing_zeros(self)
        }

        #[inline]
        fn clz(self) -> u32 {
            <$t>::leading_zeros(self)
        }

        #[inline]
        fn log2(self) -> i16 {
            match <$t>::checked_ilog2(self) {
                Some(log) => log as i16,
                None => -1,
            }
        }

        #[inline]
        fn popcount(self) -> u32 {
            <$t>::count_ones(self)
        }
    };
}

#[cfg(feature = "portable-bitscan")]
macro_rules! scan_primitives {
    ($t:ty) => {
        #[inline]
        fn ctz(self) -> u32 {
            crate::portable::trailing_zeros(self as u128, <$t>::BITS)
        }

        #[inline]
        fn clz(self) -> u32 {
            crate::portable::leading_zeros(self as u128, <$t>::BITS)
        }

        #[inline]
        fn log2(self) -> i16 {
            crate::portable::floor_log2(self as u128) as i16
        }

        #[inline]
        fn popcount(self) -> u32 {
            crate::portable::count_ones(self as u128)
        }
    };
}

macro_rules! impl_word {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;

                scan_primitives!($t);

                #[inline]
                fn is_power_of_two(self) -> bool {
                    self != 0 && self & (self - 1) == 0
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_neg(self) -> Self {
                    <$t>::wrapping_neg(self)
                }

                #[inline]
                fn shl(self, n: u32) -> Self {
                    <$t>::checked_shl(self, n).unwrap_or(0)
                }

                #[inline]
                fn shr(self, n: u32) -> Self {
                    <$t>::checked_shr(self, n).unwrap_or(0)
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn to_u128(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64, u128);
