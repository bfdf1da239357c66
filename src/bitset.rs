use crate::index::{BitIndex, RawIndex};
use crate::iter::{Indices, Iter};
use crate::word::{IntoMask, Word};
use core::cmp::Ordering;
use core::fmt::{self, Binary, Debug, Display, Formatter, Write};
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl,
    ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

#[cfg(feature = "alloc")]
use alloc::string::String;

/// Plain bitmask for use in `const` items.
///
/// `RawBitSet` supports `const` construction and the four bitwise
/// operations as `const fn`s, so literal masks can be combined at compile
/// time. Convert it into a [`BitSet`] for everything else.
///
/// # Examples
/// ```
/// use word_bitset::{BitSet, RawBitSet, RawIndex};
///
/// const LOW: RawBitSet<u8> = RawBitSet::new(0b0000_0011);
/// const TOP: RawBitSet<u8> = RawBitSet::<u8>::single(RawIndex::new(7));
/// const BOTH: RawBitSet<u8> = LOW.union(TOP);
///
/// assert_eq!(BitSet::from(BOTH).mask(), 0b1000_0011);
/// assert_eq!(BOTH.complement().bitmask, 0b0111_1100);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[repr(transparent)]
pub struct RawBitSet<T> {
    /// Bit `i` is set iff position `i` is a member.
    pub bitmask: T,
}

impl<T> RawBitSet<T> {
    /// Wraps a raw mask.
    #[inline]
    pub const fn new(bitmask: T) -> Self {
        Self { bitmask }
    }
}

macro_rules! impl_concrete_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl RawBitSet<$t> {
                /// A mask with only the bit at `index` set.
                ///
                /// `index` must denote an existing bit.
                #[inline]
                pub const fn single(index: RawIndex) -> Self {
                    Self::new(1 << index.position)
                }

                /// Bits set in either operand.
                #[inline]
                pub const fn union(self, other: Self) -> Self {
                    Self::new(self.bitmask | other.bitmask)
                }

                /// Bits set in both operands.
                #[inline]
                pub const fn intersection(self, other: Self) -> Self {
                    Self::new(self.bitmask & other.bitmask)
                }

                /// Bits set in exactly one operand.
                #[inline]
                pub const fn symmetric_difference(self, other: Self) -> Self {
                    Self::new(self.bitmask ^ other.bitmask)
                }

                /// Every bit inverted.
                #[inline]
                pub const fn complement(self) -> Self {
                    Self::new(!self.bitmask)
                }

                /// Equality usable in `const` contexts.
                #[inline]
                pub const fn const_eq(self, other: Self) -> bool {
                    self.bitmask == other.bitmask
                }
            }

            impl BitOrAssign<$t> for BitSet<$t> {
                #[inline]
                fn bitor_assign(&mut self, rhs: $t) {
                    self.raw.bitmask |= rhs;
                }
            }

            impl BitAndAssign<$t> for BitSet<$t> {
                #[inline]
                fn bitand_assign(&mut self, rhs: $t) {
                    self.raw.bitmask &= rhs;
                }
            }

            impl BitXorAssign<$t> for BitSet<$t> {
                #[inline]
                fn bitxor_assign(&mut self, rhs: $t) {
                    self.raw.bitmask ^= rhs;
                }
            }
        )*
    };
}

impl_concrete_ops!(u8, u16, u32, u64, u128);

impl<T: Word> BitOr for RawBitSet<T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::new(self.bitmask | rhs.bitmask)
    }
}

impl<T: Word> BitAnd for RawBitSet<T> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::new(self.bitmask & rhs.bitmask)
    }
}

impl<T: Word> BitXor for RawBitSet<T> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::new(self.bitmask ^ rhs.bitmask)
    }
}

impl<T: Word> Not for RawBitSet<T> {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::new(!self.bitmask)
    }
}

/// A set of bit positions stored in a single unsigned word `T`.
///
/// The width `N` is `T::BITS` (8, 16, 32, 64 or 128). Bit `i` of the word
/// represents membership of position `i`; there is no other state, every
/// operation is a constant-time function of the word.
///
/// Single positions are addressed with [`BitIndex`]. The mutators and
/// [`test`] accept anything implementing [`IntoMask`]: a [`BitIndex`], a raw
/// word, a [`RawBitSet`] or another `BitSet`.
///
/// Comparison with `<`, `>` etc. compares the words as unsigned integers,
/// not by set inclusion.
///
/// # Examples
/// ```
/// use word_bitset::{BitIndex, BitSet};
///
/// let mut set = BitSet::<u8>::empty();
/// set.set(BitIndex::new(1));
/// set.set(0b0100_0100u8);
/// assert_eq!(set.count(), 3);
/// assert_eq!(set.to_string_with('.', '#'), ".#...##.");
///
/// let singles: Vec<u8> = set.iter().map(|bit| bit.mask()).collect();
/// assert_eq!(singles, [0b10, 0b100, 0b100_0000]);
/// ```
///
/// [`test`]: BitSet::test
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct BitSet<T: Word> {
    raw: RawBitSet<T>,
}

impl<T: Word> BitSet<T> {
    /// Creates a bitset with no bit set.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// const EMPTY: BitSet<u32> = BitSet::empty();
    /// assert!(EMPTY.none());
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self::from_mask(T::ZERO)
    }

    /// Creates a bitset with every bit set.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// assert!(BitSet::<u16>::full().all());
    /// assert_eq!(BitSet::<u16>::full().count(), 16);
    /// ```
    #[inline]
    pub const fn full() -> Self {
        Self::from_mask(T::MAX)
    }

    /// Wraps a raw word.
    #[inline]
    pub const fn from_mask(bitmask: T) -> Self {
        Self::from_raw(RawBitSet::new(bitmask))
    }

    /// Wraps a constant.
    #[inline]
    pub const fn from_raw(raw: RawBitSet<T>) -> Self {
        Self { raw }
    }

    /// Creates a bitset with only the bit at `index` set.
    ///
    /// `index` must denote an existing bit.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::{BitIndex, BitSet};
    ///
    /// assert_eq!(BitSet::<u64>::from_index(BitIndex::new(40)).mask(), 1 << 40);
    /// ```
    #[inline]
    pub fn from_index(index: BitIndex) -> Self {
        Self::from_mask(Self::index_to_mask(index))
    }

    /// Converts a valid index into the word with only that bit set.
    #[inline]
    pub fn index_to_mask(index: BitIndex) -> T {
        debug_assert!(index.is_valid::<T>(), "Bit index {index} out of bounds");
        T::ONE.shl(index.get() as u32)
    }

    /// Converts a nonzero word into the index of its least significant set
    /// bit.
    #[inline]
    pub fn mask_to_index(mask: T) -> BitIndex {
        debug_assert!(mask != T::ZERO, "Index of the lowest bit of an empty mask");
        BitIndex::new(mask.ctz() as i16)
    }

    /// Returns the underlying word.
    #[inline]
    pub const fn mask(&self) -> T {
        self.raw.bitmask
    }

    /// Returns the plain constant form.
    #[inline]
    pub const fn raw(&self) -> RawBitSet<T> {
        self.raw
    }

    /// Returns the underlying word, truncated to 64 bits for `u128`.
    #[inline]
    pub fn to_u64(&self) -> u64 {
        self.raw.bitmask.to_u64()
    }

    /// Returns the underlying word widened to 128 bits.
    #[inline]
    pub fn to_u128(&self) -> u128 {
        self.raw.bitmask.to_u128()
    }

    /// Unsets every bit.
    #[inline]
    pub fn reset_all(&mut self) {
        self.raw.bitmask = T::ZERO;
    }

    /// Sets every bit.
    #[inline]
    pub fn set_all(&mut self) {
        self.raw.bitmask = T::MAX;
    }

    /// Sets the given bits.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::{BitIndex, BitSet};
    ///
    /// let mut bs = BitSet::<u8>::empty();
    /// bs.set(BitIndex::new(3));
    /// bs.set(0b1000_0000u8);
    /// assert_eq!(bs.mask(), 0b1000_1000);
    /// ```
    #[inline]
    pub fn set(&mut self, bits: impl IntoMask<T>) {
        self.raw.bitmask |= bits.into_mask();
    }

    /// Unsets the given bits.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::{BitIndex, BitSet};
    ///
    /// let mut bs = BitSet::<u8>::full();
    /// bs.reset(BitIndex::new(0));
    /// bs.reset(BitSet::from_mask(0xf0u8));
    /// assert_eq!(bs.mask(), 0b0000_1110);
    /// ```
    #[inline]
    pub fn reset(&mut self, bits: impl IntoMask<T>) {
        self.raw.bitmask &= !bits.into_mask();
    }

    /// Toggles the given bits.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::{BitIndex, BitSet};
    ///
    /// let mut bs = BitSet::<u8>::from_mask(0b0101);
    /// bs.flip(0b0011u8);
    /// assert_eq!(bs.mask(), 0b0110);
    /// bs.flip(BitIndex::new(2));
    /// assert_eq!(bs.mask(), 0b0010);
    /// ```
    #[inline]
    pub fn flip(&mut self, bits: impl IntoMask<T>) {
        self.raw.bitmask ^= bits.into_mask();
    }

    /// Returns `true` if any of the given bits is set.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::{BitIndex, BitSet};
    ///
    /// let bs = BitSet::<u8>::from_mask(0b0100_0110);
    /// assert!(bs.test(BitIndex::new(6)));
    /// assert!(!bs.test(BitIndex::new(0)));
    /// assert!(bs.test(0b1000_0010u8));
    /// assert!(!bs.test(0b1000_0001u8));
    /// ```
    #[inline]
    pub fn test(&self, bits: impl IntoMask<T>) -> bool {
        self.raw.bitmask & bits.into_mask() != T::ZERO
    }

    /// Returns `true` if every bit is set.
    #[inline]
    pub fn all(&self) -> bool {
        self.raw.bitmask == T::MAX
    }

    /// Returns `true` if at least one bit is set.
    #[inline]
    pub fn any(&self) -> bool {
        self.raw.bitmask != T::ZERO
    }

    /// Returns `true` if no bit is set.
    #[inline]
    pub fn none(&self) -> bool {
        self.raw.bitmask == T::ZERO
    }

    /// Returns `true` if exactly one bit is set.
    #[inline]
    pub fn is_single_bit(&self) -> bool {
        self.raw.bitmask.is_power_of_two()
    }

    /// Returns the number of bits the set can hold, `N`.
    #[inline]
    pub const fn size(&self) -> usize {
        T::BITS as usize
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn count(&self) -> usize {
        self.raw.bitmask.popcount() as usize
    }

    /// Returns a bitset with only the lowest set bit, or the empty set.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// assert_eq!(BitSet::<u8>::from_mask(0b0110_1000).least_significant_set_bit().mask(), 0b1000);
    /// ```
    #[inline]
    pub fn least_significant_set_bit(&self) -> Self {
        let mask = self.raw.bitmask;
        Self::from_mask(mask & mask.wrapping_neg())
    }

    /// Returns a bitset with only the highest set bit, or the empty set.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// assert_eq!(BitSet::<u8>::from_mask(0b0110_1000).most_significant_set_bit().mask(), 0b0100_0000);
    /// ```
    #[inline]
    pub fn most_significant_set_bit(&self) -> Self {
        match self.raw.bitmask.log2() {
            -1 => Self::empty(),
            log => Self::from_mask(T::ONE.shl(log as u32)),
        }
    }

    /// Returns the index of the lowest set bit, or `end` if no bit is set.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::{BitIndex, BitSet};
    ///
    /// assert_eq!(BitSet::<u32>::from_mask(0x100).least_significant_set_bit_index().get(), 8);
    /// assert_eq!(BitSet::<u32>::empty().least_significant_set_bit_index(), BitIndex::end::<u32>());
    /// ```
    #[inline]
    pub fn least_significant_set_bit_index(&self) -> BitIndex {
        if self.any() {
            Self::mask_to_index(self.raw.bitmask)
        } else {
            BitIndex::end::<T>()
        }
    }

    /// Returns the index of the highest set bit, or pre-begin if no bit is
    /// set.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::{BitIndex, BitSet};
    ///
    /// assert_eq!(BitSet::<u32>::from_mask(0x180).most_significant_set_bit_index().get(), 8);
    /// assert_eq!(BitSet::<u32>::empty().most_significant_set_bit_index(), BitIndex::PRE_BEGIN);
    /// ```
    #[inline]
    pub fn most_significant_set_bit_index(&self) -> BitIndex {
        BitIndex::new(self.raw.bitmask.log2())
    }

    /// Adds one to the word, wrapping on overflow.
    ///
    /// Together with [`decrement`] this lets the set be used as a counter,
    /// e.g. to enumerate every mask of a width.
    ///
    /// [`decrement`]: BitSet::decrement
    #[inline]
    pub fn increment(&mut self) {
        self.raw.bitmask = self.raw.bitmask.wrapping_add(T::ONE);
    }

    /// Subtracts one from the word, wrapping on underflow.
    #[inline]
    pub fn decrement(&mut self) {
        self.raw.bitmask = self.raw.bitmask.wrapping_sub(T::ONE);
    }

    /// Returns an iterator over the set bits as single-bit sets, lowest
    /// first.
    ///
    /// The iterator owns a copy of the word; later changes to `self` do not
    /// affect it.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let bs = BitSet::<u8>::from_mask(0b1010_0000);
    /// let mut iter = bs.iter();
    /// assert_eq!(iter.next().map(|b| b.mask()), Some(0b0010_0000));
    /// assert_eq!(iter.next().map(|b| b.mask()), Some(0b1000_0000));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self.raw.bitmask)
    }

    /// Returns an iterator over the indices of the set bits.
    ///
    /// Iterates lowest first; use `.rev()` for highest first.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let bs = BitSet::<u16>::from_mask(0b1000_0000_0100_0110);
    /// let up: Vec<i16> = bs.indices().map(|i| i.get()).collect();
    /// let down: Vec<i16> = bs.indices().rev().map(|i| i.get()).collect();
    /// assert_eq!(up, [1, 2, 6, 15]);
    /// assert_eq!(down, [15, 6, 2, 1]);
    /// ```
    #[inline]
    pub fn indices(&self) -> Indices<T> {
        Indices::new(self.raw.bitmask)
    }

    /// Writes the bits to `out`, most significant first, as `zero` and `one`.
    ///
    /// Exactly `N` characters are written.
    pub fn write_bits<W: Write + ?Sized>(&self, out: &mut W, zero: char, one: char) -> fmt::Result {
        self.chars(zero, one).try_for_each(|c| out.write_char(c))
    }

    /// Returns the bits as a string, most significant first, using `zero`
    /// and `one` as digits.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let bs = BitSet::<u8>::from_mask(0b0100_0110);
    /// assert_eq!(bs.to_string_with('0', '1'), "01000110");
    /// assert_eq!(bs.to_string_with('-', 'x'), "-x---xx-");
    /// ```
    #[cfg(feature = "alloc")]
    pub fn to_string_with(&self, zero: char, one: char) -> String {
        self.chars(zero, one).collect()
    }

    fn chars(self, zero: char, one: char) -> impl Iterator<Item = char> {
        let mut bit = BitIndex::end::<T>();
        core::iter::from_fn(move || {
            if bit == BitIndex::BEGIN {
                return None;
            }
            bit.decrement();
            Some(if self.test(bit) { one } else { zero })
        })
    }
}

impl<T: Word> Default for BitSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Word> From<BitIndex> for BitSet<T> {
    fn from(index: BitIndex) -> Self {
        Self::from_index(index)
    }
}

impl<T: Word> From<RawBitSet<T>> for BitSet<T> {
    fn from(raw: RawBitSet<T>) -> Self {
        Self::from_raw(raw)
    }
}

impl<T: Word> From<BitSet<T>> for RawBitSet<T> {
    fn from(bs: BitSet<T>) -> Self {
        bs.raw
    }
}

/// Collects indices into a set with exactly those bits set.
///
/// Every index must denote an existing bit.
impl<T: Word> FromIterator<BitIndex> for BitSet<T> {
    fn from_iter<I: IntoIterator<Item = BitIndex>>(iter: I) -> Self {
        let mut bs = Self::empty();
        for index in iter {
            bs.set(index);
        }
        bs
    }
}

/// Collects sets into their union.
impl<T: Word> FromIterator<BitSet<T>> for BitSet<T> {
    fn from_iter<I: IntoIterator<Item = BitSet<T>>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |acc, bs| acc | bs)
    }
}

impl<'bitset, T: Word> IntoIterator for &'bitset BitSet<T> {
    type Item = BitSet<T>;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Word> IntoIterator for BitSet<T> {
    type Item = BitSet<T>;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Word> Display for BitSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_bits(f, '0', '1')
    }
}

/// Unlike the integer types, always writes all `N` digits.
impl<T: Word> Binary for BitSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_bits(f, '0', '1')
    }
}

impl<T: Word> Debug for BitSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BitSet(")?;
        self.write_bits(f, '0', '1')?;
        write!(f, ")")
    }
}

impl<T: Word> PartialEq<RawBitSet<T>> for BitSet<T> {
    fn eq(&self, other: &RawBitSet<T>) -> bool {
        self.raw == *other
    }
}

impl<T: Word> PartialEq<BitSet<T>> for RawBitSet<T> {
    fn eq(&self, other: &BitSet<T>) -> bool {
        *self == other.raw
    }
}

impl<T: Word> PartialOrd<RawBitSet<T>> for BitSet<T> {
    fn partial_cmp(&self, other: &RawBitSet<T>) -> Option<Ordering> {
        Some(self.raw.cmp(other))
    }
}

impl<T: Word> BitOr for BitSet<T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_mask(self.raw.bitmask | rhs.raw.bitmask)
    }
}

impl<T: Word> BitOr<RawBitSet<T>> for BitSet<T> {
    type Output = Self;

    fn bitor(self, rhs: RawBitSet<T>) -> Self::Output {
        self | Self::from_raw(rhs)
    }
}

impl<T: Word> BitOr<BitSet<T>> for RawBitSet<T> {
    type Output = BitSet<T>;

    fn bitor(self, rhs: BitSet<T>) -> Self::Output {
        BitSet::from_raw(self) | rhs
    }
}

impl<T: Word> BitOrAssign for BitSet<T> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.raw.bitmask |= rhs.raw.bitmask;
    }
}

impl<T: Word> BitOrAssign<RawBitSet<T>> for BitSet<T> {
    fn bitor_assign(&mut self, rhs: RawBitSet<T>) {
        self.raw.bitmask |= rhs.bitmask;
    }
}

impl<T: Word> BitAnd for BitSet<T> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_mask(self.raw.bitmask & rhs.raw.bitmask)
    }
}

impl<T: Word> BitAnd<RawBitSet<T>> for BitSet<T> {
    type Output = Self;

    fn bitand(self, rhs: RawBitSet<T>) -> Self::Output {
        self & Self::from_raw(rhs)
    }
}

impl<T: Word> BitAnd<BitSet<T>> for RawBitSet<T> {
    type Output = BitSet<T>;

    fn bitand(self, rhs: BitSet<T>) -> Self::Output {
        BitSet::from_raw(self) & rhs
    }
}

impl<T: Word> BitAndAssign for BitSet<T> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.raw.bitmask &= rhs.raw.bitmask;
    }
}

impl<T: Word> BitAndAssign<RawBitSet<T>> for BitSet<T> {
    fn bitand_assign(&mut self, rhs: RawBitSet<T>) {
        self.raw.bitmask &= rhs.bitmask;
    }
}

impl<T: Word> BitXor for BitSet<T> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::from_mask(self.raw.bitmask ^ rhs.raw.bitmask)
    }
}

impl<T: Word> BitXor<RawBitSet<T>> for BitSet<T> {
    type Output = Self;

    fn bitxor(self, rhs: RawBitSet<T>) -> Self::Output {
        self ^ Self::from_raw(rhs)
    }
}

impl<T: Word> BitXor<BitSet<T>> for RawBitSet<T> {
    type Output = BitSet<T>;

    fn bitxor(self, rhs: BitSet<T>) -> Self::Output {
        BitSet::from_raw(self) ^ rhs
    }
}

impl<T: Word> BitXorAssign for BitSet<T> {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.raw.bitmask ^= rhs.raw.bitmask;
    }
}

impl<T: Word> BitXorAssign<RawBitSet<T>> for BitSet<T> {
    fn bitxor_assign(&mut self, rhs: RawBitSet<T>) {
        self.raw.bitmask ^= rhs.bitmask;
    }
}

impl<T: Word> Not for BitSet<T> {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::from_mask(!self.raw.bitmask)
    }
}

impl<T: Word> Shl<u32> for BitSet<T> {
    type Output = Self;

    fn shl(mut self, rhs: u32) -> Self::Output {
        self <<= rhs;
        self
    }
}

/// Bits shifted past the most significant bit are lost; shifting by `N` or
/// more clears the set.
impl<T: Word> ShlAssign<u32> for BitSet<T> {
    fn shl_assign(&mut self, rhs: u32) {
        self.raw.bitmask = self.raw.bitmask.shl(rhs);
    }
}

impl<T: Word> Shr<u32> for BitSet<T> {
    type Output = Self;

    fn shr(mut self, rhs: u32) -> Self::Output {
        self >>= rhs;
        self
    }
}

/// Bits shifted past bit 0 are lost; shifting by `N` or more clears the set.
impl<T: Word> ShrAssign<u32> for BitSet<T> {
    fn shr_assign(&mut self, rhs: u32) {
        self.raw.bitmask = self.raw.bitmask.shr(rhs);
    }
}

impl<T: Word> Add<T> for BitSet<T> {
    type Output = Self;

    fn add(mut self, rhs: T) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Word> AddAssign<T> for BitSet<T> {
    fn add_assign(&mut self, rhs: T) {
        self.raw.bitmask = self.raw.bitmask.wrapping_add(rhs);
    }
}

impl<T: Word> Sub<T> for BitSet<T> {
    type Output = Self;

    fn sub(mut self, rhs: T) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Word> SubAssign<T> for BitSet<T> {
    fn sub_assign(&mut self, rhs: T) {
        self.raw.bitmask = self.raw.bitmask.wrapping_sub(rhs);
    }
}
