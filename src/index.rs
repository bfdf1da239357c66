use crate::word::{IntoMask, Word};
use core::cmp::Ordering;
use core::fmt::{self, Display, Formatter};
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// Widest supported bitset; also the largest valid `end` position.
const MAX_WIDTH: i16 = 128;

/// Plain bit coordinate for use in `const` items.
///
/// A `RawIndex` carries no operations beyond construction and comparison;
/// convert it into a [`BitIndex`] for scanning and arithmetic.
///
/// # Examples
/// ```
/// use word_bitset::{BitIndex, RawIndex};
///
/// const THIRD: RawIndex = RawIndex::new(2);
/// assert_eq!(BitIndex::from(THIRD).get(), 2);
/// assert_eq!(RawIndex::end::<u32>().position, 32);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct RawIndex {
    /// `-1` for pre-begin, `[0, N)` for a bit, `N` for end.
    pub position: i16,
}

impl RawIndex {
    /// One before the least significant bit.
    pub const PRE_BEGIN: Self = Self::new(-1);
    /// The least significant bit.
    pub const BEGIN: Self = Self::new(0);

    /// Wraps a raw position. The value is not validated.
    #[inline]
    pub const fn new(position: i16) -> Self {
        Self { position }
    }

    /// One past the most significant bit of `T`.
    #[inline]
    pub const fn end<T: Word>() -> Self {
        Self::new(T::BITS as i16)
    }
}

/// Signed coordinate into a bitset of width `N`.
///
/// The position is `-1` ("pre-begin"), a bit in `[0, N)`, or `N` ("end").
/// Positions are totally ordered `pre-begin < 0 < 1 < … < N-1 < end`.
///
/// The width is not part of the type: the scans take it from the mask they
/// are given, and [`BitIndex::end`] takes it as a type parameter.
///
/// Preconditions of the scans and of [`increment`]/[`decrement`] are checked
/// with `debug_assert!` only.
///
/// # Examples
/// ```
/// use word_bitset::BitIndex;
///
/// let mask: u8 = 0b0100_0110;
/// let mut i = BitIndex::PRE_BEGIN;
/// i.advance_to_next_set_bit(mask);
/// assert_eq!(i.get(), 1);
/// i.advance_to_next_set_bit(mask);
/// assert_eq!(i.get(), 2);
/// i.advance_to_next_set_bit(mask);
/// assert_eq!(i.get(), 6);
/// i.advance_to_next_set_bit(mask);
/// assert_eq!(i, BitIndex::end::<u8>());
/// ```
///
/// [`increment`]: BitIndex::increment
/// [`decrement`]: BitIndex::decrement
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BitIndex {
    raw: RawIndex,
}

impl BitIndex {
    /// One before the least significant bit.
    pub const PRE_BEGIN: Self = Self::from_raw(RawIndex::PRE_BEGIN);
    /// The least significant bit.
    pub const BEGIN: Self = Self::from_raw(RawIndex::BEGIN);

    /// Wraps a raw position. The value is trusted and not validated.
    #[inline]
    pub const fn new(position: i16) -> Self {
        Self::from_raw(RawIndex::new(position))
    }

    /// Wraps a constant.
    #[inline]
    pub const fn from_raw(raw: RawIndex) -> Self {
        Self { raw }
    }

    /// One past the most significant bit of `T`.
    #[inline]
    pub const fn end<T: Word>() -> Self {
        Self::from_raw(RawIndex::end::<T>())
    }

    /// Returns the raw position.
    #[inline]
    pub const fn get(self) -> i16 {
        self.raw.position
    }

    /// Returns the plain constant form.
    #[inline]
    pub const fn raw(self) -> RawIndex {
        self.raw
    }

    /// Returns `true` if this is one before the least significant bit.
    #[inline]
    pub const fn is_pre_begin(self) -> bool {
        self.raw.position == RawIndex::PRE_BEGIN.position
    }

    /// Returns `true` if this is one past the most significant bit of `T`.
    #[inline]
    pub const fn is_end<T: Word>(self) -> bool {
        self.raw.position == T::BITS as i16
    }

    /// Returns `true` if this denotes an existing bit of `T`.
    #[inline]
    pub const fn is_valid<T: Word>(self) -> bool {
        self.raw.position >= 0 && self.raw.position < T::BITS as i16
    }

    /// Moves one bit towards the most significant end.
    ///
    /// Must not be called on `end`.
    #[inline]
    pub fn increment(&mut self) {
        debug_assert!(
            self.raw.position < MAX_WIDTH,
            "Bit index {} cannot be incremented",
            self.raw.position
        );
        self.raw.position += 1;
    }

    /// Moves one bit towards the least significant end.
    ///
    /// Must not be called on pre-begin.
    #[inline]
    pub fn decrement(&mut self) {
        debug_assert!(
            self.raw.position > RawIndex::PRE_BEGIN.position,
            "Bit index {} cannot be decremented",
            self.raw.position
        );
        self.raw.position -= 1;
    }

    /// Advances to the next bit that is set in `mask`.
    ///
    /// From pre-begin this lands on the least significant set bit. From a
    /// valid position `p` it lands on the first set bit in `(p, N)`. If no
    /// such bit exists the index becomes `end`.
    ///
    /// Must not be called on `end`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::{BitIndex, BitSet};
    ///
    /// let set = BitSet::<u16>::from_mask(0x8001);
    /// let mut i = BitIndex::BEGIN;
    /// i.advance_to_next_set_bit(set);
    /// assert_eq!(i.get(), 15);
    /// ```
    #[inline]
    pub fn advance_to_next_set_bit<T: Word>(&mut self, mask: impl IntoMask<T>) {
        let n = T::BITS as i16;
        debug_assert!(
            self.raw.position >= RawIndex::PRE_BEGIN.position && self.raw.position < n,
            "Next bit scan from bit index {} in a {n} bit mask",
            self.raw.position
        );
        self.raw.position += 1;
        if self.raw.position != n {
            let rest = mask.into_mask().shr(self.raw.position as u32);
            if rest == T::ZERO {
                self.raw.position = n;
            } else {
                self.raw.position += rest.ctz() as i16;
            }
        }
    }

    /// Retreats to the previous bit that is set in `mask`.
    ///
    /// From `end` this lands on the most significant set bit. From a valid
    /// position `p > 0` it lands on the last set bit in `[0, p)`. If no such
    /// bit exists the index becomes pre-begin.
    ///
    /// Must only be called when [`can_retreat`] holds, which excludes bit 0
    /// as well as pre-begin.
    ///
    /// [`can_retreat`]: BitIndex::can_retreat
    #[inline]
    pub fn retreat_to_prev_set_bit<T: Word>(&mut self, mask: impl IntoMask<T>) {
        let n = T::BITS as i16;
        debug_assert!(
            self.can_retreat() && self.raw.position <= n,
            "Previous bit scan from bit index {} in a {n} bit mask",
            self.raw.position
        );
        let rest = mask.into_mask().shl((n - self.raw.position) as u32);
        if rest == T::ZERO {
            self.raw.position = RawIndex::PRE_BEGIN.position;
        } else {
            self.raw.position -= rest.clz() as i16 + 1;
        }
    }

    /// Returns `true` iff the index is neither pre-begin nor bit 0.
    ///
    /// Retreating from bit 0 is not allowed even though its only possible
    /// result is pre-begin; callers handle bit 0 themselves.
    #[inline]
    pub const fn can_retreat(self) -> bool {
        self.raw.position > 0
    }
}

impl From<RawIndex> for BitIndex {
    #[inline]
    fn from(raw: RawIndex) -> Self {
        Self::from_raw(raw)
    }
}

impl From<BitIndex> for RawIndex {
    #[inline]
    fn from(index: BitIndex) -> Self {
        index.raw
    }
}

impl PartialEq<RawIndex> for BitIndex {
    #[inline]
    fn eq(&self, other: &RawIndex) -> bool {
        self.raw == *other
    }
}

impl PartialEq<BitIndex> for RawIndex {
    #[inline]
    fn eq(&self, other: &BitIndex) -> bool {
        *self == other.raw
    }
}

impl PartialOrd<RawIndex> for BitIndex {
    #[inline]
    fn partial_cmp(&self, other: &RawIndex) -> Option<Ordering> {
        Some(self.raw.cmp(other))
    }
}

impl PartialOrd<BitIndex> for RawIndex {
    #[inline]
    fn partial_cmp(&self, other: &BitIndex) -> Option<Ordering> {
        Some(self.cmp(&other.raw))
    }
}

impl AddAssign<i16> for BitIndex {
    #[inline]
    fn add_assign(&mut self, offset: i16) {
        self.raw.position += offset;
    }
}

impl Add<i16> for BitIndex {
    type Output = Self;

    #[inline]
    fn add(mut self, offset: i16) -> Self::Output {
        self += offset;
        self
    }
}

impl SubAssign<i16> for BitIndex {
    #[inline]
    fn sub_assign(&mut self, offset: i16) {
        self.raw.position -= offset;
    }
}

impl Sub<i16> for BitIndex {
    type Output = Self;

    #[inline]
    fn sub(mut self, offset: i16) -> Self::Output {
        self -= offset;
        self
    }
}

impl Display for BitIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw.position)
    }
}
