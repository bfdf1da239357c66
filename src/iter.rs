use crate::bitset::BitSet;
use crate::index::BitIndex;
use crate::word::Word;
use core::iter::FusedIterator;

/// Iterator over the set bits of a [`BitSet`] as single-bit sets.
///
/// Holds a private copy of the remaining bits. The current position is the
/// least significant remaining bit; an iterator with no remaining bits is
/// the end. Two iterators are equal iff their remaining bits are equal, so
/// every exhausted iterator equals [`Iter::default()`].
///
/// Returned by [`BitSet::iter()`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Iter<T: Word> {
    mask: T,
}

impl<T: Word> Iter<T> {
    /// Creates an iterator over the set bits of `mask`.
    #[inline]
    pub const fn new(mask: T) -> Self {
        Self { mask }
    }

    /// Returns the bit the iterator is positioned on without advancing.
    ///
    /// Returns the empty set at the end.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut iter = BitSet::<u8>::from_mask(0b0110).iter();
    /// assert_eq!(iter.current().mask(), 0b0010);
    /// iter.advance();
    /// assert_eq!(iter.current().mask(), 0b0100);
    /// iter.advance();
    /// assert!(iter.current().none());
    /// ```
    #[inline]
    pub fn current(&self) -> BitSet<T> {
        BitSet::from_mask(self.mask & self.mask.wrapping_neg())
    }

    /// Drops the bit the iterator is positioned on.
    ///
    /// Has no effect at the end.
    #[inline]
    pub fn advance(&mut self) {
        self.mask &= self.mask.wrapping_sub(T::ONE);
    }

    /// Returns `true` if no bits remain.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.mask == T::ZERO
    }

    /// Returns the bits not yet yielded.
    #[inline]
    pub fn remaining(&self) -> BitSet<T> {
        BitSet::from_mask(self.mask)
    }
}

impl<T: Word> Iterator for Iter<T> {
    type Item = BitSet<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_end() {
            return None;
        }
        let bit = self.current();
        self.advance();
        Some(bit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.mask.popcount() as usize;
        (len, Some(len))
    }
}

impl<T: Word> ExactSizeIterator for Iter<T> {}

impl<T: Word> FusedIterator for Iter<T> {}

/// Iterator over the indices of the set bits of a [`BitSet`].
///
/// Yields lowest first from the front and highest first from the back.
///
/// Returned by [`BitSet::indices()`].
#[derive(Clone, Copy, Debug)]
pub struct Indices<T: Word> {
    mask: T,
}

impl<T: Word> Indices<T> {
    pub(crate) const fn new(mask: T) -> Self {
        Self { mask }
    }
}

impl<T: Word> Iterator for Indices<T> {
    type Item = BitIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == T::ZERO {
            return None;
        }
        let index = BitSet::<T>::mask_to_index(self.mask);
        self.mask &= self.mask.wrapping_sub(T::ONE); // unset LSB
        Some(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.mask.popcount() as usize;
        (len, Some(len))
    }
}

impl<T: Word> DoubleEndedIterator for Indices<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.mask == T::ZERO {
            return None;
        }
        let log = self.mask.log2();
        self.mask ^= T::ONE.shl(log as u32); // unset MSB
        Some(BitIndex::new(log))
    }
}

impl<T: Word> ExactSizeIterator for Indices<T> {}

impl<T: Word> FusedIterator for Indices<T> {}
