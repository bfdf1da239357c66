//! A single-word typed bitset with signed bit indices, written in pure Rust.
//! `no_std`, no `unsafe`, no heap except for the optional string conversion.
//!
//! [`BitSet<T>`] stores a set of bit positions in one unsigned word `T`
//! (`u8`, `u16`, `u32`, `u64` or `u128`). [`BitIndex`] is a signed
//! coordinate into such a word that, besides the valid positions `[0, N)`,
//! can be one before the first bit ("pre-begin", `-1`) or one past the last
//! bit ("end", `N`). Scans between set bits are a single count-zeros
//! instruction each.
//!
//! # Examples
//! ```
//! use word_bitset::{BitIndex, BitSet};
//!
//! let set = BitSet::<u8>::from_mask(0b0110_0010);
//!
//! // Walk the set bits downwards from the end.
//! let mut i = BitIndex::end::<u8>();
//! let mut seen = Vec::new();
//! while i.can_retreat() {
//!     i.retreat_to_prev_set_bit(set);
//!     if i.is_pre_begin() {
//!         break;
//!     }
//!     seen.push(i.get());
//! }
//! assert_eq!(seen, [6, 5, 1]);
//!
//! // Or iterate over single-bit sets, lowest first.
//! let union: BitSet<u8> = set.iter().collect();
//! assert_eq!(union, set);
//! ```
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - Const construction through [`RawBitSet`] and [`RawIndex`]
//! - Forward and backward set-bit scans on [`BitIndex`]
//! - Iteration over set bits as single-bit sets ([`Iter`]) or as indices
//!   ([`Indices`])
//! - Support for bitwise ops:
//!   - `&`, `|`, `^`, `!`
//!   - `<<`, `>>`
//!   - `&=`, `|=`, `^=`, `<<=`, `>>=`
//! - Wrapping arithmetic (`+`, `-`, `increment`, `decrement`) to treat a set
//!   as a counter
//!
//! # Cargo features
//!
//! - `alloc` (default): [`BitSet::to_string_with`].
//! - `portable-bitscan`: count trailing/leading zeros, log2 and population
//!   count are computed with plain shifts and masks instead of the target's
//!   intrinsics.
//!
//! # Preconditions
//!
//! Misuse such as scanning forward from `end` is a contract violation, not a
//! recoverable error. It is caught by `debug_assert!` in debug builds and
//! unchecked otherwise.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod bitset;
mod index;
mod iter;
#[cfg_attr(not(feature = "portable-bitscan"), allow(dead_code))]
mod portable;
mod word;

pub use bitset::{BitSet, RawBitSet};
pub use index::{BitIndex, RawIndex};
pub use iter::{Indices, Iter};
pub use word::{IntoMask, Word};
