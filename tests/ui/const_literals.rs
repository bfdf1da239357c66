use word_bitset::{BitIndex, BitSet, RawBitSet, RawIndex};

const READ: RawBitSet<u8> = RawBitSet::<u8>::single(RawIndex::new(0));
const WRITE: RawBitSet<u8> = RawBitSet::<u8>::single(RawIndex::new(1));
const EXEC: RawBitSet<u8> = RawBitSet::<u8>::single(RawIndex::new(2));
const READ_WRITE: RawBitSet<u8> = READ.union(WRITE);
const NOT_EXEC: RawBitSet<u8> = EXEC.complement();

const LAST: RawIndex = RawIndex::new(63);
const END: BitIndex = BitIndex::end::<u64>();

static MODES: [BitSet<u8>; 3] = [
    BitSet::from_raw(READ),
    BitSet::from_raw(READ_WRITE),
    BitSet::full(),
];

fn main() {
    assert!(READ_WRITE.const_eq(RawBitSet::new(0b011)));
    assert_eq!(NOT_EXEC.bitmask, 0b1111_1011);

    assert!(MODES[1].test(WRITE));
    assert!(!MODES[1].test(EXEC));
    assert_eq!(MODES[1] | EXEC, MODES[2] & RawBitSet::new(0b111));

    let mut i = BitIndex::from(LAST);
    i.increment();
    assert_eq!(i, END);
}
