use word_bitset::{BitIndex, BitSet};

// Prints every subset of the set bits of `universe`, using the set as a
// counter over the masks of its width.
fn subsets(universe: BitSet<u8>) {
    let mut candidate = BitSet::<u8>::empty();
    loop {
        if candidate & universe == candidate {
            let members: Vec<i16> = candidate.indices().map(BitIndex::get).collect();
            println!("{candidate} {members:?}");
        }
        candidate.increment();
        if candidate.none() {
            break;
        }
    }
}

fn main() {
    subsets(BitSet::from_mask(0b0100_0110));
}
