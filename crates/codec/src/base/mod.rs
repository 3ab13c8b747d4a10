//! The four-symbol base alphabet and index-backed sequences over it.

mod nucleotide;
mod sequence;

pub use nucleotide::Nucleotide;
pub use sequence::DnaSequence;
