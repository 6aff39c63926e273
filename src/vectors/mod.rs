/*! Sparse frequency vectors.

The wire format shared by every stage: `<lemma,count>` pairs joined by
commas. [LemmaCounts] is the integer form produced per document,
[LemmaWeights] the real-valued form used for probability output, and
[GroupIndex] the per-group accumulator the inversion stage folds vectors
into.

Encoding cannot represent lemmas containing `<` or `>`; those entries are
dropped silently. Decoding is a permissive scan that picks well-formed
pairs out of arbitrary text and never fails.
!*/
mod counts;
mod group;
mod weights;

pub use counts::LemmaCounts;
pub use group::GroupIndex;
pub use weights::LemmaWeights;
