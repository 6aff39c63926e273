/*! Filtering utilities

Record-level predicates used by the filter stage.

Filters implement [filter::Filter]: a pure, stateless yes/no decision on
a borrowed item. The side table answering the question for dump records
(the allow-list) lives in [crate::tables] and implements the trait there.
! */
mod filter;

pub use filter::Filter;
