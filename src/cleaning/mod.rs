/*! Text cleaning.

Holds the markup noise stripper that runs before lemmatization.
!*/
mod noise;

pub use noise::strip;
