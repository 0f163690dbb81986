//! Generic structures with no specific tie to the rest of the library.

pub mod random;
