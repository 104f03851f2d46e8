//! Page sections, top to bottom.

pub mod discover;
pub mod episodes;
pub mod explore;
pub mod header;
pub mod hero;
pub mod trending;
