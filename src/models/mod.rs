pub mod segment;
pub mod summary;

pub use segment::*;
pub use summary::*;
