pub mod classification;
pub mod listing;
pub mod search;

pub use classification::*;
pub use listing::*;
pub use search::*;
