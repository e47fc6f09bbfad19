pub mod restore;
pub use restore::*;

pub mod shuffler;
pub use shuffler::*;
