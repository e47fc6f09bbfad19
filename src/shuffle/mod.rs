pub mod faro;
pub use faro::*;

pub mod random;
pub use random::*;

pub mod shuffle;
pub use shuffle::*;
