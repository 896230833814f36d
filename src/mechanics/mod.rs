pub mod boost;
pub mod day;
pub mod stoch;

pub use boost::*;
pub use day::*;
pub use stoch::*;
