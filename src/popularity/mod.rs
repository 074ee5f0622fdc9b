pub mod color;
pub mod factors;
pub mod generator;
pub mod insights;
pub mod trend;


pub use generator::*;
pub use insights::*;
