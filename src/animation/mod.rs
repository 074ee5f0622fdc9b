pub mod compositor;
pub mod filler;
pub mod flow;
pub mod pulse;

pub use compositor::*;
