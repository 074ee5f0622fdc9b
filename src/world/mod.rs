pub mod classifier;
pub mod genres;
pub mod regions;

pub use classifier::*;
pub use genres::*;
pub use regions::*;
