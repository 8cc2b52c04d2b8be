mod model;
mod ops;
mod replay;

pub use model::*;
pub use ops::*;
pub use replay::*;
