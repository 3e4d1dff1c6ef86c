mod contract;
mod pool;
mod position;
mod token;
mod version;

pub use contract::*;
pub use pool::*;
pub use position::*;
pub use token::*;
pub use version::*;
