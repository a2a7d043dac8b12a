pub mod algorithms;
pub mod attributes;
pub mod core;
pub mod error;
pub mod parse;
pub mod render;
pub mod storage;
pub mod traits;

pub use algorithms::*;
pub use attributes::*;
pub use crate::core::*;
pub use error::*;
pub use parse::*;
pub use render::*;
pub use storage::*;
pub use traits::*;
