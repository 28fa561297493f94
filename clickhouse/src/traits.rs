mod column;
pub use column::*;
