mod descriptor;
mod member;

pub use descriptor::*;
pub use member::*;
