pub mod analysis;
pub mod responses;

pub use analysis::*;
pub use responses::*;
