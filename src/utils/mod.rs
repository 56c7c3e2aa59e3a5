pub mod prompts;
pub mod text;

pub use prompts::*;
pub use text::*;
