mod clock;
mod config;
mod project;

pub mod allocation;
pub mod json_input;
pub mod scheduler;

pub use clock::*;
pub use config::*;
pub use project::*;
