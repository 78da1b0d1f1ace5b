mod config_file;
mod project_file;

pub use config_file::*;
pub use project_file::*;
