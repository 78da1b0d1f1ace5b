mod day_scheduler;
mod segment;
mod time_sheet;
mod work_schedule;

pub use day_scheduler::*;
pub use segment::*;
pub use time_sheet::*;
pub use work_schedule::*;
