mod time_span;
pub use time_span::*;
mod time_stamp;
pub use time_stamp::*;
mod week_day;
pub use week_day::*;
mod working_duration;
pub use working_duration::*;
