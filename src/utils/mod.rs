pub mod date;
pub mod fs;
pub mod path;
pub mod table;
pub mod time;

pub use time::{DayTime, military_time};
