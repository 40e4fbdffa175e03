//! Word dating from the historical word-year table.

pub mod time_table;

pub use time_table::{DEFAULT_DELIMITER, TimeTable};
