pub mod booking;
pub mod grid;
pub mod stats;

pub use booking::{Booking, Source};
pub use grid::{CalendarCell, Metric, MonthGrid};
pub use stats::{DailyAggregate, Kpis};
