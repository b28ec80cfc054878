pub mod cache;
pub mod calendar;
pub mod error;
pub mod model;
pub mod service;

pub use cache::{DatasetCache, SourceId};
pub use calendar::{build_month_grid, days_in_month};
pub use error::GridError;
pub use model::booking::{Booking, Source};
pub use model::grid::{CalendarCell, Metric, MonthGrid, WEEKDAY_LABELS};
pub use model::stats::{DailyAggregate, Kpis};
pub use service::chat_service::{
    AnswerProvider, ChatSession, ChatTurn, ContextSummary, DailyContext,
};
pub use service::stats_service::{
    aggregate_by_date, avg_reservation_party_by_time, bookings_by_source, busiest_day,
    busiest_time, compute_kpis, covers_by_time, demand_by_time_and_source,
};
