use serde::{Deserialize, Serialize};

/// Per-day totals derived from the booking set. Recomputed on demand,
/// never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailyAggregate {
    /// Number of booking records on the day, regardless of party size.
    pub bookings: u32,
    /// Sum of party sizes on the day.
    pub covers: u32,
}

impl DailyAggregate {
    pub fn add(&mut self, covers: u32) {
        self.bookings += 1;
        self.covers += covers;
    }
}

/// The dashboard KPI row: headline totals over the (already filtered)
/// booking set.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Kpis {
    pub total_covers: u64,
    pub total_bookings: usize,
    pub avg_party_size: f64,
    pub walk_in_share_pct: f64,
}
