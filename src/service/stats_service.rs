use crate::model::booking::{Booking, Source};
use crate::model::stats::{DailyAggregate, Kpis};
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;

/// Group bookings by calendar date. Dates with no bookings are absent;
/// downstream consumers (the grid builder, trend charts) treat them as
/// zero. BTreeMap keeps the output ordered and deterministic.
pub fn aggregate_by_date(bookings: &[Booking]) -> BTreeMap<NaiveDate, DailyAggregate> {
    let mut totals: BTreeMap<NaiveDate, DailyAggregate> = BTreeMap::new();
    for b in bookings {
        totals.entry(b.date).or_default().add(b.covers);
    }
    totals
}

/// Headline totals for the KPI row. An empty booking set yields zeroed
/// KPIs rather than dividing by zero.
pub fn compute_kpis(bookings: &[Booking]) -> Kpis {
    if bookings.is_empty() {
        return Kpis::default();
    }
    let total_covers: u64 = bookings.iter().map(|b| u64::from(b.covers)).sum();
    let total_bookings = bookings.len();
    let walk_ins = bookings.iter().filter(|b| b.source == Source::WalkIn).count();
    Kpis {
        total_covers,
        total_bookings,
        avg_party_size: total_covers as f64 / total_bookings as f64,
        walk_in_share_pct: walk_ins as f64 / total_bookings as f64 * 100.0,
    }
}

/// Booking counts per source label (the walk-in vs reservation mix).
pub fn bookings_by_source(bookings: &[Booking]) -> BTreeMap<String, u32> {
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for b in bookings {
        *counts.entry(b.source.label().to_string()).or_default() += 1;
    }
    counts
}

/// Total covers per time slot. Bookings without a time slot are skipped.
pub fn covers_by_time(bookings: &[Booking]) -> BTreeMap<NaiveTime, u32> {
    let mut totals: BTreeMap<NaiveTime, u32> = BTreeMap::new();
    for b in bookings {
        if let Some(time) = b.time {
            *totals.entry(time).or_default() += b.covers;
        }
    }
    totals
}

/// Booking counts per (time slot, source label).
pub fn demand_by_time_and_source(
    bookings: &[Booking],
) -> BTreeMap<NaiveTime, BTreeMap<String, u32>> {
    let mut counts: BTreeMap<NaiveTime, BTreeMap<String, u32>> = BTreeMap::new();
    for b in bookings {
        if let Some(time) = b.time {
            *counts
                .entry(time)
                .or_default()
                .entry(b.source.label().to_string())
                .or_default() += 1;
        }
    }
    counts
}

/// Mean party size per time slot, advance reservations only.
pub fn avg_reservation_party_by_time(bookings: &[Booking]) -> BTreeMap<NaiveTime, f64> {
    // (covers sum, booking count) per slot, then divide.
    let mut sums: BTreeMap<NaiveTime, (u32, u32)> = BTreeMap::new();
    for b in bookings {
        if b.source != Source::Reservation {
            continue;
        }
        if let Some(time) = b.time {
            let entry = sums.entry(time).or_default();
            entry.0 += b.covers;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(time, (covers, count))| (time, f64::from(covers) / f64::from(count)))
        .collect()
}

/// Time slot with the highest covers total. Ties go to the earliest slot.
pub fn busiest_time(bookings: &[Booking]) -> Option<(NaiveTime, u32)> {
    covers_by_time(bookings)
        .into_iter()
        .reduce(|best, cur| if cur.1 > best.1 { cur } else { best })
}

/// Date with the highest covers total. Ties go to the earliest date.
pub fn busiest_day(bookings: &[Booking]) -> Option<(NaiveDate, u32)> {
    aggregate_by_date(bookings)
        .into_iter()
        .map(|(date, agg)| (date, agg.covers))
        .reduce(|best, cur| if cur.1 > best.1 { cur } else { best })
}
