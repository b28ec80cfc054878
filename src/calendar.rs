use crate::error::GridError;
use crate::model::booking::Booking;
use crate::model::grid::{CalendarCell, Metric, MonthGrid};
use crate::service::stats_service::aggregate_by_date;
use chrono::{Datelike, NaiveDate};

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, GridError> {
    if !(1..=12).contains(&month) {
        return Err(GridError::InvalidMonth { month });
    }
    if year <= 0 {
        return Err(GridError::InvalidYear { year });
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(GridError::InvalidYear { year })
}

/// Length of a month in the proleptic Gregorian calendar, leap years
/// included: first of the next month minus one day.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, GridError> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(GridError::InvalidYear { year })?;
    Ok((next - first).num_days() as u32)
}

/// Turn a sparse set of bookings into a dense month grid with per-day
/// totals, suitable for calendar-heatmap rendering.
///
/// Cells are addressed by (week_row, weekday) with Monday in column 0.
/// Day 1 lands in the column of its actual weekday; the columns before
/// it in week row 0 stay padding, as do any columns after the last day
/// in the final row. Bookings dated outside the target month are
/// ignored. The transform is pure: same inputs, same grid.
pub fn build_month_grid(
    bookings: &[Booking],
    year: i32,
    month: u32,
    metric: Metric,
) -> Result<MonthGrid, GridError> {
    let first = first_of_month(year, month)?;
    let days = days_in_month(year, month)?;

    let totals = aggregate_by_date(bookings);

    let offset = first.weekday().num_days_from_monday() as usize;
    let week_rows = (days as usize + offset).div_ceil(7);
    let mut rows: Vec<[CalendarCell; 7]> = vec![Default::default(); week_rows];

    for day in 1..=days {
        // Cannot fail: day is within the month length computed above.
        let date = first
            .checked_add_days(chrono::Days::new(u64::from(day - 1)))
            .ok_or(GridError::InvalidYear { year })?;
        let agg = totals.get(&date).copied().unwrap_or_default();
        let week_row = (day as usize - 1 + offset) / 7;
        let weekday = date.weekday().num_days_from_monday() as usize;
        rows[week_row][weekday] = CalendarCell::populated(date, agg, metric);
    }

    Ok(MonthGrid::from_rows(year, month, metric, rows))
}
