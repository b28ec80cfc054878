use crate::model::stats::DailyAggregate;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Column labels, Monday-first. Weekday index 0 = Monday .. 6 = Sunday.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Which per-day total a view wants to display. Only the in-cell label
/// depends on this; the raw matrices are available for both.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Bookings,
    Covers,
}

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Bookings => "Bookings",
            Metric::Covers => "Covers",
        }
    }
}

/// One slot of the month grid. `date == None` marks a padding cell:
/// inside a displayed week row but outside the target month.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: Option<NaiveDate>,
    pub bookings: u32,
    pub covers: u32,
    /// In-cell annotation: day of month plus the selected metric value.
    pub label: String,
    /// Tooltip text: full date plus both totals.
    pub hover: String,
}

impl CalendarCell {
    pub(crate) fn populated(date: NaiveDate, agg: DailyAggregate, metric: Metric) -> Self {
        let shown = match metric {
            Metric::Bookings => agg.bookings,
            Metric::Covers => agg.covers,
        };
        Self {
            date: Some(date),
            bookings: agg.bookings,
            covers: agg.covers,
            label: format!("{}\n{}", date.day(), shown),
            hover: format!(
                "{}\nBookings: {}\nCovers: {}",
                date.format("%Y-%m-%d"),
                agg.bookings,
                agg.covers
            ),
        }
    }

    pub fn is_padding(&self) -> bool {
        self.date.is_none()
    }

    pub fn value(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Bookings => self.bookings,
            Metric::Covers => self.covers,
        }
    }
}

/// Dense week-row x weekday grid covering one calendar month, shaped for
/// direct rendering (heatmap values, in-cell labels, hover text).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub metric: Metric,
    rows: Vec<[CalendarCell; 7]>,
}

impl MonthGrid {
    pub(crate) fn from_rows(
        year: i32,
        month: u32,
        metric: Metric,
        rows: Vec<[CalendarCell; 7]>,
    ) -> Self {
        Self {
            year,
            month,
            metric,
            rows,
        }
    }

    pub fn week_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[[CalendarCell; 7]] {
        &self.rows
    }

    pub fn cell(&self, week_row: usize, weekday: usize) -> Option<&CalendarCell> {
        self.rows.get(week_row)?.get(weekday)
    }

    pub fn cell_for_date(&self, date: NaiveDate) -> Option<&CalendarCell> {
        self.populated_cells().find(|c| c.date == Some(date))
    }

    pub fn populated_cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.rows.iter().flatten().filter(|c| !c.is_padding())
    }

    /// Raw values in grid shape, for heatmap coloring.
    pub fn matrix(&self, metric: Metric) -> Vec<Vec<u32>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.value(metric)).collect())
            .collect()
    }

    pub fn label_matrix(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.label.clone()).collect())
            .collect()
    }

    pub fn hover_matrix(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.hover.clone()).collect())
            .collect()
    }

    /// Row labels for display, 1-indexed: "Week 1", "Week 2", ...
    pub fn week_row_labels(&self) -> Vec<String> {
        (0..self.rows.len())
            .map(|i| format!("Week {}", i + 1))
            .collect()
    }
}
