use thiserror::Error;

/// Precondition violations on the month/year arguments of the grid builder.
/// These are caller errors and are never retried.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid month: {month} (expected 1-12)")]
    InvalidMonth { month: u32 },
    #[error("invalid year: {year} (expected a positive year)")]
    InvalidYear { year: i32 },
}
