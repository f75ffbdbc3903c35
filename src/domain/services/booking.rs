use chrono::NaiveDate;

use crate::domain::models::order::OrderStatus;
use crate::error::AppError;

pub const MIN_GUESTS: i32 = 1;
pub const MAX_GUESTS: i32 = 10;

pub fn validate_guests_count(guests_count: i32) -> Result<(), AppError> {
    if !(MIN_GUESTS..=MAX_GUESTS).contains(&guests_count) {
        return Err(AppError::Validation(format!(
            "Guest count must be between {} and {}",
            MIN_GUESTS, MAX_GUESTS
        )));
    }
    Ok(())
}

pub fn validate_start_date(start_date: NaiveDate, today: NaiveDate) -> Result<(), AppError> {
    if start_date < today {
        return Err(AppError::Validation("Start date cannot be in the past".into()));
    }
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
pub enum CancelOutcome {
    Cancelled,
    AlreadyCancelled,
}

/// Cancellation state machine: COMPLETED blocks cancellation outright,
/// CANCELLED is an idempotent no-op, everything else transitions to
/// CANCELLED. The admin status-update path is deliberately not routed
/// through here and may overwrite any status.
pub fn decide_cancellation(status: OrderStatus) -> Result<CancelOutcome, AppError> {
    match status {
        OrderStatus::Completed => {
            Err(AppError::Conflict("A completed order cannot be cancelled".into()))
        }
        OrderStatus::Cancelled => Ok(CancelOutcome::AlreadyCancelled),
        OrderStatus::Pending | OrderStatus::Confirmed => Ok(CancelOutcome::Cancelled),
    }
}
