//! MonthlyRevenue - Query handler for the admin revenue report.

use crate::domain::booking::{Booking, MonthlyRevenue};
use crate::domain::foundation::{DomainError, ValidationError};

/// Bookings to report on, with a zero-based month.
#[derive(Debug, Clone)]
pub struct MonthlyRevenueQuery {
    pub bookings: Vec<Booking>,
    pub month: u32,
    pub year: i32,
}

/// Computes revenue figures; bookings are supplied by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyRevenueHandler;

impl MonthlyRevenueHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: MonthlyRevenueQuery) -> Result<MonthlyRevenue, DomainError> {
        if query.month > 11 {
            return Err(ValidationError::out_of_range("month", 0, 11, i64::from(query.month)).into());
        }

        let report = MonthlyRevenue::for_month(&query.bookings, query.month, query.year);
        tracing::debug!(
            month = report.month,
            year = report.year,
            bookings = report.booking_count,
            "Computed monthly revenue"
        );
        Ok(report)
    }
}
