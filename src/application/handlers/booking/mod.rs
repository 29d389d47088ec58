//! Booking report handlers.

mod monthly_revenue;

pub use monthly_revenue::{MonthlyRevenueHandler, MonthlyRevenueQuery};
