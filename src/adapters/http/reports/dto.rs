//! HTTP DTOs for the revenue report.

use serde::{Deserialize, Serialize};

use crate::domain::booking::{Booking, MonthlyRevenue};

/// Bookings to report on. `month` is zero-based (0 = January).
#[derive(Debug, Clone, Deserialize)]
pub struct MonthlyRevenueRequest {
    #[serde(default)]
    pub bookings: Vec<Booking>,
    pub month: u32,
    pub year: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyRevenueResponse {
    pub month: u32,
    pub year: i32,
    pub booking_count: usize,
    pub completed_count: usize,
    pub revenue: f64,
}

impl From<MonthlyRevenue> for MonthlyRevenueResponse {
    fn from(report: MonthlyRevenue) -> Self {
        Self {
            month: report.month,
            year: report.year,
            booking_count: report.booking_count,
            completed_count: report.completed_count,
            revenue: report.revenue,
        }
    }
}
