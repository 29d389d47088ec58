//! HTTP adapter for admin reports.

mod dto;
mod handlers;
mod routes;

pub use dto::{MonthlyRevenueRequest, MonthlyRevenueResponse};
pub use handlers::ReportHandlers;
pub use routes::report_routes;
