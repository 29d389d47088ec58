//! HTTP handlers for the revenue report.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::handle_domain_error;
use crate::application::handlers::{MonthlyRevenueHandler, MonthlyRevenueQuery};

use super::dto::{MonthlyRevenueRequest, MonthlyRevenueResponse};

#[derive(Clone)]
pub struct ReportHandlers {
    revenue_handler: Arc<MonthlyRevenueHandler>,
}

impl ReportHandlers {
    pub fn new(revenue_handler: Arc<MonthlyRevenueHandler>) -> Self {
        Self { revenue_handler }
    }
}

/// POST /api/admin/reports/revenue - Revenue for one month
pub async fn monthly_revenue(
    State(handlers): State<ReportHandlers>,
    Json(req): Json<MonthlyRevenueRequest>,
) -> Response {
    let query = MonthlyRevenueQuery {
        bookings: req.bookings,
        month: req.month,
        year: req.year,
    };

    match handlers.revenue_handler.handle(query) {
        Ok(report) => {
            (StatusCode::OK, Json(MonthlyRevenueResponse::from(report))).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}
