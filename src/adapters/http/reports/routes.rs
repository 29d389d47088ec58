//! HTTP routes for admin reports.

use axum::{routing::post, Router};

use super::handlers::{monthly_revenue, ReportHandlers};

/// Creates the report router, mounted under `/api/admin`.
pub fn report_routes(handlers: ReportHandlers) -> Router {
    Router::new()
        .route("/reports/revenue", post(monthly_revenue))
        .with_state(handlers)
}
