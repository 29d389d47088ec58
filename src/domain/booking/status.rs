//! Booking status normalization.

use super::{Booking, LooseValue};

/// Normalized status of a booking whose revenue counts.
pub const COMPLETED_STATUS: &str = "completed";

/// Lowercased, trimmed status; empty when absent.
pub fn normalize_booking_status(status: Option<&LooseValue>) -> String {
    match status.filter(|s| s.is_present()) {
        Some(status) => status.render().to_lowercase().trim().to_string(),
        None => String::new(),
    }
}

pub fn is_completed_booking(booking: &Booking) -> bool {
    normalize_booking_status(booking.status.as_ref()) == COMPLETED_STATUS
}
