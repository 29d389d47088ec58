//! Booking records and the helpers the admin dashboard uses to report on them.
//!
//! Bookings are owned by an external system and arrive in several shapes:
//! amounts as numbers or currency strings, dates under one of three field
//! names, free-text statuses. Every helper here is total and never fails;
//! bad input resolves to 0, `false`, `None` or an empty string.

mod amount;
mod date;
mod revenue;
mod status;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use amount::parse_booking_amount;
pub use date::{get_booking_date, is_booking_in_month, is_valid_booking_date, is_valid_booking_date_at, parse_booking_date};
pub use revenue::{calculate_revenue_for_bookings, get_bookings_for_month, MonthlyRevenue};
pub use status::{is_completed_booking, normalize_booking_status, COMPLETED_STATUS};

/// A loosely typed field value as found in booking records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    Number(f64),
    Text(String),
    Other(Value),
}

impl LooseValue {
    /// Whether the value counts as present: non-zero numbers, non-empty text.
    pub fn is_present(&self) -> bool {
        match self {
            LooseValue::Number(n) => *n != 0.0 && !n.is_nan(),
            LooseValue::Text(s) => !s.is_empty(),
            LooseValue::Other(Value::Bool(b)) => *b,
            LooseValue::Other(Value::Null) => false,
            LooseValue::Other(_) => true,
        }
    }

    /// Textual rendering used before cleaning amounts and statuses.
    pub fn render(&self) -> String {
        match self {
            LooseValue::Number(n) => n.to_string(),
            LooseValue::Text(s) => s.clone(),
            LooseValue::Other(Value::String(s)) => s.clone(),
            LooseValue::Other(v) => v.to_string(),
        }
    }
}

impl From<f64> for LooseValue {
    fn from(n: f64) -> Self {
        LooseValue::Number(n)
    }
}

impl From<&str> for LooseValue {
    fn from(s: &str) -> Self {
        LooseValue::Text(s.to_string())
    }
}

/// Read-only view over an externally owned booking record.
///
/// Unknown fields are kept in `extra` so filtered records can be echoed back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<LooseValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<LooseValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<LooseValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<LooseValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LooseValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Booking {
    pub fn with_amount(mut self, amount: impl Into<LooseValue>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<LooseValue>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<LooseValue>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// First present date source among `date`, `createdAt`, `timestamp`.
    pub fn date_source(&self) -> Option<&LooseValue> {
        [&self.date, &self.created_at, &self.timestamp]
            .into_iter()
            .flatten()
            .find(|value| value.is_present())
    }
}
