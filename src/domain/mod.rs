//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `achievement` - Achievement catalog, user progress and metric derivation
//! - `activity` - Client activity logs and per-user counts
//! - `booking` - Pure booking normalization and revenue helpers
//! - `therapy` - Therapy programs and their editable settings

pub mod achievement;
pub mod activity;
pub mod booking;
pub mod foundation;
pub mod therapy;
