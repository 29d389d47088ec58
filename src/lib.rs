//! MindCare - achievement tracking and admin backend
//!
//! This crate derives wellness achievements from the activity logs the
//! MindCare apps record, reports booking revenue for administrators, and
//! serves the therapy program settings editor.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
