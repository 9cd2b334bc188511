//! Infrastructure adapters. Implement outbound ports.
//!
//! LoanVista HTTP API, report directory, terminal UI. Map errors to DomainError.

pub mod api;
pub mod persistence;
pub mod ui;
