//! LoanVista API adapters. Implement LoanApiPort.
//!
//! Provides the reqwest-backed client and a mock for offline runs and tests.

pub mod disposition;
pub mod http_adapter;
pub mod mock_adapter;

pub use disposition::{DEFAULT_REPORT_FILENAME, report_filename};
pub use http_adapter::HttpLoanApi;
pub use mock_adapter::{MockFailure, MockLoanApi};
