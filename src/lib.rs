//! loanvista: terminal client for the LoanVista loan-eligibility service, Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
