//! todoprogress - employee TODO list progress from a REST API
//!
//! Looks up an employee by id, fetches their todos, and reports how many are
//! completed along with the completed titles.
//!
//! # Example
//!
//! ```ignore
//! use todoprogress::{ApiClient, EmployeeId, ProgressReporter};
//!
//! let client = ApiClient::new(todoprogress::DEFAULT_BASE_URL, None)?;
//! let report = ProgressReporter::new(client)
//!     .report_progress(EmployeeId::new(1)?)
//!     .await?;
//! println!("{}", report);
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod report;
pub mod reporter;

pub use client::ApiClient;
pub use domain::{Employee, EmployeeId, TodoItem};
pub use error::ReportError;
pub use report::ProgressReport;
pub use reporter::ProgressReporter;

/// Default REST API endpoint
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
