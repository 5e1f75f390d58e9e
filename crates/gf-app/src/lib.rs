//! gf-app: service layer shared by the gasflow front-ends.
//!
//! Front-ends collect values, hand them to this crate and display what comes
//! back; they never call the calculators directly.

pub mod error;
pub mod form;
pub mod report;
pub mod scenario_service;

pub use error::{AppError, AppResult};
pub use form::{InputForm, lookup_gas};
pub use report::{FlowReport, ReportLine};
pub use scenario_service::BoundsSummary;
