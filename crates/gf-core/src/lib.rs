//! gf-core: shared foundation for gasflow.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - units (uom quantities + lab-unit constructors)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
