//! Data models module
//!
//! Defines the ride entry written to a log file and the option lists
//! riders and bikes are checked against.

pub mod options;
pub mod ride;

pub use options::{OptionKind, OptionList};
pub use ride::{parse_date, Distance, RideEntry, HEADER};
