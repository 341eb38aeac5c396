//! Utility functions shared by the service layer.
//!
//! Currently holds the metric/imperial conversions used to derive display values
//! on read and to normalise imperial input on write.

pub mod units;
