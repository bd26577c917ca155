//! Structured logging for Lexle
//!
//! Binaries call [`init`] once with a [`Profile`]. Library code reports
//! operations through the `log_op_*` macros so every line carries the same
//! `op` / `event` fields; the importer uses `log_op_skip!` for each file or
//! word it had to leave behind.
//!
//! ```rust
//! use lexle_core::logging_facility::{init, Profile};
//!
//! init(Profile::Production);
//! ```
//!
//! Tests install [`init_test_capture`] instead and assert on the recorded
//! events.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
