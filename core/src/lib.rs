//! Batch SET orchestration.
//!
//! [`batch::perform_batch`] wires the real SNMP adapter and the CSV log into a
//! [`runner::BatchRunner`]. Tests drive the runner directly with fakes.

pub mod batch;
pub mod input;
pub mod log;
pub mod runner;
