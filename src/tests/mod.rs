//! integrated tests
pub mod toolkit;

mod dataset;
