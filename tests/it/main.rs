//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary, reducing linking
//! overhead from 3x to 1x.
//!
//! Structure:
//! - chart: item store tests (store ops, history)
//! - integration: multi-component workflow and interaction tests
//! - unit: single-component unit tests

mod helpers;

mod chart;
mod integration;
