//! Integration tests for logfacade
//!
//! These tests exercise the public surface the way a host program would.

pub mod bridge_tests;
pub mod fatal_tests;
pub mod global_tests;
