//! Internal test modules - whitebox tests with crate access
//!
//! Harness-driven acceptance tests run the real key and mouse dispatch
//! against a TestBackend terminal.
