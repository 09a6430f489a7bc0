//! Shared test utilities for the pipeline-bootstrap workspace.
//!
//! This crate provides standardised on-disk fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`layout`]: [`TestLayout`](layout::TestLayout) builder for installed application trees

pub mod layout;
