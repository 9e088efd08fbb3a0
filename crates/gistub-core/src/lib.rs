//! Core infrastructure for gistub.
//!
//! This crate provides engine-agnostic infrastructure:
//! - Structured diagnostics collected during stub generation
//! - Text utilities for emitted stub bodies
//! - JSON run-report types for CLI responses

pub mod diagnostics;
pub mod report;
pub mod text;
