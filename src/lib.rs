//! `cadastro` - patient/plan registration records over a shared spreadsheet.
//!
//! This crate provides a small record gateway that appends registration
//! records submitted by a web form to a shared Google Sheets spreadsheet and
//! lists them back, plus a terminal form client that speaks the same HTTP
//! contract. Column layout is never fixed in code: the sheet's own header
//! row decides, at append time, which value lands in which column.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::inconsistent_struct_constructor,
    clippy::must_use_candidate,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,       // Error conditions documented per module
    clippy::missing_panics_doc,
)]

/// Form client - gateway contract, HTTP implementation, and text rendering
pub mod client;
/// Configuration management loaded once at startup
pub mod config;
/// Core business logic - record validation and header-driven column mapping
pub mod core;
/// Unified error types and result handling
pub mod errors;
/// Record gateway operations against the tabular store
pub mod gateway;
/// HTTP surface - router and request handlers
pub mod http;
/// Remote tabular store - trait, Google Sheets client, authentication
pub mod store;

#[cfg(test)]
pub mod test_utils;
