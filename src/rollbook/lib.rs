//! # Rollbook Architecture
//!
//! Rollbook is a **UI-agnostic student record library** with a CLI client on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders table/card views               │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, single entry point for every UI action      │
//! │  - Resolves selectors (id or roll number) to record ids     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create/update/delete: validate, then commit              │
//! │  - list: query engine + stats; import/export                │
//! └─────────────────────────────────────────────────────────────┘
//!             │                    │                    │
//!             ▼                    ▼                    ▼
//!     validation.rs           query.rs             store/
//!     (pure checks)      (pure filter/sort)   (RecordStore + backends)
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes and returns plain Rust values. Nothing writes
//! to stdout/stderr or exits the process; diagnostics go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`validation`]: Field-level validation producing an [`validation::ErrorMap`]
//! - [`query`]: Search, filter and sort over the stored collection
//! - [`store`]: Record store and storage backends
//! - [`model`]: Core data types (`StudentRecord`, `Year`, ...)
//! - [`config`]: Configuration management
//! - [`init`]: Data directory discovery and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod query;
pub mod store;
pub mod validation;
