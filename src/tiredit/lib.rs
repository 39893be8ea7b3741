//! # Tiredit Architecture
//!
//! Tiredit is a **UI-agnostic editing library** for TiRiFiC def files with a
//! CLI client on top. The def file is a line-oriented `KEY= VALUE` parameter
//! description of a tilted-ring galaxy model; tiredit loads one, lets you
//! change the per-ring values of a parameter, and writes the file back out
//! with every other line untouched — same key order, same blank lines.
//!
//! ## Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                          │
//! │  - Parses arguments, prints tables and messages            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes│
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - Thin facade over commands, owns the live session        │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - Business logic, returns structured Result types         │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Session + Document (session.rs, deffile.rs, model.rs)     │
//! │  - Ordered document, file parse/render, ring-value edits   │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` types, and never touches stdout/stderr or calls
//! `std::process::exit`. File paths only appear where a command is
//! explicitly about reading or writing a file, and the parse/render
//! routines have pure-text entry points so every piece of the pipeline can
//! be tested without a filesystem.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`model`]: The ordered key-value document a def file loads into
//! - [`deffile`]: Def-file parsing and rendering
//! - [`session`]: One editing session — ring series, pending edits, drags
//! - [`params`]: The editable-parameter name registry
//! - [`format`]: Scientific formatting of ring values
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod deffile;
pub mod error;
pub mod format;
pub mod model;
pub mod params;
pub mod session;
