//! # Patternz Architecture
//!
//! Patternz demonstrates two object-oriented design patterns with toy domains:
//!
//! - **Bridge**: a customer browser ([`customers`]) decoupled from the record
//!   store it delegates to ([`store`]).
//! - **Builder**: a vehicle shop ([`vehicles::Shop`]) running a fixed build
//!   sequence over interchangeable builders ([`vehicles::builders`]).
//!
//! It is a library first. The binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, waits for a keypress   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the loaded config, fills in defaults                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - The scripted demo sequences and config actions           │
//! │  - Returns `CmdResult` with an `Output` transcript          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain Layer                                               │
//! │  - customers.rs + store/: Bridge abstraction/implementor    │
//! │  - vehicles/: Builder director, builders, product           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Printing in the Core
//!
//! Everything the demos "print" is appended to an [`output::Output`] buffer.
//! Tests assert on the buffer; the CLI renders it.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Scripted demos and config actions
//! - [`customers`]: Browser abstraction (Bridge)
//! - [`store`]: Customer store trait and in-memory implementation
//! - [`vehicles`]: Product, builders and director (Builder)
//! - [`output`]: Styled line buffer
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod customers;
pub mod error;
pub mod output;
pub mod store;
pub mod vehicles;
