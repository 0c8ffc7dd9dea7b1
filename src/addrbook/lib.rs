//! # Addrbook Architecture
//!
//! Addrbook is a personal contact book: names, phone numbers and birthdays,
//! kept in a JSON file and driven by short text commands (`add user bob`,
//! `add phone bob 0501234567`, `days to birthday bob`, ...).
//!
//! The library is UI-agnostic. The bundled binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, binary only)                                    │
//! │  - read loop, flags, colored output, exit codes             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) + Dispatcher (dispatch.rs)                    │
//! │  - text line -> handler, errors -> messages                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - one handler per command, returns CmdResult               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (book.rs, record.rs, fields.rs) + Storage (store/)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing from `api.rs` inward writes to stdout or exits the process.
//!
//! ## Module Overview
//!
//! - [`api`]: facade owning the book, its store and the dispatcher
//! - [`dispatch`]: command registry and prefix matching
//! - [`commands`]: handlers
//! - [`book`]: the ordered contact collection, search and pagination
//! - [`record`]: a single contact
//! - [`fields`]: validated `Name`, `Phone`, `Birthday`
//! - [`store`]: persistence backends
//! - [`config`]: user configuration
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod fields;
pub mod record;
pub mod store;
