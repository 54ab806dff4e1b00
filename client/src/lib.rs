//! # QuoteDeck Desktop Client - Library Root
//!
//! A native desktop client for the QuoteDeck quote-sharing backend, built on
//! egui/eframe. This library crate contains all modules used by the binary
//! crate (`main.rs`).
//!
//! ## Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │              quotedeck (this crate)                │
//! ├────────────────────────────────────────────────────┤
//! │  egui / eframe  - Immediate-mode native GUI        │
//! │  egui_plot      - Aggregate bar charts             │
//! │  Tokio          - Async runtime for fetch tasks    │
//! │  Reqwest        - HTTP client                      │
//! │  jsonwebtoken   - Signed session tokens            │
//! └────────────────────────────────────────────────────┘
//!                        │ HTTP + Bearer token
//!                        ▼
//!              ┌──────────────────────┐
//!              │   QuoteDeck backend  │
//!              └──────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Orchestrator, state machine, handlers and fetch tasks
//! - **core**: Error taxonomy and the [`core::ApiService`] seam
//! - **query**: Keyed query cache, search debouncing
//! - **services**: Backend HTTP adapter and session lifecycle
//! - **ui**: Screens, widgets and theme
//! - **utils**: Input validation, shared tokio runtime

pub mod app;
pub mod core;
pub mod query;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState, Screen};
pub use core::{AppError, Result};
