//! # Core Application Logic
//!
//! This module contains the guide's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (static)     │
//!                    │  • Navigation (state)   │
//!                    │  • Action + update()    │
//!                    │  • Config (file + env)  │
//!                    │                         │
//!                    │  No UI. Only config     │
//!                    │  touches the disk.      │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │   --print  │
//!          │  Adapter   │                │ text/json  │
//!          │ (ratatui)  │                │            │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The chart taxonomy: categories and chart types
//! - [`navigation`]: Overview/detail state and its transitions
//! - [`state`]: The `App` struct, all core state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod navigation;
pub mod state;
