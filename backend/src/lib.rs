//! # Calendario Backend
//!
//! Non-UI logic for the calendario records feature.
//!
//! ## Architecture
//!
//! ```text
//! Presentation (forms, navigation)
//!     ↓
//! Domain Layer (controllers, mapper, observable UI state)
//!     ↓
//! Storage Layer (CalendarioStorage port, SQLite adapter)
//! ```
//!
//! The domain layer only ever talks to [`storage::CalendarioStorage`]; any
//! backend implementing that trait can be plugged in.

pub mod config;
pub mod domain;
pub mod storage;

pub use config::{BackendConfig, ConfigError};
pub use domain::{
    CalendarioDetailsController, CalendarioEntryController, CalendarioHomeController,
    CalendarioMapper, UiStateHolder,
};
pub use storage::{CalendarioStorage, DbConnection, SqliteCalendarioRepository, Subscription};
