//! # Domain Module
//!
//! Business logic behind the calendario screens, independent of any UI
//! framework or storage backend.
//!
//! ## Module Organization
//!
//! - **calendario_mapper**: conversions between stored records and form state
//! - **calendario_entry**: entry form validation and insertion
//! - **calendario_details**: single-record view, day countdown and deletion
//! - **calendario_home**: list of all records
//! - **ui_state**: observable holder the controllers publish through
//!
//! ## Business Rules
//!
//! - A form can be saved only when every field has non-blank content
//! - Numeric fields that do not parse are stored as 0
//! - A record is out of stock when it has no days left
//! - The day countdown never goes below zero

pub mod calendario_details;
pub mod calendario_entry;
pub mod calendario_home;
pub mod calendario_mapper;
pub mod ui_state;

pub use calendario_details::CalendarioDetailsController;
pub use calendario_entry::{validate_input, CalendarioEntryController};
pub use calendario_home::CalendarioHomeController;
pub use calendario_mapper::CalendarioMapper;
pub use ui_state::UiStateHolder;
