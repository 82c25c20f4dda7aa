use serde::{Deserialize, Serialize};

/// A calendar row as persisted by the storage layer.
///
/// `id` is assigned by storage on insert; `0` means the record has not been
/// stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendario {
    pub id: i32,
    /// Month display name
    pub mes: String,
    /// Remaining days, used as a countdown quantity
    pub dias: i32,
    /// Number of weeks
    pub semanas: i32,
    /// Holiday display name
    pub festividad: String,
}

/// Editable, string-typed mirror of a [`Calendario`].
///
/// `dias` and `semanas` hold whatever the user typed and may not be numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarioDetails {
    pub id: i32,
    pub mes: String,
    pub dias: String,
    pub semanas: String,
    pub festividad: String,
}

/// State of the entry form: the fields being edited plus whether they can be saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarioUiState {
    pub calendario_details: CalendarioDetails,
    pub is_entry_valid: bool,
}

/// State of the single-record details screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarioDetailsUiState {
    /// True when the record has no days left
    pub out_of_stock: bool,
    pub calendario_details: CalendarioDetails,
}

impl Default for CalendarioDetailsUiState {
    /// Before the first record arrives nothing is available, so the empty
    /// projection reports itself as out of stock.
    fn default() -> Self {
        Self {
            out_of_stock: true,
            calendario_details: CalendarioDetails::default(),
        }
    }
}

/// State of the list screen: every stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeUiState {
    pub calendario_list: Vec<Calendario>,
}
