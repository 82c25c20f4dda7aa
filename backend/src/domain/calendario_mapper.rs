use shared::{Calendario, CalendarioDetails, CalendarioUiState};

/// Converts between the stored [`Calendario`] and its editable
/// [`CalendarioDetails`] form.
pub struct CalendarioMapper;

impl CalendarioMapper {
    /// Convert form details to a domain calendario.
    ///
    /// `dias` and `semanas` that are empty, non-numeric or out of `i32` range
    /// become 0. This never fails.
    pub fn to_domain(details: &CalendarioDetails) -> Calendario {
        Calendario {
            id: details.id,
            mes: details.mes.clone(),
            dias: Self::parse_or_zero(&details.dias),
            semanas: Self::parse_or_zero(&details.semanas),
            festividad: details.festividad.clone(),
        }
    }

    /// Convert a domain calendario to form details
    pub fn to_details(calendario: &Calendario) -> CalendarioDetails {
        CalendarioDetails {
            id: calendario.id,
            mes: calendario.mes.clone(),
            dias: calendario.dias.to_string(),
            semanas: calendario.semanas.to_string(),
            festividad: calendario.festividad.clone(),
        }
    }

    /// Convert a domain calendario to an entry form state
    pub fn to_ui_state(calendario: &Calendario, is_entry_valid: bool) -> CalendarioUiState {
        CalendarioUiState {
            calendario_details: Self::to_details(calendario),
            is_entry_valid,
        }
    }

    fn parse_or_zero(input: &str) -> i32 {
        input.parse().unwrap_or(0)
    }
}
