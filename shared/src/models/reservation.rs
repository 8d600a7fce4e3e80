//! Reservation Model
//!
//! The reservation form is read the way a browser `FormData` is read: by field
//! name, first value wins, absent fields read as `None`.

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Form field names ────────────────────────────────────────────────

pub const FIELD_NAME: &str = "nome";
pub const FIELD_PHONE: &str = "telefone";
pub const FIELD_DATE: &str = "data";
pub const FIELD_TIME: &str = "hora";
pub const FIELD_PARTY_SIZE: &str = "pessoas";
pub const FIELD_MESSAGE: &str = "mensagem";

/// Feedback shown when a required field is empty
pub const REQUIRED_FIELDS_MESSAGE: &str = "Por favor, preencha todos os campos obrigatórios.";

/// Feedback shown after the reservation link has been opened
pub const OPENING_MESSAGE: &str = "Abrindo WhatsApp com sua reserva...";

/// Key/value pairs submitted by a form, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Builder-style [`append`](Self::append)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(name, value);
        self
    }

    /// First value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormData::new();
        for (k, v) in iter {
            form.append(k, v);
        }
        form
    }
}

/// Reservation submission is missing required fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", REQUIRED_FIELDS_MESSAGE)]
pub struct ValidationError {
    /// Names of the empty or absent required fields, in form order
    pub missing: Vec<&'static str>,
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::with_message(ErrorCode::ReservationIncomplete, REQUIRED_FIELDS_MESSAGE)
            .with_detail("missing", err.missing)
    }
}

/// Transient reservation value, built from the form and immediately serialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub name: String,
    pub phone: String,
    /// Date as typed or picked (`d/m/Y` when the picker is active)
    pub date: String,
    /// Time as typed or picked (`H:i` when the picker is active)
    pub time: String,
    pub party_size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ReservationRequest {
    /// Read and check the reservation form
    ///
    /// Name, phone and message are trimmed; date, time and party size are
    /// taken as submitted. Every required field must be non-empty.
    pub fn from_form(form: &FormData) -> Result<Self, ValidationError> {
        let name = form.get(FIELD_NAME).unwrap_or_default().trim();
        let phone = form.get(FIELD_PHONE).unwrap_or_default().trim();
        let date = form.get(FIELD_DATE).unwrap_or_default();
        let time = form.get(FIELD_TIME).unwrap_or_default();
        let party_size = form.get(FIELD_PARTY_SIZE).unwrap_or_default();
        let message = form.get(FIELD_MESSAGE).unwrap_or_default().trim();

        let missing: Vec<&'static str> = [
            (FIELD_NAME, name),
            (FIELD_PHONE, phone),
            (FIELD_DATE, date),
            (FIELD_TIME, time),
            (FIELD_PARTY_SIZE, party_size),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }

        Ok(Self {
            name: name.to_string(),
            phone: phone.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            party_size: party_size.to_string(),
            message: (!message.is_empty()).then(|| message.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> FormData {
        FormData::new()
            .with(FIELD_NAME, "  Ana ")
            .with(FIELD_PHONE, "11999999999")
            .with(FIELD_DATE, "24/12/2026")
            .with(FIELD_TIME, "20:00")
            .with(FIELD_PARTY_SIZE, "4")
    }

    #[test]
    fn test_form_data_first_value_wins() {
        let form: FormData = [("nome", "Ana"), ("nome", "Bia")].into_iter().collect();
        assert_eq!(form.get("nome"), Some("Ana"));
        assert_eq!(form.get("hora"), None);
        assert!(!form.is_empty());
    }

    #[test]
    fn test_from_form_complete() {
        let req = ReservationRequest::from_form(&full_form()).unwrap();
        assert_eq!(req.name, "Ana");
        assert_eq!(req.party_size, "4");
        assert_eq!(req.message, None);
    }

    #[test]
    fn test_from_form_keeps_trimmed_message() {
        let form = full_form().with(FIELD_MESSAGE, "  Aniversário  ");
        let req = ReservationRequest::from_form(&form).unwrap();
        assert_eq!(req.message.as_deref(), Some("Aniversário"));

        let form = full_form().with(FIELD_MESSAGE, "   ");
        let req = ReservationRequest::from_form(&form).unwrap();
        assert_eq!(req.message, None);
    }

    #[test]
    fn test_from_form_missing_fields() {
        let form = FormData::new()
            .with(FIELD_NAME, "Ana")
            .with(FIELD_PHONE, "11999999999")
            .with(FIELD_DATE, "")
            .with(FIELD_PARTY_SIZE, "");
        let err = ReservationRequest::from_form(&form).unwrap_err();
        assert_eq!(err.missing, vec![FIELD_DATE, FIELD_TIME, FIELD_PARTY_SIZE]);
        assert_eq!(err.to_string(), REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn test_whitespace_name_counts_as_missing() {
        let form = FormData::new()
            .with(FIELD_NAME, "   ")
            .with(FIELD_PHONE, "11999999999")
            .with(FIELD_DATE, "24/12/2026")
            .with(FIELD_TIME, "20:00")
            .with(FIELD_PARTY_SIZE, "2");
        let err = ReservationRequest::from_form(&form).unwrap_err();
        assert_eq!(err.missing, vec![FIELD_NAME]);
    }

    #[test]
    fn test_validation_error_into_app_error() {
        let err: AppError = ValidationError {
            missing: vec![FIELD_TIME],
        }
        .into();
        assert_eq!(err.code, ErrorCode::ReservationIncomplete);
        assert_eq!(err.message, REQUIRED_FIELDS_MESSAGE);
        assert_eq!(err.details.unwrap()["missing"], serde_json::json!(["hora"]));
    }
}
