//! Table reservation handoff

use shared::models::{FormData, ReservationRequest};
use tracing::instrument;

use super::HandoffError;
use super::link::{LINE_BREAK, LinkBuilder, encode_lines};

pub const RESERVATION_GREETING: &str = "Olá! Gostaria de fazer uma reserva.";

/// Labelled field lines; the message line only when present
pub fn reservation_lines(req: &ReservationRequest) -> Vec<String> {
    let mut lines = vec![
        format!("Nome: {}", req.name),
        format!("Telefone: {}", req.phone),
        format!("Data: {}", req.date),
        format!("Horário: {}", req.time),
        format!("Pessoas: {}", req.party_size),
    ];
    if let Some(message) = &req.message {
        lines.push(format!("Mensagem: {}", message));
    }
    lines
}

/// Encoded block: greeting, blank line, one field per line
///
/// Every field line is terminated by a line break, the last one included.
pub fn reservation_text(req: &ReservationRequest) -> String {
    let mut text = encode_lines([RESERVATION_GREETING]);
    text.push_str(LINE_BREAK);
    text.push_str(LINE_BREAK);
    for line in reservation_lines(req) {
        text.push_str(&encode_lines([line]));
        text.push_str(LINE_BREAK);
    }
    text
}

/// Validate the submitted form and build the reservation URL
#[instrument(skip_all)]
pub fn reservation_link(builder: &LinkBuilder, form: &FormData) -> Result<String, HandoffError> {
    let req = ReservationRequest::from_form(form)?;
    Ok(builder.compose(&reservation_text(&req)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{
        FIELD_DATE, FIELD_MESSAGE, FIELD_NAME, FIELD_PARTY_SIZE, FIELD_PHONE, FIELD_TIME,
        REQUIRED_FIELDS_MESSAGE,
    };

    fn builder() -> LinkBuilder {
        LinkBuilder::new("https://wa.me", "5543984336883")
    }

    fn form() -> FormData {
        FormData::new()
            .with(FIELD_NAME, "Ana")
            .with(FIELD_PHONE, "11999999999")
            .with(FIELD_DATE, "24/12/2026")
            .with(FIELD_TIME, "20:00")
            .with(FIELD_PARTY_SIZE, "4")
    }

    #[test]
    fn test_reservation_text_without_message() {
        let req = ReservationRequest::from_form(&form()).unwrap();
        assert_eq!(
            reservation_text(&req),
            "Ol%C3%A1%21%20Gostaria%20de%20fazer%20uma%20reserva.%0A%0A\
             Nome%3A%20Ana%0A\
             Telefone%3A%2011999999999%0A\
             Data%3A%2024%2F12%2F2026%0A\
             Hor%C3%A1rio%3A%2020%3A00%0A\
             Pessoas%3A%204%0A"
        );
    }

    #[test]
    fn test_reservation_lines_with_message() {
        let req = ReservationRequest::from_form(&form().with(FIELD_MESSAGE, "Mesa & janela")).unwrap();
        let lines = reservation_lines(&req);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[5], "Mensagem: Mesa & janela");
        assert!(reservation_text(&req).ends_with("Mensagem%3A%20Mesa%20%26%20janela%0A"));
    }

    #[test]
    fn test_reservation_link_validation() {
        let incomplete = FormData::new()
            .with(FIELD_NAME, "Ana")
            .with(FIELD_PHONE, "11999999999");
        let err = reservation_link(&builder(), &incomplete).unwrap_err();
        assert_eq!(err.to_string(), REQUIRED_FIELDS_MESSAGE);
        assert!(matches!(err, HandoffError::Incomplete(_)));
    }

    #[test]
    fn test_reservation_link_shape() {
        let url = reservation_link(&builder(), &form()).unwrap();
        assert!(url.starts_with("https://wa.me/5543984336883?text=Ol%C3%A1"));
        assert!(url.contains("Nome%3A%20Ana%0A"));
    }
}
