//! Date/time pickers for the reservation form
//!
//! Pickers are optional. When the widget is missing the inputs stay plain
//! text and the form is read as typed; nothing is reported to the visitor.

use chrono::{NaiveDate, NaiveTime, Timelike};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{FIELD_DATE, FIELD_TIME, FormData};

/// `d/m/Y`
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// `H:i`, 24-hour
pub const TIME_FORMAT: &str = "%H:%M";

pub const MINUTE_INCREMENT: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerOptions {
    /// Earliest selectable day ("today" at attach time)
    pub min_date: NaiveDate,
    pub locale: &'static str,
    /// Native mobile picker disabled so the same widget shows everywhere
    pub disable_mobile: bool,
}

impl DatePickerOptions {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            min_date: today,
            locale: "pt",
            disable_mobile: true,
        }
    }

    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        date >= self.min_date
    }

    /// Parse a `d/m/Y` value and check it is selectable
    pub fn select(&self, value: &str) -> AppResult<NaiveDate> {
        let date = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
            AppError::with_message(
                ErrorCode::ReservationInvalidDate,
                format!("Data inválida: '{}'. Use dd/mm/aaaa.", value),
            )
        })?;
        if !self.is_selectable(date) {
            return Err(AppError::with_message(
                ErrorCode::ReservationInvalidDate,
                format!(
                    "Data indisponível: {}. Reservas a partir de {}.",
                    format_date(date),
                    format_date(self.min_date)
                ),
            ));
        }
        Ok(date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePickerOptions {
    pub time_24hr: bool,
    pub minute_increment: u32,
    pub disable_mobile: bool,
}

impl Default for TimePickerOptions {
    fn default() -> Self {
        Self {
            time_24hr: true,
            minute_increment: MINUTE_INCREMENT,
            disable_mobile: true,
        }
    }
}

impl TimePickerOptions {
    /// Every selectable time of day, in order
    pub fn slots(&self) -> Vec<NaiveTime> {
        let step = self.minute_increment.clamp(1, 60);
        (0..24 * 60)
            .step_by(step as usize)
            .filter_map(|m| NaiveTime::from_hms_opt(m / 60, m % 60, 0))
            .collect()
    }

    pub fn is_selectable(&self, time: NaiveTime) -> bool {
        let step = self.minute_increment.clamp(1, 60);
        time.second() == 0 && (time.hour() * 60 + time.minute()) % step == 0
    }

    /// Parse an `H:i` value and check it falls on an increment
    pub fn select(&self, value: &str) -> AppResult<NaiveTime> {
        let time = NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| {
            AppError::with_message(
                ErrorCode::ReservationInvalidTime,
                format!("Horário inválido: '{}'. Use hh:mm.", value),
            )
        })?;
        if !self.is_selectable(time) {
            return Err(AppError::with_message(
                ErrorCode::ReservationInvalidTime,
                format!(
                    "Horário indisponível: {}. Escolha intervalos de {} minutos.",
                    format_time(time),
                    self.minute_increment
                ),
            ));
        }
        Ok(time)
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// How a form input behaves after pickers are attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode<T> {
    Picker(T),
    PlainText,
}

impl<T> InputMode<T> {
    pub fn picker(&self) -> Option<&T> {
        match self {
            InputMode::Picker(options) => Some(options),
            InputMode::PlainText => None,
        }
    }
}

/// Reservation date and time inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationPickers {
    pub date: InputMode<DatePickerOptions>,
    pub time: InputMode<TimePickerOptions>,
}

impl ReservationPickers {
    /// Attach pickers if the widget library is present
    pub fn attach(available: bool, today: NaiveDate) -> Self {
        if !available {
            tracing::debug!("Date picker unavailable, using plain text inputs");
            return Self::plain_text();
        }
        Self {
            date: InputMode::Picker(DatePickerOptions::new(today)),
            time: InputMode::Picker(TimePickerOptions::default()),
        }
    }

    pub fn plain_text() -> Self {
        Self {
            date: InputMode::PlainText,
            time: InputMode::PlainText,
        }
    }

    /// Refuse date/time values the attached pickers would not let through
    ///
    /// Empty values are left to the required-field check; plain-text inputs
    /// accept anything.
    pub fn check(&self, form: &FormData) -> AppResult<()> {
        if let Some(options) = self.date.picker()
            && let Some(value) = form.get(FIELD_DATE).filter(|v| !v.is_empty())
        {
            options.select(value)?;
        }
        if let Some(options) = self.time.picker()
            && let Some(value) = form.get(FIELD_TIME).filter(|v| !v.is_empty())
        {
            options.select(value)?;
        }
        Ok(())
    }
}
