//! Health logs: temperatures, medicine, reactions

use crate::error::{DaycareError, Result};
use crate::mock;
use crate::models::{ChildRecord, HealthLog};
use std::borrow::Cow;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthForm {
    /// Index into [`mock::HEALTH_LOG_TYPES`].
    pub kind: usize,
    pub value: String,
    pub symptoms: String,
    pub notes: String,
}

impl HealthForm {
    pub fn kind_label(&self) -> &'static str {
        mock::HEALTH_LOG_TYPES[self.kind % mock::HEALTH_LOG_TYPES.len()]
    }

    pub fn cycle_kind(&mut self) {
        self.kind = (self.kind + 1) % mock::HEALTH_LOG_TYPES.len();
    }

    /// Temperature and medicine entries carry a measured value.
    pub fn needs_value(&self) -> bool {
        matches!(self.kind_label(), "Temperature" | "Medicine Given")
    }

    fn display_value(&self) -> String {
        let value = self.value.trim();
        match self.kind_label() {
            "Temperature" => format!("{value}°F"),
            _ if value.is_empty() => "Recorded".to_string(),
            _ => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HealthBook {
    logs: HashMap<u32, Vec<HealthLog>>,
}

impl HealthBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logs(&self, child: &ChildRecord) -> Cow<'_, [HealthLog]> {
        match self.logs.get(&child.id) {
            Some(logs) => Cow::Borrowed(logs.as_slice()),
            None => Cow::Owned(mock::health_logs()),
        }
    }

    pub fn add(&mut self, child: &ChildRecord, form: &HealthForm, time: &str) -> Result<HealthLog> {
        if form.needs_value() && form.value.trim().is_empty() {
            return Err(DaycareError::MissingHealthValue(form.kind_label().to_lowercase()));
        }
        let notes = match (form.symptoms.trim(), form.notes.trim()) {
            ("", notes) => notes.to_string(),
            (symptoms, "") => format!("Symptoms: {symptoms}"),
            (symptoms, notes) => format!("Symptoms: {symptoms}. {notes}"),
        };
        let logs = self.logs.entry(child.id).or_insert_with(mock::health_logs);
        let log = HealthLog {
            id: logs.iter().map(|l| l.id).max().unwrap_or(0) + 1,
            kind: form.kind_label().to_string(),
            value: form.display_value(),
            time: time.to_string(),
            date: "Today".to_string(),
            notes,
        };
        logs.insert(0, log.clone());
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_requires_value() {
        let child = mock::find_child(1).unwrap();
        let mut book = HealthBook::new();
        let form = HealthForm::default();
        let err = book.add(&child, &form, "10:00 AM").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a temperature value");
    }

    #[test]
    fn test_injury_without_value() {
        let child = mock::find_child(1).unwrap();
        let mut book = HealthBook::new();
        let form = HealthForm {
            kind: 3,
            symptoms: "Scraped knee".to_string(),
            ..Default::default()
        };
        assert!(!form.needs_value());
        let log = book.add(&child, &form, "10:00 AM").unwrap();
        assert_eq!(log.kind, "Injury");
        assert_eq!(log.value, "Recorded");
        assert_eq!(log.notes, "Symptoms: Scraped knee");
        assert_eq!(book.logs(&child)[0], log);
    }

    #[test]
    fn test_temperature_formatting() {
        let child = mock::find_child(2).unwrap();
        let mut book = HealthBook::new();
        let form = HealthForm {
            value: "99.1".to_string(),
            notes: "Resting".to_string(),
            ..Default::default()
        };
        let log = book.add(&child, &form, "01:30 PM").unwrap();
        assert_eq!(log.value, "99.1°F");
        assert_eq!(log.notes, "Resting");
        assert_eq!(log.id, 4);
    }

    #[test]
    fn test_cycle_kind_wraps() {
        let mut form = HealthForm::default();
        for _ in 0..mock::HEALTH_LOG_TYPES.len() {
            form.cycle_kind();
        }
        assert_eq!(form.kind_label(), "Temperature");
    }
}
