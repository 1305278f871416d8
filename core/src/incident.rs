//! Incident reports

use crate::error::{DaycareError, Result};
use crate::mock;
use crate::models::ChildRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct IncidentReport {
    pub id: u32,
    pub child_id: u32,
    pub child_name: String,
    pub kind: String,
    pub time: String,
    pub description: String,
    pub action_taken: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncidentForm {
    /// Index into the child picker list.
    pub child: usize,
    /// Index into [`mock::INCIDENT_TYPES`].
    pub kind: Option<usize>,
    pub time: String,
    pub description: String,
    pub action_taken: String,
}

impl IncidentForm {
    pub fn kind_label(&self) -> Option<&'static str> {
        self.kind.and_then(|i| mock::INCIDENT_TYPES.get(i).copied())
    }

    pub fn validate<'a>(&self, children: &'a [ChildRecord]) -> Result<&'a ChildRecord> {
        let child = children.get(self.child).ok_or(DaycareError::MissingField("child"))?;
        if self.kind_label().is_none() {
            return Err(DaycareError::MissingIncidentType);
        }
        if self.time.trim().is_empty() {
            return Err(DaycareError::MissingField("time of incident"));
        }
        if self.description.trim().is_empty() {
            return Err(DaycareError::MissingField("description"));
        }
        Ok(child)
    }
}

#[derive(Debug, Clone, Default)]
pub struct IncidentLog {
    pub reports: Vec<IncidentReport>,
}

impl IncidentLog {
    pub const SUBMITTED_NOTICE: &'static str = "Incident report submitted. Parent has been notified.";

    pub fn submit(&mut self, form: &IncidentForm, children: &[ChildRecord]) -> Result<IncidentReport> {
        let child = form.validate(children)?;
        let report = IncidentReport {
            id: self.reports.len() as u32 + 1,
            child_id: child.id,
            child_name: child.name.clone(),
            kind: form.kind_label().unwrap_or("Other").to_string(),
            time: form.time.trim().to_string(),
            description: form.description.trim().to_string(),
            action_taken: form.action_taken.trim().to_string(),
        };
        self.reports.push(report.clone());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> IncidentForm {
        IncidentForm {
            child: 1,
            kind: Some(0),
            time: "10:40".to_string(),
            description: "Tripped on the rug".to_string(),
            action_taken: "Ice pack".to_string(),
        }
    }

    #[test]
    fn test_submit_records_report() {
        let children = mock::picker_children();
        let mut log = IncidentLog::default();
        let report = log.submit(&filled(), &children).unwrap();
        assert_eq!(report.child_name, "Oliver Brown");
        assert_eq!(report.kind, "Minor Injury");
        assert_eq!(log.reports.len(), 1);
    }

    #[test]
    fn test_missing_type_and_description() {
        let children = mock::picker_children();
        let mut form = filled();
        form.kind = None;
        assert!(matches!(form.validate(&children), Err(DaycareError::MissingIncidentType)));

        let mut form = filled();
        form.description = "  ".to_string();
        assert!(matches!(form.validate(&children), Err(DaycareError::MissingField("description"))));
    }
}
