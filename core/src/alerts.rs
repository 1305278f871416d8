//! AI monitoring alerts (view-only)

use crate::models::{AiAlert, AlertKind};

pub const VIEW_ONLY_NOTICE: &str =
    "Alerts are view-only. Admins resolve and manage AI detections.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertSummary {
    pub cry: usize,
    pub fire: usize,
    pub unknown_person: usize,
    pub dangerous_object: usize,
    pub today: usize,
}

impl AlertSummary {
    pub fn count(&self, kind: AlertKind) -> usize {
        match kind {
            AlertKind::Cry => self.cry,
            AlertKind::Fire => self.fire,
            AlertKind::UnknownPerson => self.unknown_person,
            AlertKind::DangerousObject => self.dangerous_object,
        }
    }

    pub fn total(&self) -> usize {
        AlertKind::ALL.iter().map(|k| self.count(*k)).sum()
    }
}

pub fn summarize(alerts: &[AiAlert]) -> AlertSummary {
    let mut summary = AlertSummary::default();
    for alert in alerts {
        match alert.kind {
            AlertKind::Cry => summary.cry += 1,
            AlertKind::Fire => summary.fire += 1,
            AlertKind::UnknownPerson => summary.unknown_person += 1,
            AlertKind::DangerousObject => summary.dangerous_object += 1,
        }
        if alert.date == "Today" {
            summary.today += 1;
        }
    }
    summary
}

/// Alerts grouped by their day label, keeping first-seen order.
pub fn group_by_date(alerts: &[AiAlert]) -> Vec<(&str, Vec<&AiAlert>)> {
    let mut groups: Vec<(&str, Vec<&AiAlert>)> = Vec::new();
    for alert in alerts {
        match groups.iter_mut().find(|(date, _)| *date == alert.date) {
            Some((_, items)) => items.push(alert),
            None => groups.push((alert.date.as_str(), vec![alert])),
        }
    }
    groups
}
