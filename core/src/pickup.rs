//! Pickup verification against the authorized-person list

use crate::error::{DaycareError, Result};
use crate::mock;
use crate::models::{AuthorizedPerson, ChildRecord};

#[derive(Debug, Clone)]
pub struct PickupVerification {
    pub child: ChildRecord,
    pub persons: Vec<AuthorizedPerson>,
    pub selected: Option<u32>,
    pub notes: String,
}

impl Default for PickupVerification {
    fn default() -> Self {
        let (child, persons) = mock::pickup_roster();
        Self {
            child,
            persons,
            selected: None,
            notes: String::new(),
        }
    }
}

impl PickupVerification {
    pub fn select(&mut self, person_id: u32) {
        if self.persons.iter().any(|p| p.id == person_id) {
            self.selected = Some(person_id);
        }
    }

    pub fn selected_person(&self) -> Option<&AuthorizedPerson> {
        self.selected
            .and_then(|id| self.persons.iter().find(|p| p.id == id))
    }

    /// Confirmation text for a verified pickup at `time`.
    pub fn verify(&self, time: &str) -> Result<String> {
        let person = self.selected_person().ok_or(DaycareError::NoPickupPerson)?;
        Ok(format!(
            "Pickup verified: {} picked up by {} at {}",
            self.child.name, person.name, time
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_requires_selection() {
        let pickup = PickupVerification::default();
        assert!(matches!(pickup.verify("04:30 PM"), Err(DaycareError::NoPickupPerson)));
    }

    #[test]
    fn test_verify_message() {
        let mut pickup = PickupVerification::default();
        pickup.select(3);
        assert_eq!(
            pickup.verify("04:30 PM").unwrap(),
            "Pickup verified: Emma Wilson picked up by Margaret Smith at 04:30 PM"
        );
    }

    #[test]
    fn test_unknown_person_ignored() {
        let mut pickup = PickupVerification::default();
        pickup.select(42);
        assert!(pickup.selected.is_none());
    }
}
