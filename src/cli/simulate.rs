//! Headless navigation runs for `daycare-staff simulate`

use daycare_core::models::ChatRecord;
use daycare_core::navigation::{ContextSlot, NavigationController, ScreenId, Selection};
use daycare_core::{mock, DaycareError, Result};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Login(String),
    Logout,
    Navigate { screen: ScreenId, id: Option<u32> },
}

impl FromStr for Step {
    type Err = DaycareError;

    fn from_str(raw: &str) -> Result<Self> {
        let malformed = |reason: &str| DaycareError::MalformedStep {
            step: raw.to_string(),
            reason: reason.to_string(),
        };
        let (verb, rest) = match raw.split_once(':') {
            Some((verb, rest)) => (verb, Some(rest)),
            None => (raw, None),
        };
        match (verb.trim().to_ascii_lowercase().as_str(), rest) {
            ("login", name) => Ok(Step::Login(name.unwrap_or_default().to_string())),
            ("logout", None) => Ok(Step::Logout),
            ("logout", Some(_)) => Err(malformed("logout takes no argument")),
            ("nav", Some(target)) => {
                let (screen, id) = match target.split_once(':') {
                    Some((screen, id)) => {
                        let id = id
                            .trim()
                            .parse::<u32>()
                            .map_err(|_| malformed("record id must be a number"))?;
                        (screen, Some(id))
                    }
                    None => (target, None),
                };
                Ok(Step::Navigate {
                    screen: screen.parse()?,
                    id,
                })
            }
            ("nav", None) => Err(malformed("missing screen name")),
            _ => Err(malformed("expected login:<name>, logout or nav:<screen>[:<id>]")),
        }
    }
}

/// Look up the record a `nav` step hands to its screen.
fn payload_for(screen: ScreenId, id: u32) -> Result<Option<Selection>> {
    match screen.context_slot() {
        ContextSlot::Child => mock::find_child(id)
            .map(|child| Some(Selection::Child(child)))
            .ok_or(DaycareError::UnknownChild(id)),
        ContextSlot::Chat => mock::find_chat(id)
            .or_else(|| mock::find_child(id).map(|child| ChatRecord::for_child(&child)))
            .map(|chat| Some(Selection::Chat(chat)))
            .ok_or(DaycareError::UnknownChat(id)),
        ContextSlot::None => Ok(None),
    }
}

pub fn apply(nav: &mut NavigationController, step: &Step) -> Result<()> {
    match step {
        Step::Login(name) => nav.login(name),
        Step::Logout => nav.logout(),
        Step::Navigate { screen, id } => {
            let payload = match id {
                Some(id) => payload_for(*screen, *id)?,
                None => None,
            };
            nav.navigate(*screen, payload);
        }
    }
    Ok(())
}

/// Snapshot of the controller after one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOutcome {
    pub step: String,
    pub current: ScreenId,
    pub resolved: ScreenId,
    pub authenticated: bool,
    pub user_name: String,
    pub child: Option<String>,
    pub chat: Option<String>,
}

impl StepOutcome {
    fn capture(step: &str, nav: &NavigationController) -> Self {
        Self {
            step: step.to_string(),
            current: nav.current_screen(),
            resolved: nav.resolve(),
            authenticated: nav.is_authenticated(),
            user_name: nav.session().user_name.clone(),
            child: nav.selected_child().map(|c| c.name.clone()),
            chat: nav.selected_chat().map(|c| c.parent_name.clone()),
        }
    }
}

/// Parse every step up front, then run them against a fresh controller.
pub fn run(raw_steps: &[String]) -> Result<Vec<StepOutcome>> {
    let steps = raw_steps
        .iter()
        .map(|raw| raw.parse::<Step>())
        .collect::<Result<Vec<_>>>()?;
    let mut nav = NavigationController::new();
    let mut outcomes = Vec::with_capacity(steps.len());
    for (raw, step) in raw_steps.iter().zip(&steps) {
        apply(&mut nav, step)?;
        outcomes.push(StepOutcome::capture(raw, &nav));
    }
    Ok(outcomes)
}
