//! Daily schedule
//!
//! Event times are free text such as `9:00 AM - 10:00 AM`. Ordering uses
//! the start time of day; text that does not parse sorts last.

use crate::error::{DaycareError, Result};
use crate::mock;
use crate::models::ScheduleEvent;
use chrono::{Duration, NaiveDate};
use std::cmp::Ordering;

/// Minutes since midnight of the first time in `text`.
///
/// Accepts `h[:mm] AM|PM` (case-insensitive, optional space) and 24h `HH:MM`.
pub fn start_minutes(text: &str) -> Option<u32> {
    let start = text.split(['-', '–']).next()?.trim();
    if start.is_empty() {
        return None;
    }
    let upper = start.to_ascii_uppercase();
    let (clock, meridiem) = if let Some(rest) = upper.strip_suffix("AM") {
        (rest.trim(), Some(false))
    } else if let Some(rest) = upper.strip_suffix("PM") {
        (rest.trim(), Some(true))
    } else {
        (upper.as_str(), None)
    };

    let (hour, minute) = match clock.split_once(':') {
        Some((h, m)) => (h.trim().parse::<u32>().ok()?, m.trim().parse::<u32>().ok()?),
        None => (clock.parse::<u32>().ok()?, 0),
    };
    if minute > 59 {
        return None;
    }
    let hour = match meridiem {
        Some(pm) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            match (hour, pm) {
                (12, false) => 0,
                (12, true) => 12,
                (h, true) => h + 12,
                (h, false) => h,
            }
        }
        None if hour < 24 => hour,
        None => return None,
    };
    Some(hour * 60 + minute)
}

fn compare_events(a: &ScheduleEvent, b: &ScheduleEvent) -> Ordering {
    match (start_minutes(&a.time), start_minutes(&b.time)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.time.cmp(&b.time),
    }
}

pub fn sort_events(events: &mut [ScheduleEvent]) {
    events.sort_by(compare_events);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub time: String,
    pub activity: String,
    /// Index into [`mock::SCHEDULE_ICONS`].
    pub icon: usize,
    /// Index into [`mock::SCHEDULE_COLORS`].
    pub color: usize,
}

impl EventDraft {
    pub fn from_event(event: &ScheduleEvent) -> Self {
        Self {
            time: event.time.clone(),
            activity: event.activity.clone(),
            icon: mock::SCHEDULE_ICONS.iter().position(|i| *i == event.icon).unwrap_or(0),
            color: mock::SCHEDULE_COLORS.iter().position(|c| *c == event.color).unwrap_or(0),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.time.trim().is_empty() || self.activity.trim().is_empty() {
            return Err(DaycareError::InvalidScheduleEvent);
        }
        Ok(())
    }

    fn icon_name(&self) -> String {
        mock::SCHEDULE_ICONS[self.icon % mock::SCHEDULE_ICONS.len()].to_string()
    }

    fn color_name(&self) -> String {
        mock::SCHEDULE_COLORS[self.color % mock::SCHEDULE_COLORS.len()].to_string()
    }
}

#[derive(Debug, Clone)]
pub struct Schedule {
    pub date: NaiveDate,
    pub events: Vec<ScheduleEvent>,
}

impl Schedule {
    pub fn new(date: NaiveDate) -> Self {
        let mut events = mock::default_schedule();
        sort_events(&mut events);
        Self { date, events }
    }

    fn next_id(&self) -> u32 {
        self.events.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    pub fn add(&mut self, draft: &EventDraft) -> Result<&ScheduleEvent> {
        draft.validate()?;
        let id = self.next_id();
        self.events.push(ScheduleEvent {
            id,
            time: draft.time.trim().to_string(),
            activity: draft.activity.trim().to_string(),
            icon: draft.icon_name(),
            color: draft.color_name(),
        });
        sort_events(&mut self.events);
        self.get(id).ok_or(DaycareError::InvalidScheduleEvent)
    }

    pub fn update(&mut self, id: u32, draft: &EventDraft) -> Result<()> {
        draft.validate()?;
        if let Some(event) = self.events.iter_mut().find(|e| e.id == id) {
            event.time = draft.time.trim().to_string();
            event.activity = draft.activity.trim().to_string();
            event.icon = draft.icon_name();
            event.color = draft.color_name();
        }
        sort_events(&mut self.events);
        Ok(())
    }

    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        before != self.events.len()
    }

    pub fn get(&self, id: u32) -> Option<&ScheduleEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn previous_day(&mut self) {
        self.date -= Duration::days(1);
    }

    pub fn next_day(&mut self) {
        self.date += Duration::days(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> Schedule {
        Schedule::new(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())
    }

    #[test]
    fn test_start_minutes() {
        assert_eq!(start_minutes("7:00 AM - 8:30 AM"), Some(420));
        assert_eq!(start_minutes("12:30 PM - 2:30 PM"), Some(750));
        assert_eq!(start_minutes("12:15am"), Some(15));
        assert_eq!(start_minutes("3 PM"), Some(900));
        assert_eq!(start_minutes("14:45"), Some(885));
        assert_eq!(start_minutes("after lunch"), None);
        assert_eq!(start_minutes("13:00 PM"), None);
        assert_eq!(start_minutes(""), None);
    }

    #[test]
    fn test_default_schedule_in_day_order() {
        let s = schedule();
        let starts: Vec<_> = s.events.iter().map(|e| start_minutes(&e.time).unwrap()).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
        assert_eq!(s.events.first().unwrap().activity, "Arrival & Free Play");
        assert_eq!(s.events.last().unwrap().activity, "Free Play & Pick Up");
    }

    #[test]
    fn test_add_sorts_by_time_of_day_not_text() {
        let mut s = schedule();
        let draft = EventDraft {
            time: "10:15 AM - 10:30 AM".to_string(),
            activity: "Hand Washing".to_string(),
            ..Default::default()
        };
        let id = s.add(&draft).unwrap().id;
        let pos = s.events.iter().position(|e| e.id == id).unwrap();
        assert_eq!(s.events[pos - 1].activity, "Snack Time");
        assert_eq!(s.events[pos + 1].activity, "Outdoor Play");
    }

    #[test]
    fn test_unparseable_times_sort_last() {
        let mut s = schedule();
        let draft = EventDraft {
            time: "Whenever".to_string(),
            activity: "Bubbles".to_string(),
            ..Default::default()
        };
        s.add(&draft).unwrap();
        assert_eq!(s.events.last().unwrap().activity, "Bubbles");
    }

    #[test]
    fn test_update_and_delete() {
        let mut s = schedule();
        let draft = EventDraft {
            time: "6:30 AM - 7:00 AM".to_string(),
            activity: "Early Drop-off".to_string(),
            icon: 5,
            color: 5,
        };
        s.update(11, &draft).unwrap();
        assert_eq!(s.events[0].id, 11);
        assert_eq!(s.events[0].icon, "Clock");
        assert_eq!(s.events[0].color, "Red");

        assert!(s.delete(11));
        assert!(!s.delete(11));
        assert_eq!(s.events.len(), 10);
    }

    #[test]
    fn test_invalid_draft() {
        let mut s = schedule();
        let err = s.add(&EventDraft::default()).unwrap_err();
        assert!(matches!(err, DaycareError::InvalidScheduleEvent));
    }

    #[test]
    fn test_draft_from_event() {
        let s = schedule();
        let draft = EventDraft::from_event(s.get(9).unwrap());
        assert_eq!(draft.activity, "Music & Arts");
        assert_eq!(mock::SCHEDULE_ICONS[draft.icon], "Music");
        assert_eq!(mock::SCHEDULE_COLORS[draft.color], "Pink");
    }
}
