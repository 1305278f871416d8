//! Attendance marking
//!
//! A marking session starts with every child unmarked. Saving requires a
//! status for every child and produces an [`AttendanceRecord`].

use crate::clock;
use crate::error::{DaycareError, Result};
use crate::models::{AttendanceRecord, ChildRecord, PresenceStatus};
use chrono::{Duration, NaiveDate};

#[derive(Debug, Clone, PartialEq)]
pub struct ChildAttendance {
    pub id: u32,
    pub name: String,
    pub status: Option<PresenceStatus>,
}

#[derive(Debug, Clone)]
pub struct AttendanceSheet {
    pub date: NaiveDate,
    pub time_from: String,
    pub time_to: String,
    pub entries: Vec<ChildAttendance>,
    /// Record being edited, if this sheet was opened from history.
    pub editing: Option<u32>,
}

impl AttendanceSheet {
    pub fn new(children: &[ChildRecord], date: NaiveDate) -> Self {
        Self {
            date,
            time_from: "08:00".to_string(),
            time_to: "09:30".to_string(),
            entries: children
                .iter()
                .map(|c| ChildAttendance {
                    id: c.id,
                    name: c.name.clone(),
                    status: None,
                })
                .collect(),
            editing: None,
        }
    }

    /// Open an existing record: the first `present` children are marked present, the rest absent.
    pub fn for_record(children: &[ChildRecord], record: &AttendanceRecord, date: NaiveDate) -> Self {
        let mut sheet = Self::new(children, date);
        sheet.editing = Some(record.id);
        sheet.time_from = record.time_from.clone();
        sheet.time_to = record.time_to.clone();
        for (index, entry) in sheet.entries.iter_mut().enumerate() {
            entry.status = Some(if index < record.present {
                PresenceStatus::Present
            } else {
                PresenceStatus::Absent
            });
        }
        sheet
    }

    /// Set `status` for a child; choosing the status it already has clears it.
    pub fn toggle(&mut self, child_id: u32, status: PresenceStatus) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == child_id) {
            entry.status = if entry.status == Some(status) {
                None
            } else {
                Some(status)
            };
        }
    }

    pub fn mark_all(&mut self, status: PresenceStatus) {
        for entry in &mut self.entries {
            entry.status = Some(status);
        }
    }

    pub fn count(&self, status: PresenceStatus) -> usize {
        self.entries.iter().filter(|e| e.status == Some(status)).count()
    }

    pub fn unmarked(&self) -> usize {
        self.entries.iter().filter(|e| e.status.is_none()).count()
    }

    pub fn previous_day(&mut self) {
        self.date -= Duration::days(1);
    }

    pub fn next_day(&mut self) {
        self.date += Duration::days(1);
    }

    /// Validate the sheet and turn it into a history record.
    pub fn finish(&self, next_id: u32) -> Result<AttendanceRecord> {
        let unmarked = self.unmarked();
        if unmarked > 0 {
            return Err(DaycareError::AttendanceIncomplete { unmarked });
        }
        let present = self.count(PresenceStatus::Present);
        let absent = self.count(PresenceStatus::Absent);
        Ok(AttendanceRecord {
            id: self.editing.unwrap_or(next_id),
            date: clock::date_label(self.date),
            present,
            absent,
            total: present + absent,
            time_from: self.time_from.clone(),
            time_to: self.time_to.clone(),
        })
    }
}

/// Attendance history, newest first.
#[derive(Debug, Clone, Default)]
pub struct AttendanceBook {
    pub records: Vec<AttendanceRecord>,
}

impl AttendanceBook {
    pub fn new(records: Vec<AttendanceRecord>) -> Self {
        Self { records }
    }

    pub fn next_id(&self) -> u32 {
        self.records.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }

    /// Validate and store a sheet, replacing the record it was opened from.
    pub fn save(&mut self, sheet: &AttendanceSheet) -> Result<AttendanceRecord> {
        let record = sheet.finish(self.next_id())?;
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => self.records.insert(0, record.clone()),
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test]
    fn test_toggle_same_status_clears() {
        let mut sheet = AttendanceSheet::new(&mock::children(), date());
        sheet.toggle(1, PresenceStatus::Present);
        assert_eq!(sheet.entries[0].status, Some(PresenceStatus::Present));
        sheet.toggle(1, PresenceStatus::Absent);
        assert_eq!(sheet.entries[0].status, Some(PresenceStatus::Absent));
        sheet.toggle(1, PresenceStatus::Absent);
        assert_eq!(sheet.entries[0].status, None);
    }

    #[test]
    fn test_save_rejects_unmarked() {
        let mut book = AttendanceBook::new(mock::attendance_records(date()));
        let mut sheet = AttendanceSheet::new(&mock::children(), date());
        sheet.toggle(3, PresenceStatus::Absent);
        let err = book.save(&sheet).unwrap_err();
        assert!(matches!(err, DaycareError::AttendanceIncomplete { unmarked: 7 }));
        assert_eq!(book.records.len(), 3);
    }

    #[test]
    fn test_save_new_sheet_prepends() {
        let mut book = AttendanceBook::new(mock::attendance_records(date()));
        let mut sheet = AttendanceSheet::new(&mock::children(), date());
        sheet.mark_all(PresenceStatus::Present);
        sheet.toggle(7, PresenceStatus::Absent);
        let record = book.save(&sheet).unwrap();
        assert_eq!(record.id, 4);
        assert_eq!((record.present, record.absent, record.total), (7, 1, 8));
        assert_eq!(book.records[0], record);
    }

    #[test]
    fn test_edit_record_preloads_and_replaces() {
        let mut book = AttendanceBook::new(mock::attendance_records(date()));
        let original = book.records[1].clone();
        let mut sheet = AttendanceSheet::for_record(&mock::children(), &original, date());
        assert_eq!(sheet.count(PresenceStatus::Present), 7);
        assert_eq!(sheet.count(PresenceStatus::Absent), 1);

        sheet.mark_all(PresenceStatus::Absent);
        let record = book.save(&sheet).unwrap();
        assert_eq!(record.id, original.id);
        assert_eq!(book.records.len(), 3);
        assert_eq!(book.records[1].absent, 8);
    }

    #[test]
    fn test_day_navigation() {
        let mut sheet = AttendanceSheet::new(&mock::children(), date());
        sheet.previous_day();
        sheet.previous_day();
        sheet.next_day();
        assert_eq!(sheet.date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
    }
}
