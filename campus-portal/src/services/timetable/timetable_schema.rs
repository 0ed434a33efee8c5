use campus_core::{merge_fields, Record};
use chrono::{DateTime, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// One weekly lesson slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    pub id: String,
    pub class_id: String,
    pub subject_id: String,
    pub teacher_id: String,
    pub school_id: String,
    pub day: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableDraft {
    pub class_id: String,
    pub subject_id: String,
    pub teacher_id: String,
    pub school_id: String,
    pub day: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub room: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetablePatch {
    pub subject_id: Option<String>,
    pub teacher_id: Option<String>,
    pub day: Option<Weekday>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub room: Option<String>,
}

impl Record for TimetableEntry {
    type Draft = TimetableDraft;
    type Patch = TimetablePatch;

    const PREFIX: &'static str = "timetable";
    const LABEL: &'static str = "Timetable entry";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: TimetableDraft) -> Self {
        Self {
            id,
            class_id: draft.class_id,
            subject_id: draft.subject_id,
            teacher_id: draft.teacher_id,
            school_id: draft.school_id,
            day: draft.day,
            start_time: draft.start_time,
            end_time: draft.end_time,
            room: draft.room,
            created_at,
        }
    }

    fn apply(&mut self, patch: TimetablePatch) {
        merge_fields!(self => patch; subject_id, teacher_id, day, start_time, end_time);
        if let Some(room) = patch.room {
            self.room = Some(room);
        }
    }
}

/// All lessons of one weekday, earliest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub day: Weekday,
    pub entries: Vec<TimetableEntry>,
}

impl DaySchedule {
    /// Group entries by weekday (Monday first), each day sorted by start time.
    /// Days without lessons are left out.
    pub fn week(mut entries: Vec<TimetableEntry>) -> Vec<DaySchedule> {
        entries.sort_by_key(|e| (e.day.num_days_from_monday(), e.start_time));

        let mut week: Vec<DaySchedule> = Vec::new();
        for entry in entries {
            match week.last_mut() {
                Some(day) if day.day == entry.day => day.entries.push(entry),
                _ => week.push(DaySchedule {
                    day: entry.day,
                    entries: vec![entry],
                }),
            }
        }
        week
    }
}
