//! Demo records for a dashboard with nothing behind it.
//!
//! Ids are short and stable (`p1`, `c1`, `s1`) so demos and tests can refer
//! to them directly.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};

use crate::services::admissions::{AdmissionApplication, AdmissionStatus};
use crate::services::assignments::{Assignment, AssignmentStatus};
use crate::services::payments::{Payment, PaymentFrequency, PaymentStatus, PaymentType};
use crate::services::resources::{Resource, ResourceKind};
use crate::services::results::{grade_for_score, ExamResult, Term};
use crate::services::timetable::TimetableEntry;

pub const DEMO_SCHOOL: &str = "sch1";

/// Initial contents for every repository a [`Portal`](crate::Portal) owns.
#[derive(Debug, Clone, Default)]
pub struct Seed {
    pub assignments: Vec<Assignment>,
    pub resources: Vec<Resource>,
    pub payments: Vec<Payment>,
    pub payment_types: Vec<PaymentType>,
    pub results: Vec<ExamResult>,
    pub timetable: Vec<TimetableEntry>,
    pub admissions: Vec<AdmissionApplication>,
}

impl Seed {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn demo() -> Self {
        Self {
            assignments: assignments(),
            resources: resources(),
            payments: payments(),
            payment_types: payment_types(),
            results: results(),
            timetable: timetable(),
            admissions: admissions(),
        }
    }
}

fn created() -> DateTime<Utc> {
    DateTime::from_timestamp(1_718_000_000, 0).unwrap_or_default()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn assignments() -> Vec<Assignment> {
    let assignment = |id: &str, title: &str, class_id: &str, teacher_id: &str, status| Assignment {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} for this week"),
        subject_id: "math".to_string(),
        class_id: class_id.to_string(),
        teacher_id: teacher_id.to_string(),
        school_id: DEMO_SCHOOL.to_string(),
        due_date: date(2024, 6, 28),
        max_score: 20,
        status,
        attachments: Vec::new(),
        created_at: created(),
    };

    vec![
        assignment("a1", "Fractions worksheet", "c1", "t1", AssignmentStatus::Published),
        assignment("a2", "Algebra quiz", "c1", "t1", AssignmentStatus::Draft),
        assignment("a3", "Geometry project", "c2", "t2", AssignmentStatus::Closed),
    ]
}

fn resources() -> Vec<Resource> {
    let resource = |id: &str, title: &str, kind, class_ids: &[&str], size_bytes| Resource {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} (shared by the math department)"),
        kind,
        url: format!("https://files.example.com/{id}"),
        class_ids: ids(class_ids),
        subject_id: "math".to_string(),
        teacher_id: "t1".to_string(),
        school_id: DEMO_SCHOOL.to_string(),
        size_bytes,
        created_at: created(),
    };

    vec![
        resource("r1", "Times tables chart", ResourceKind::Image, &["c1", "c2"], Some(204_800)),
        resource("r2", "Fractions explained", ResourceKind::Video, &["c1"], Some(52_428_800)),
        resource("r3", "Geometry slides", ResourceKind::Presentation, &["c2"], Some(1_048_576)),
        resource("r4", "Khan Academy algebra", ResourceKind::Link, &["c1"], None),
    ]
}

fn payment_types() -> Vec<PaymentType> {
    vec![
        PaymentType {
            id: "pt1".to_string(),
            school_id: DEMO_SCHOOL.to_string(),
            name: "Tuition".to_string(),
            amount: 15_000_000,
            frequency: PaymentFrequency::Termly,
            applicable_classes: ids(&["c1", "c2"]),
            mandatory: true,
            created_at: created(),
        },
        PaymentType {
            id: "pt2".to_string(),
            school_id: DEMO_SCHOOL.to_string(),
            name: "School bus".to_string(),
            amount: 2_500_000,
            frequency: PaymentFrequency::Termly,
            applicable_classes: ids(&["c1"]),
            mandatory: false,
            created_at: created(),
        },
    ]
}

fn payments() -> Vec<Payment> {
    let payment = |id: &str, student_id: &str, payment_type_id: &str, amount, status| Payment {
        id: id.to_string(),
        student_id: student_id.to_string(),
        school_id: DEMO_SCHOOL.to_string(),
        payment_type_id: payment_type_id.to_string(),
        description: format!("{payment_type_id} first term"),
        amount,
        due_date: date(2024, 9, 15),
        status,
        paid_date: None,
        reference: None,
        created_at: created(),
    };

    let mut paid = payment("p3", "s1", "pt2", 2_500_000, PaymentStatus::Completed);
    paid.paid_date = Some(created());
    paid.reference = Some("TXN-DEMO0001".to_string());

    vec![
        payment("p1", "s1", "pt1", 15_000_000, PaymentStatus::Pending),
        paid,
        payment("p4", "s2", "pt1", 15_000_000, PaymentStatus::Overdue),
    ]
}

fn results() -> Vec<ExamResult> {
    let result = |id: &str, student_id: &str, subject_id: &str, score: f64, published| ExamResult {
        id: id.to_string(),
        student_id: student_id.to_string(),
        class_id: "c1".to_string(),
        subject_id: subject_id.to_string(),
        school_id: DEMO_SCHOOL.to_string(),
        term: Term::First,
        session: "2023/2024".to_string(),
        score,
        max_score: 100.0,
        grade: grade_for_score(score, 100.0),
        remarks: None,
        published,
        created_at: created(),
    };

    vec![
        result("res1", "s1", "math", 78.0, true),
        result("res2", "s1", "english", 55.0, false),
        result("res3", "s2", "math", 42.0, false),
    ]
}

fn timetable() -> Vec<TimetableEntry> {
    let entry = |id: &str, class_id: &str, subject_id: &str, teacher_id: &str, day, start: (u32, u32)| {
        TimetableEntry {
            id: id.to_string(),
            class_id: class_id.to_string(),
            subject_id: subject_id.to_string(),
            teacher_id: teacher_id.to_string(),
            school_id: DEMO_SCHOOL.to_string(),
            day,
            start_time: time(start.0, start.1),
            end_time: time(start.0 + 1, start.1),
            room: Some(format!("Room {}", &class_id[1..])),
            created_at: created(),
        }
    };

    vec![
        entry("tt1", "c1", "english", "t2", Weekday::Mon, (10, 0)),
        entry("tt2", "c1", "math", "t1", Weekday::Mon, (8, 0)),
        entry("tt3", "c1", "science", "t3", Weekday::Wed, (9, 0)),
        entry("tt4", "c2", "math", "t1", Weekday::Tue, (11, 0)),
    ]
}

fn admissions() -> Vec<AdmissionApplication> {
    let application = |id: &str, applicant_name: &str, status| AdmissionApplication {
        id: id.to_string(),
        school_id: DEMO_SCHOOL.to_string(),
        applicant_name: applicant_name.to_string(),
        date_of_birth: date(2015, 3, 14),
        desired_class: "c1".to_string(),
        guardian_name: format!("Guardian of {applicant_name}"),
        guardian_email: "guardian@example.com".to_string(),
        guardian_phone: "+2348000000000".to_string(),
        previous_school: None,
        status,
        notes: None,
        created_at: created(),
    };

    vec![
        application("adm1", "Ada Obi", AdmissionStatus::Submitted),
        application("adm2", "Tunde Bello", AdmissionStatus::UnderReview),
    ]
}
