//! What the dashboard renders, reduced to plain data.
//!
//! Nothing here holds state; every helper is a function of its inputs.

use campus_core::StoreState;
use serde::Serialize;

use crate::services::admissions::AdmissionStatus;
use crate::services::assignments::AssignmentStatus;
use crate::services::payments::PaymentStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

/// A status that can be shown as a coloured badge.
pub trait BadgeStatus {
    fn badge_label(&self) -> &'static str;
    fn badge_variant(&self) -> BadgeVariant;
}

impl BadgeStatus for PaymentStatus {
    fn badge_label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Completed => "Paid",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Overdue => "Overdue",
        }
    }

    fn badge_variant(&self) -> BadgeVariant {
        match self {
            PaymentStatus::Pending => BadgeVariant::Warning,
            PaymentStatus::Completed => BadgeVariant::Success,
            PaymentStatus::Failed | PaymentStatus::Overdue => BadgeVariant::Danger,
        }
    }
}

impl BadgeStatus for AssignmentStatus {
    fn badge_label(&self) -> &'static str {
        match self {
            AssignmentStatus::Draft => "Draft",
            AssignmentStatus::Published => "Published",
            AssignmentStatus::Closed => "Closed",
        }
    }

    fn badge_variant(&self) -> BadgeVariant {
        match self {
            AssignmentStatus::Draft => BadgeVariant::Neutral,
            AssignmentStatus::Published => BadgeVariant::Success,
            AssignmentStatus::Closed => BadgeVariant::Info,
        }
    }
}

impl BadgeStatus for AdmissionStatus {
    fn badge_label(&self) -> &'static str {
        match self {
            AdmissionStatus::Submitted => "Submitted",
            AdmissionStatus::UnderReview => "Under review",
            AdmissionStatus::Accepted => "Accepted",
            AdmissionStatus::Rejected => "Rejected",
        }
    }

    fn badge_variant(&self) -> BadgeVariant {
        match self {
            AdmissionStatus::Submitted => BadgeVariant::Info,
            AdmissionStatus::UnderReview => BadgeVariant::Warning,
            AdmissionStatus::Accepted => BadgeVariant::Success,
            AdmissionStatus::Rejected => BadgeVariant::Danger,
        }
    }
}

/// Results are either visible to students or not yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Published(pub bool);

impl BadgeStatus for Published {
    fn badge_label(&self) -> &'static str {
        if self.0 {
            "Published"
        } else {
            "Unpublished"
        }
    }

    fn badge_variant(&self) -> BadgeVariant {
        if self.0 {
            BadgeVariant::Success
        } else {
            BadgeVariant::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub variant: BadgeVariant,
}

impl StatusBadge {
    pub fn of(status: &impl BadgeStatus) -> Self {
        Self {
            label: status.badge_label(),
            variant: status.badge_variant(),
        }
    }
}

/// A link or button shown in a page header or empty state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub label: String,
    pub href: String,
}

impl Action {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageHeader {
    pub title: String,
    pub description: Option<String>,
    pub back_href: Option<String>,
    pub actions: Vec<Action>,
}

impl PageHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            back_href: None,
            actions: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn back(mut self, href: impl Into<String>) -> Self {
        self.back_href = Some(href.into());
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub icon: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub action: Option<Action>,
}

impl EmptyState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            icon: None,
            title: title.into(),
            description: None,
            action: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }
}

/// Which of the four list-page shapes to draw for a store snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<'a, R> {
    Loading,
    Error(&'a str),
    Empty,
    Ready(&'a [R]),
}

impl<'a, R> LoadState<'a, R> {
    /// Loading wins over an error left from an earlier call.
    pub fn of(state: &'a StoreState<R>) -> Self {
        if state.is_loading {
            LoadState::Loading
        } else if let Some(error) = state.error.as_deref() {
            LoadState::Error(error)
        } else if state.items.is_empty() {
            LoadState::Empty
        } else {
            LoadState::Ready(&state.items)
        }
    }
}

/// Minor units to a display amount, e.g. `150000` → `"1,500.00"`.
pub fn format_amount(minor: u64) -> String {
    let whole = (minor / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped}.{:02}", minor % 100)
}
