use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// One entity type held in a backing collection.
///
/// - `Draft` is the creation input (everything except `id` and `created_at`)
/// - `Patch` is a shallow partial update: `None` fields are left alone
pub trait Record: Clone + Send + Sync + 'static {
    type Draft: Send + 'static;
    type Patch: Clone + Send + Sync + 'static;

    /// Id prefix, e.g. `"resource"` for `resource_1718000000000`.
    const PREFIX: &'static str;

    /// Human label used in messages, e.g. `"Resource"`.
    const LABEL: &'static str;

    fn id(&self) -> &str;

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

    fn apply(&mut self, patch: Self::Patch);

    fn not_found_message() -> String {
        format!("{} not found", Self::LABEL)
    }
}

/// Selects records during `list`. The unit filter `()` selects everything.
pub trait RecordFilter<R>: Send + Sync {
    fn matches(&self, record: &R) -> bool;
}

impl<R> RecordFilter<R> for () {
    fn matches(&self, _record: &R) -> bool {
        true
    }
}

/// Equality on an optional filter field. `None` matches anything.
pub fn field_eq(wanted: Option<&str>, actual: &str) -> bool {
    wanted.map_or(true, |w| w == actual)
}

/// Containment on an array-valued field. `None` matches anything.
pub fn field_contains(wanted: Option<&str>, actual: &[String]) -> bool {
    wanted.map_or(true, |w| actual.iter().any(|v| v == w))
}

/// Case-insensitive substring match for free-text search.
pub fn text_contains(needle: Option<&str>, haystack: &str) -> bool {
    match needle.map(str::trim) {
        None | Some("") => true,
        Some(n) => haystack.to_lowercase().contains(&n.to_lowercase()),
    }
}

/// Shallow merge: copy every `Some` field of a patch onto the record.
///
/// ```ignore
/// merge_fields!(self => patch; title, description, due_date);
/// ```
#[macro_export]
macro_rules! merge_fields {
    ($target:expr => $patch:expr ; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )+
    };
}

static LAST_ID_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Mint `"<prefix>_<millis>"`.
///
/// Ids are time-derived. Within one process the millisecond component is
/// strictly increasing, so two calls in the same millisecond still differ.
pub fn next_id(prefix: &str, now: DateTime<Utc>) -> String {
    let wanted = now.timestamp_millis();
    let mut last = LAST_ID_MILLIS.load(Ordering::Relaxed);
    loop {
        let next = wanted.max(last + 1);
        match LAST_ID_MILLIS.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return format!("{prefix}_{next}"),
            Err(actual) => last = actual,
        }
    }
}
