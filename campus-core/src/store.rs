//! Client state stores.
//!
//! A [`Store`] mirrors one collection into UI-observable state:
//! `{ items, is_loading, error }`. Every action brackets a service call with
//! the loading flag, then reduces the envelope into state. Nothing is applied
//! optimistically: on failure `items` stay exactly as they were.
//!
//! State lives in a `tokio::sync::watch` channel. Observers call
//! [`Store::subscribe`] and see every transition; no lock is held across
//! an `.await`.

use std::future::Future;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use anyhow::Result;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::config::PortalConfigSnapshot;
use crate::envelope::Envelope;
use crate::record::Record;

/// Error text shown when a service call fails outright.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// What to do when fetches overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorePolicy {
    /// Every response is applied as it arrives; the last one to resolve wins.
    #[default]
    LastWriteWins,
    /// Each fetch takes a sequence number; a response from a fetch that has
    /// since been superseded is dropped. Mutations are always applied.
    LatestRequestWins,
}

impl StorePolicy {
    /// `store.policy` = `last_write_wins` | `latest_request_wins`.
    pub fn from_config(config: &PortalConfigSnapshot) -> Self {
        match config.get("store.policy").map(str::trim) {
            Some("latest_request_wins") | Some("latest") => StorePolicy::LatestRequestWins,
            _ => StorePolicy::LastWriteWins,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreState<R> {
    pub items: Vec<R>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<R> Default for StoreState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            error: None,
        }
    }
}

pub struct Store<R: Record> {
    name: &'static str,
    policy: StorePolicy,
    state: watch::Sender<StoreState<R>>,
    in_flight: AtomicUsize,
    fetch_seq: AtomicU64,
}

impl<R: Record> Store<R> {
    pub fn new(name: &'static str) -> Self {
        Self::with_policy(name, StorePolicy::default())
    }

    pub fn with_policy(name: &'static str, policy: StorePolicy) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self {
            name,
            policy,
            state,
            in_flight: AtomicUsize::new(0),
            fetch_seq: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn policy(&self) -> StorePolicy {
        self.policy
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreState<R>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> StoreState<R> {
        self.state.borrow().clone()
    }

    pub fn items(&self) -> Vec<R> {
        self.state.borrow().items.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn clear_error(&self) {
        self.state.send_modify(|s| s.error = None);
    }

    /// Replace `items` with the listed records.
    ///
    /// Returns `true` when the response was applied as a success.
    pub async fn fetch<Fut>(&self, call: Fut) -> bool
    where
        Fut: Future<Output = Result<Envelope<Vec<R>>>>,
    {
        let ticket = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let bracket = self.begin();
        debug!(store = self.name, ticket, "fetch started");

        let outcome = call.await;

        if self.policy == StorePolicy::LatestRequestWins
            && self.fetch_seq.load(Ordering::SeqCst) != ticket
        {
            debug!(store = self.name, ticket, "stale fetch response dropped");
            bracket.close(|_| {});
            return false;
        }

        self.settle(bracket, outcome, |items, data| *items = data)
    }

    /// Append the created record. Returns it on success.
    pub async fn create<Fut>(&self, call: Fut) -> Option<R>
    where
        Fut: Future<Output = Result<Envelope<R>>>,
    {
        let bracket = self.begin();
        let outcome = call.await;

        let mut created = None;
        self.settle(bracket, outcome, |items, record| {
            created = Some(record.clone());
            items.push(record);
        });
        created
    }

    /// Replace the record with the same id in place. Returns it on success.
    pub async fn update<Fut>(&self, call: Fut) -> Option<R>
    where
        Fut: Future<Output = Result<Envelope<R>>>,
    {
        let bracket = self.begin();
        let outcome = call.await;

        let mut updated = None;
        self.settle(bracket, outcome, |items, record| {
            replace_by_id(items, &record);
            updated = Some(record);
        });
        updated
    }

    /// Replace every returned record in place, e.g. after a bulk publish.
    pub async fn update_many<Fut>(&self, call: Fut) -> Option<Vec<R>>
    where
        Fut: Future<Output = Result<Envelope<Vec<R>>>>,
    {
        let bracket = self.begin();
        let outcome = call.await;

        let mut updated = None;
        self.settle(bracket, outcome, |items, records| {
            for record in &records {
                replace_by_id(items, record);
            }
            updated = Some(records);
        });
        updated
    }

    /// Drop the record with `id` from `items` once the call succeeds.
    pub async fn remove<Fut>(&self, id: &str, call: Fut) -> bool
    where
        Fut: Future<Output = Result<Envelope<()>>>,
    {
        let bracket = self.begin();
        let outcome = call.await;

        self.settle(bracket, outcome, |items, ()| items.retain(|r| r.id() != id))
    }

    /// Open a loading bracket. It closes when the returned guard is closed
    /// or dropped, so a cancelled action still releases `is_loading`.
    fn begin(&self) -> LoadingBracket<'_, R> {
        self.state.send_modify(|s| {
            self.in_flight.fetch_add(1, Ordering::SeqCst);
            s.is_loading = true;
            s.error = None;
        });
        LoadingBracket {
            store: self,
            open: true,
        }
    }

    /// Apply `f` and release one in-flight slot in the same state transition.
    fn release(&self, f: impl FnOnce(&mut StoreState<R>)) {
        self.state.send_modify(|s| {
            f(s);
            let left = self.in_flight.fetch_sub(1, Ordering::SeqCst).saturating_sub(1);
            s.is_loading = left > 0;
        });
    }

    fn settle<T>(
        &self,
        bracket: LoadingBracket<'_, R>,
        outcome: Result<Envelope<T>>,
        reduce: impl FnOnce(&mut Vec<R>, T),
    ) -> bool {
        match outcome {
            Ok(Envelope::Success { data, .. }) => {
                bracket.close(|s| reduce(&mut s.items, data));
                true
            }
            Ok(Envelope::Failure { error, .. }) => {
                warn!(store = self.name, %error, "service reported failure");
                bracket.close(|s| s.error = Some(error));
                false
            }
            Err(err) => {
                warn!(store = self.name, error = %err, "service call failed");
                bracket.close(|s| s.error = Some(NETWORK_ERROR_MESSAGE.to_string()));
                false
            }
        }
    }
}

/// One in-flight action. Dropping it unclosed (the action's future was
/// cancelled) releases its slot without touching `items` or `error`.
struct LoadingBracket<'a, R: Record> {
    store: &'a Store<R>,
    open: bool,
}

impl<R: Record> LoadingBracket<'_, R> {
    fn close(mut self, f: impl FnOnce(&mut StoreState<R>)) {
        self.open = false;
        self.store.release(f);
    }
}

impl<R: Record> Drop for LoadingBracket<'_, R> {
    fn drop(&mut self) {
        if self.open {
            debug!(store = self.store.name, "action dropped before completion");
            self.store.release(|_| {});
        }
    }
}

fn replace_by_id<R: Record>(items: &mut [R], record: &R) {
    if let Some(slot) = items.iter_mut().find(|r| r.id() == record.id()) {
        *slot = record.clone();
    }
}
