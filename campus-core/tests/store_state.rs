mod support;

use std::sync::Arc;
use std::time::Duration;

use campus_core::{Envelope, Store, StorePolicy, NETWORK_ERROR_MESSAGE};
use tokio::sync::oneshot;

use support::{draft, note, service_with, BrokenRepository, Note, NotePatch};

#[tokio::test]
async fn fetch_replaces_items_and_clears_loading() {
    let svc = service_with(vec![note("note_1", "c1", "a"), note("note_2", "c2", "b")]);
    let store: Store<Note> = Store::new("notes");

    assert!(store.fetch(svc.list(&())).await);

    let state = store.snapshot();
    assert_eq!(state.items.len(), 2);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn loading_is_visible_while_the_call_is_pending() {
    let store: Store<Note> = Store::new("notes");
    let mut rx = store.subscribe();
    let (tx, pending) = oneshot::channel::<Envelope<Vec<Note>>>();

    let fetch = store.fetch(async move { Ok::<_, anyhow::Error>(pending.await.unwrap()) });
    let observe = async {
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_loading);
        tx.send(Envelope::ok(vec![note("note_1", "c1", "a")])).unwrap();
        rx.changed().await.unwrap();
        let state = rx.borrow_and_update().clone();
        assert!(!state.is_loading);
        assert_eq!(state.items.len(), 1);
    };

    let (applied, ()) = tokio::join!(fetch, observe);
    assert!(applied);
}

#[tokio::test]
async fn failure_envelope_sets_error_and_keeps_items() {
    let svc = service_with(vec![note("note_1", "c1", "a")]);
    let store: Store<Note> = Store::new("notes");
    store.fetch(svc.list(&())).await;

    let ok = store
        .update(svc.update("note_missing", NotePatch::default()))
        .await;
    assert!(ok.is_none());

    let state = store.snapshot();
    assert_eq!(state.error.as_deref(), Some("Note not found"));
    assert_eq!(state.items.len(), 1);
    assert!(!state.is_loading);

    store.clear_error();
    let cleared = store.snapshot();
    assert!(cleared.error.is_none());
    assert_eq!(cleared.items, state.items);
}

#[tokio::test]
async fn thrown_calls_become_the_generic_network_error() {
    let svc = campus_core::CrudService::<Note>::new(
        "notes",
        Arc::new(BrokenRepository),
        campus_core::Latency::none(),
    );
    let store: Store<Note> = Store::new("notes");

    assert!(!store.fetch(svc.list(&())).await);
    assert_eq!(store.error().as_deref(), Some(NETWORK_ERROR_MESSAGE));
    assert!(!store.is_loading());
}

#[tokio::test]
async fn mutations_reconcile_locally() {
    let svc = service_with(vec![note("note_1", "c1", "a"), note("note_2", "c1", "b")]);
    let store: Store<Note> = Store::new("notes");
    store.fetch(svc.list(&())).await;

    let created = store.create(svc.create(draft("c1", "c"))).await.unwrap();
    assert_eq!(store.items().last().map(|n| n.id.clone()), Some(created.id.clone()));

    store
        .update(svc.update(
            "note_1",
            NotePatch {
                title: Some("renamed".into()),
                body: None,
            },
        ))
        .await
        .unwrap();
    assert_eq!(store.items()[0].title, "renamed");
    assert_eq!(store.items()[0].id, "note_1");

    assert!(store.remove("note_2", svc.delete("note_2")).await);
    let ids: Vec<_> = store.items().into_iter().map(|n| n.id).collect();
    assert_eq!(ids, vec!["note_1".to_string(), created.id]);

    // second delete fails and leaves items alone
    assert!(!store.remove("note_2", svc.delete("note_2")).await);
    assert_eq!(store.items().len(), 2);
}

/// Two overlapping fetches where the second one resolves first.
async fn overlapping_fetches(store: &Store<Note>) {
    let (tx_first, first) = oneshot::channel::<Envelope<Vec<Note>>>();
    let (tx_second, second) = oneshot::channel::<Envelope<Vec<Note>>>();

    let fetch_first = store.fetch(async move { Ok::<_, anyhow::Error>(first.await.unwrap()) });
    let fetch_second = store.fetch(async move { Ok::<_, anyhow::Error>(second.await.unwrap()) });
    let mut rx = store.subscribe();
    let resolve = async move {
        tx_second
            .send(Envelope::ok(vec![note("second", "c1", "newer request")]))
            .unwrap();
        rx.wait_for(|s| s.items.iter().any(|n| n.id == "second"))
            .await
            .unwrap();
        tx_first
            .send(Envelope::ok(vec![note("first", "c1", "older request")]))
            .unwrap();
    };

    tokio::join!(fetch_first, fetch_second, resolve);
}

#[tokio::test]
async fn overlapping_fetches_are_last_write_wins_by_default() {
    let store: Store<Note> = Store::new("notes");
    assert_eq!(store.policy(), StorePolicy::LastWriteWins);

    overlapping_fetches(&store).await;

    let items = store.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "first");
    assert!(!store.is_loading());
}

#[tokio::test]
async fn latest_request_policy_drops_stale_responses() {
    let store: Store<Note> = Store::with_policy("notes", StorePolicy::LatestRequestWins);

    overlapping_fetches(&store).await;

    let items = store.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "second");
    assert!(!store.is_loading());
}

#[tokio::test]
async fn loading_stays_on_until_every_overlapping_call_finishes() {
    let store: Store<Note> = Store::new("notes");
    let (tx_a, a) = oneshot::channel::<Envelope<Vec<Note>>>();
    let (tx_b, b) = oneshot::channel::<Envelope<Vec<Note>>>();

    let fetch_a = store.fetch(async move { Ok::<_, anyhow::Error>(a.await.unwrap()) });
    let fetch_b = store.fetch(async move { Ok::<_, anyhow::Error>(b.await.unwrap()) });
    let drive = async {
        tokio::task::yield_now().await;
        tx_a.send(Envelope::ok(vec![])).unwrap();
        tokio::task::yield_now().await;
        assert!(store.is_loading());
        tx_b.send(Envelope::ok(vec![])).unwrap();
    };

    tokio::join!(fetch_a, fetch_b, drive);
    assert!(!store.is_loading());
}

#[tokio::test(start_paused = true)]
async fn a_cancelled_call_releases_the_loading_flag() {
    let store: Store<Note> = Store::new("notes");

    let pending = std::future::pending::<anyhow::Result<Envelope<Vec<Note>>>>();
    let timed_out = tokio::time::timeout(Duration::from_millis(10), store.fetch(pending)).await;
    assert!(timed_out.is_err());
    assert!(!store.is_loading());

    assert!(
        store
            .fetch(async { Ok::<_, anyhow::Error>(Envelope::ok(vec![note("note_1", "c1", "a")])) })
            .await
    );
    let state = store.snapshot();
    assert_eq!(state.items.len(), 1);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn a_cancelled_call_does_not_end_loading_for_one_still_running() {
    let store: Store<Note> = Store::new("notes");
    let (tx, slow) = oneshot::channel::<Envelope<Vec<Note>>>();

    let slow_fetch = store.fetch(async move { Ok::<_, anyhow::Error>(slow.await.unwrap()) });
    let cancelled = async {
        let abandoned = store.fetch(std::future::pending::<anyhow::Result<Envelope<Vec<Note>>>>());
        tokio::select! {
            _ = abandoned => unreachable!(),
            _ = tokio::task::yield_now() => {}
        }
        assert!(store.is_loading());
        tx.send(Envelope::ok(vec![])).unwrap();
    };

    let (applied, ()) = tokio::join!(slow_fetch, cancelled);
    assert!(applied);
    assert!(!store.is_loading());
}
