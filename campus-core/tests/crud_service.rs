mod support;

use std::sync::Arc;
use std::time::Duration;

use campus_core::{CrudService, ErrorKind, Latency, OperationWeight, PortalError, Repository};

use support::{draft, note, service_with, BrokenRepository, Note, NoteFilter, NotePatch};

#[tokio::test]
async fn create_appends_with_fresh_prefixed_id() {
    let svc = service_with(vec![note("note_1", "c1", "Existing")]);

    let first = svc.create(draft("c1", "Algebra")).await.unwrap();
    let second = svc.create(draft("c1", "Geometry")).await.unwrap();

    assert!(first.is_success());
    let a = first.into_data().unwrap();
    let b = second.into_data().unwrap();
    assert!(a.id.starts_with("note_"));
    assert_ne!(a.id, b.id);
    assert_ne!(a.id, "note_1");

    let all = svc.list(&()).await.unwrap().into_data().unwrap();
    let ids: Vec<_> = all.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["note_1", a.id.as_str(), b.id.as_str()]);
}

#[tokio::test(start_paused = true)]
async fn concurrent_creates_never_share_an_id() {
    let svc = CrudService::<Note>::new(
        "notes",
        Arc::new(campus_core::MemoryRepository::new()),
        Latency::default(),
    );

    let created = futures::future::join_all((0..20).map(|i| svc.create(draft("c1", &format!("n{i}"))))).await;
    let mut ids: Vec<_> = created
        .into_iter()
        .map(|env| env.unwrap().into_data().unwrap().id)
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
    assert_eq!(svc.repository().count().await.unwrap(), 20);
}

#[tokio::test]
async fn update_merges_only_given_fields() {
    let svc = service_with(vec![note("note_1", "c1", "Old title")]);

    let env = svc
        .update(
            "note_1",
            NotePatch {
                body: Some("new body".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let updated = env.into_data().unwrap();
    assert_eq!(updated.title, "Old title");
    assert_eq!(updated.body, "new body");
    assert_eq!(updated.class_id, "c1");

    let again = svc
        .update(
            "note_1",
            NotePatch {
                body: Some("new body".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(again, updated);
}

#[tokio::test]
async fn missing_ids_fail_without_touching_the_collection() {
    let svc = service_with(vec![note("note_1", "c1", "Keep me")]);
    let before: Vec<Note> = svc.list(&()).await.unwrap().into_data().unwrap();

    let upd = svc
        .update("note_404", NotePatch { title: Some("x".into()), body: None })
        .await
        .unwrap();
    assert!(!upd.is_success());
    assert_eq!(upd.error(), Some("Note not found"));
    assert_eq!(upd.error_kind(), Some(ErrorKind::NotFound));

    let del = svc.delete("note_404").await.unwrap();
    assert_eq!(del.error(), Some("Note not found"));

    let after: Vec<Note> = svc.list(&()).await.unwrap().into_data().unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn double_delete_reports_not_found_the_second_time() {
    let svc = service_with(vec![note("note_1", "c1", "a"), note("note_2", "c1", "b")]);

    assert!(svc.delete("note_1").await.unwrap().is_success());
    let second = svc.delete("note_1").await.unwrap();
    assert!(!second.is_success());
    assert_eq!(second.error(), Some("Note not found"));

    assert_eq!(svc.repository().count().await.unwrap(), 1);
}

#[tokio::test]
async fn list_filters_by_equality_containment_and_search() {
    let mut tagged = note("note_3", "c2", "Chemistry lab");
    tagged.tags = vec!["lab".into(), "science".into()];
    let svc = service_with(vec![
        note("note_1", "c1", "Algebra"),
        note("note_2", "c1", "Biology"),
        tagged,
    ]);

    let by_class = svc
        .list(&NoteFilter { class_id: Some("c1".into()), ..Default::default() })
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(by_class.len(), 2);
    assert!(by_class.iter().all(|n| n.class_id == "c1"));

    let by_tag = svc
        .list(&NoteFilter { tag: Some("science".into()), ..Default::default() })
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].id, "note_3");

    let by_text = svc
        .list(&NoteFilter { search: Some("bio".into()), ..Default::default() })
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(by_text[0].id, "note_2");

    let everything = svc.list(&NoteFilter::default()).await.unwrap().into_data().unwrap();
    assert_eq!(everything.len(), 3);
}

#[tokio::test]
async fn backend_failures_are_errors_not_envelopes() {
    let svc: CrudService<Note> = CrudService::new("notes", Arc::new(BrokenRepository), Latency::none());

    let err = svc.list(&()).await.unwrap_err();
    assert_eq!(err.to_string(), "connection reset");

    // not overridden by the broken backend
    let err = svc.get("note_1").await.unwrap_err();
    let portal = PortalError::from_anyhow(&err).unwrap();
    assert_eq!(portal.kind, ErrorKind::NotImplemented);
}

#[tokio::test(start_paused = true)]
async fn every_operation_waits_for_its_weight() {
    let latency = Latency::default()
        .with_weight(OperationWeight::Light, Duration::from_millis(500))
        .with_weight(OperationWeight::Standard, Duration::from_millis(1000))
        .with_weight(OperationWeight::Transfer, Duration::from_millis(2000));
    let svc: CrudService<Note> = CrudService::new(
        "notes",
        Arc::new(campus_core::MemoryRepository::new()),
        latency,
    );

    let start = tokio::time::Instant::now();
    svc.list(&()).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(500));

    let start = tokio::time::Instant::now();
    svc.create(draft("c1", "x")).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(1000));

    let start = tokio::time::Instant::now();
    svc.create_weighted(draft("c1", "y"), OperationWeight::Transfer)
        .await
        .unwrap();
    assert!(start.elapsed() >= Duration::from_millis(2000));
}
