mod support;

use campus_core::ErrorKind;
use campus_portal::services::payments::{
    PaymentFilter, PaymentFrequency, PaymentPatch, PaymentStatus, PaymentTypeDraft, PaymentTypeFilter,
    PaymentTypePatch,
};
use serde_json::json;
use tracing_test::traced_test;

use support::demo_portal;

#[tokio::test]
#[traced_test]
async fn make_payment_completes_an_existing_payment() {
    let portal = demo_portal();

    let env = portal.payments.make_payment("p1").await.unwrap();
    assert!(env.is_success());
    assert_eq!(env.message(), Some("Payment successful"));

    let paid = env.into_data().unwrap();
    assert_eq!(paid.status, PaymentStatus::Completed);
    assert!(paid.paid_date.is_some());
    assert!(paid.reference.as_deref().is_some_and(|r| r.starts_with("TXN-")));

    // the change is visible to the next read
    let reread = portal.payments.get("p1").await.unwrap().into_data().unwrap();
    assert_eq!(reread, paid);
    assert!(logs_contain("payment completed"));
}

#[tokio::test]
#[traced_test]
async fn make_payment_on_a_missing_id_is_a_failure_envelope() {
    let portal = demo_portal();

    let env = portal.payments.make_payment("p2").await.unwrap();
    assert!(!env.is_success());
    assert_eq!(env.error(), Some("Payment not found"));
    assert_eq!(env.error_kind(), Some(ErrorKind::NotFound));
    assert_eq!(
        serde_json::to_value(&env).unwrap(),
        json!({"success": false, "error": "Payment not found", "errorKind": "not_found"})
    );
    assert!(logs_contain("Payment not found"));
}

#[tokio::test]
async fn summary_splits_paid_from_outstanding() {
    let portal = demo_portal();

    let summary = portal.payments.summary("s1").await.unwrap().into_data().unwrap();
    assert_eq!(summary.completed_count, 1);
    assert_eq!(summary.outstanding_count, 1);
    assert_eq!(summary.total_paid, 2_500_000);
    assert_eq!(summary.total_outstanding, 15_000_000);

    portal.payments.make_payment("p1").await.unwrap();
    let after = portal.payments.summary("s1").await.unwrap().into_data().unwrap();
    assert_eq!(after.total_outstanding, 0);
    assert_eq!(after.total_paid, 17_500_000);
}

#[tokio::test]
async fn list_filters_by_student_and_status() {
    let portal = demo_portal();

    let s1 = portal
        .payments
        .list(&PaymentFilter::for_student("s1"))
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert!(s1.iter().all(|p| p.student_id == "s1"));
    assert_eq!(s1.len(), 2);

    let overdue = PaymentFilter {
        status: Some(PaymentStatus::Overdue),
        ..Default::default()
    };
    let overdue = portal.payments.list(&overdue).await.unwrap().into_data().unwrap();
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].id, "p4");
}

#[tokio::test]
async fn payment_types_crud() {
    let portal = demo_portal();

    let created = portal
        .payments
        .create_type(PaymentTypeDraft {
            school_id: "sch1".into(),
            name: "Lab fee".into(),
            amount: 500_000,
            frequency: PaymentFrequency::Annually,
            applicable_classes: vec!["c2".into()],
            mandatory: false,
        })
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert!(created.id.starts_with("payment_type_"));

    let for_c2 = PaymentTypeFilter {
        class_id: Some("c2".into()),
        ..Default::default()
    };
    let names: Vec<_> = portal
        .payments
        .list_types(&for_c2)
        .await
        .unwrap()
        .into_data()
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["Tuition".to_string(), "Lab fee".to_string()]);

    let renamed = portal
        .payments
        .update_type(
            &created.id,
            PaymentTypePatch {
                name: Some("Science lab".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(renamed.name, "Science lab");
    assert_eq!(renamed.amount, 500_000);

    assert!(portal.payments.delete_type(&created.id).await.unwrap().is_success());
    let again = portal.payments.delete_type(&created.id).await.unwrap();
    assert_eq!(again.error(), Some("Payment type not found"));
}

#[tokio::test]
async fn payment_store_reconciles_make_payment_in_place() {
    let portal = demo_portal();
    let store = portal.payment_store();

    assert!(store.fetch_student_payments("s1").await);
    let before: Vec<_> = store.snapshot().items.iter().map(|p| p.id.clone()).collect();

    let paid = store.make_payment("p1").await.unwrap();
    assert_eq!(paid.status, PaymentStatus::Completed);

    let state = store.snapshot();
    let after: Vec<_> = state.items.iter().map(|p| p.id.clone()).collect();
    assert_eq!(before, after);
    assert_eq!(state.items[0].status, PaymentStatus::Completed);

    assert!(store.make_payment("p2").await.is_none());
    assert_eq!(store.snapshot().error.as_deref(), Some("Payment not found"));
    assert_eq!(store.snapshot().items, state.items);
}

#[tokio::test]
async fn payment_type_store_lists_a_school_catalogue() {
    let portal = demo_portal();
    let store = portal.payment_type_store();

    assert!(store.fetch_payment_types("sch1").await);
    assert_eq!(store.snapshot().items.len(), 2);

    assert!(store.delete_payment_type("pt2").await);
    assert_eq!(store.snapshot().items.len(), 1);

    assert!(store.fetch_payment_types("other-school").await);
    assert!(store.snapshot().items.is_empty());
}

#[tokio::test]
async fn payment_store_updates_in_place() {
    let portal = demo_portal();
    let store = portal.payment_store();
    assert!(store.fetch_student_payments("s1").await);

    let patch = PaymentPatch {
        description: Some("Tuition, first term (discounted)".into()),
        amount: Some(12_000_000),
        ..Default::default()
    };
    let updated = store.update_payment("p1", patch).await.unwrap();
    assert_eq!(updated.amount, 12_000_000);
    assert_eq!(updated.status, PaymentStatus::Pending);

    let state = store.snapshot();
    assert_eq!(state.items[0], updated);
    assert_eq!(state.items.len(), 2);

    assert!(store.update_payment("p2", PaymentPatch::default()).await.is_none());
    assert_eq!(store.snapshot().error.as_deref(), Some("Payment not found"));
}
