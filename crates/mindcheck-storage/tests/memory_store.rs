use mindcheck_core::models::features::FeatureVector;
use mindcheck_core::models::prediction::PredictionResult;
use mindcheck_core::models::result::{RecordId, ResultFilter, TestResultRecord};
use mindcheck_core::models::user::UserRef;
use mindcheck_storage::ResultStore;
use mindcheck_storage::error::StorageError;

fn user(id: &str, name: &str) -> UserRef {
    UserRef {
        id: id.to_string(),
        username: name.to_string(),
    }
}

fn prediction(label: &str) -> PredictionResult {
    PredictionResult {
        predicted_disorder: label.to_string(),
        description: format!("{label} description"),
        suggestions: vec!["Rest".to_string()],
        video: String::new(),
    }
}

fn answers(age: f64) -> FeatureVector {
    let mut indicators = [false; 27];
    indicators[3] = true;
    FeatureVector::from_answers(age, indicators)
}

#[tokio::test]
async fn fresh_user_has_no_results() {
    let store = ResultStore::memory();
    assert!(store.list_by_user("nobody").await.unwrap().is_empty());
}

#[tokio::test]
async fn append_stores_exact_answers() {
    let store = ResultStore::memory();
    let alice = user("u-1", "alice");
    let submitted = answers(33.0);

    let id = store
        .append(Some(&alice), &prediction("Anxiety"), &submitted)
        .await
        .unwrap();

    let record = store.get_by_id(id).await.unwrap();
    assert_eq!(record.answers, submitted);
    assert_eq!(record.predicted_disorder, "Anxiety");
    assert_eq!(record.owner_name(), "alice");
}

#[tokio::test]
async fn results_are_scoped_to_their_owner() {
    let store = ResultStore::memory();
    let alice = user("u-1", "alice");
    let bob = user("u-2", "bob");

    store.append(Some(&alice), &prediction("Anxiety"), &answers(30.0)).await.unwrap();
    store.append(Some(&bob), &prediction("Bipolar"), &answers(40.0)).await.unwrap();
    store.append(Some(&alice), &prediction("Loneliness"), &answers(31.0)).await.unwrap();

    let mine = store.list_by_user("u-1").await.unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|r| r.is_owned_by("u-1")));
    assert_eq!(store.list_by_user("u-2").await.unwrap().len(), 1);
}

#[tokio::test]
async fn listing_is_newest_first() {
    let store = ResultStore::memory();
    let alice = user("u-1", "alice");
    let t1 = jiff::Timestamp::from_second(1_700_000_000).unwrap();
    let t2 = jiff::Timestamp::from_second(1_700_000_100).unwrap();
    let t3 = jiff::Timestamp::from_second(1_700_000_200).unwrap();

    for (created_at, label) in [(t2, "second"), (t1, "first"), (t3, "third")] {
        let mut record = TestResultRecord::new(Some(alice.clone()), &prediction(label), answers(30.0));
        record.created_at = created_at;
        store.insert(record).await.unwrap();
    }

    let labels: Vec<String> = store
        .list_by_user("u-1")
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.predicted_disorder)
        .collect();
    assert_eq!(labels, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn same_instant_falls_back_to_creation_order() {
    let store = ResultStore::memory();
    let alice = user("u-1", "alice");
    let instant = jiff::Timestamp::from_second(1_700_000_000).unwrap();

    let mut ids: Vec<RecordId> = Vec::new();
    for _ in 0..3 {
        let mut record = TestResultRecord::new(Some(alice.clone()), &prediction("Anxiety"), answers(30.0));
        record.created_at = instant;
        ids.push(record.id);
        store.insert(record).await.unwrap();
    }
    ids.reverse();

    let listed: Vec<RecordId> = store
        .list_by_user("u-1")
        .await
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let store = ResultStore::memory();
    let err = store.get_by_id(RecordId::generate()).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn guest_records_have_no_owner() {
    let store = ResultStore::memory();
    let id = store.append(None, &prediction("Anxiety"), &answers(20.0)).await.unwrap();

    let record = store.get_by_id(id).await.unwrap();
    assert!(record.user.is_none());
    assert_eq!(record.owner_name(), "Guest");
}

#[tokio::test]
async fn detaching_a_user_keeps_records_but_drops_ownership() {
    let store = ResultStore::memory();
    let alice = user("u-1", "alice");
    let bob = user("u-2", "bob");
    let first = store.append(Some(&alice), &prediction("Anxiety"), &answers(30.0)).await.unwrap();
    store.append(Some(&alice), &prediction("Bipolar"), &answers(30.0)).await.unwrap();
    store.append(Some(&bob), &prediction("Bipolar"), &answers(30.0)).await.unwrap();

    assert_eq!(store.detach_user("u-1").await.unwrap(), 2);

    assert!(store.list_by_user("u-1").await.unwrap().is_empty());
    assert_eq!(store.list_by_user("u-2").await.unwrap().len(), 1);
    let orphan = store.get_by_id(first).await.unwrap();
    assert_eq!(orphan.owner_name(), "Guest");
    assert_eq!(orphan.predicted_disorder, "Anxiety");
}

#[tokio::test]
async fn concurrent_appends_are_all_kept() {
    let store = std::sync::Arc::new(ResultStore::memory());
    let alice = user("u-1", "alice");

    let mut handles = Vec::new();
    for i in 0..16 {
        let store = store.clone();
        let alice = alice.clone();
        handles.push(tokio::spawn(async move {
            store
                .append(Some(&alice), &prediction("Anxiety"), &answers(f64::from(i)))
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.list_by_user("u-1").await.unwrap().len(), 16);
}

#[tokio::test]
async fn list_all_spans_users_and_applies_filter() {
    let store = ResultStore::memory();
    let alice = user("u-1", "alice");
    let bob = user("u-2", "bob");
    store.append(Some(&alice), &prediction("Anxiety"), &answers(30.0)).await.unwrap();
    store.append(Some(&bob), &prediction("Bipolar"), &answers(40.0)).await.unwrap();
    let guest = store.append(None, &prediction("Anxiety"), &answers(50.0)).await.unwrap();

    let everything = store.list_all(&ResultFilter::default()).await.unwrap();
    assert_eq!(everything.len(), 3);
    assert_eq!(everything[0].id, guest);

    let anxiety = ResultFilter {
        label: Some("anxiety".to_string()),
        ..ResultFilter::default()
    };
    assert_eq!(store.list_all(&anxiety).await.unwrap().len(), 2);

    let bobs = ResultFilter {
        username: Some("bob".to_string()),
        ..ResultFilter::default()
    };
    let found = store.list_all(&bobs).await.unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].is_owned_by("u-2"));
}
