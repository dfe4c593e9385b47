use pretty_assertions::assert_eq;
use slotbook_core::{errors::BookingError, models::booking::Booking};
use slotbook_db::store::{
    BookingStore, JsonFileBookingStore, MemoryBookingStore, PersistedBookings,
};
use tempfile::TempDir;

fn booking(slot: &str, code: &str) -> Booking {
    Booking {
        name: format!("Student {code}"),
        student_number: format!("s{code}"),
        company: None,
        notes: None,
        slot: slot.to_string(),
        code: code.to_string(),
    }
}

fn codes(bookings: &[Booking]) -> Vec<&str> {
    bookings.iter().map(|b| b.code.as_str()).collect()
}

/// Behaviour every backend has to share
async fn exercise_store(store: &dyn BookingStore) {
    store.add(booking("2025-01-25 - 10:10", "A1")).await.unwrap();
    store.add(booking("2025-01-25 - 10:35", "B2")).await.unwrap();
    store.add(booking("2025-01-26 - 14:10", "C3")).await.unwrap();
    assert_eq!(codes(&store.list().await.unwrap()), vec!["A1", "B2", "C3"]);

    // duplicate codes are refused
    let err = store
        .add(booking("2025-02-01 - 10:10", "B2"))
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::DuplicateCode(code) if code == "B2"));

    // replace keeps position
    let moved = booking("2025-02-01 - 11:00", "B2");
    assert!(store.replace("B2", moved.clone()).await.unwrap());
    let listed = store.list().await.unwrap();
    assert_eq!(codes(&listed), vec!["A1", "B2", "C3"]);
    assert_eq!(listed[1], moved);

    // replace may not steal another booking's code
    let err = store
        .replace("A1", booking("2025-01-25 - 10:10", "C3"))
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::DuplicateCode(_)));

    let missing = booking("2025-01-25 - 10:10", "ZZ");
    assert!(!store.replace("ZZ", missing).await.unwrap());

    assert_eq!(
        store.get("C3").await.unwrap().map(|b| b.slot),
        Some("2025-01-26 - 14:10".to_string())
    );
    assert_eq!(store.get("ZZ").await.unwrap(), None);

    assert!(store.remove("A1").await.unwrap());
    assert!(!store.remove("A1").await.unwrap());
    assert_eq!(codes(&store.list().await.unwrap()), vec!["B2", "C3"]);
}

#[tokio::test]
async fn test_memory_store() {
    let store = MemoryBookingStore::new();
    exercise_store(&store).await;
}

#[tokio::test]
async fn test_memory_store_with_existing_bookings() {
    let store = MemoryBookingStore::with_bookings(vec![booking("2025-01-25 - 10:10", "A1")]);
    assert_eq!(codes(&store.list().await.unwrap()), vec!["A1"]);
}

#[tokio::test]
async fn test_json_store() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileBookingStore::open(dir.path().join("bookings.json"))
        .await
        .unwrap();
    exercise_store(&store).await;
}

#[tokio::test]
async fn test_json_store_starts_empty_without_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.json");

    let store = JsonFileBookingStore::open(&path).await.unwrap();

    assert!(store.list().await.unwrap().is_empty());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_json_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bookings.json");

    {
        let store = JsonFileBookingStore::open(&path).await.unwrap();
        store.add(booking("2025-02-08 - 15:00", "E5")).await.unwrap();
        store.add(booking("2025-02-09 - 16:40", "F6")).await.unwrap();
        store.remove("E5").await.unwrap();
    }

    let reopened = JsonFileBookingStore::open(&path).await.unwrap();
    assert_eq!(codes(&reopened.list().await.unwrap()), vec!["F6"]);
}

#[tokio::test]
async fn test_json_store_persists_only_bookings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bookings.json");
    let store = JsonFileBookingStore::open(&path).await.unwrap();
    store.add(booking("2025-01-25 - 10:10", "A1")).await.unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["bookings"]);
    assert_eq!(value["bookings"][0]["slot"], "2025-01-25 - 10:10");
    assert_eq!(value["bookings"][0]["studentNumber"], "sA1");

    let persisted: PersistedBookings = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.bookings, store.list().await.unwrap());
}

#[tokio::test]
async fn test_json_store_rejects_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bookings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = JsonFileBookingStore::open(&path).await;

    assert!(matches!(result, Err(BookingError::Storage(_))));
}

#[tokio::test]
async fn test_json_store_failed_write_leaves_bookings_unchanged() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileBookingStore::open(dir.path().join("no_such_dir").join("bookings.json"))
        .await
        .unwrap();

    let result = store.add(booking("2025-01-25 - 10:10", "A1")).await;

    assert!(matches!(result, Err(BookingError::Storage(_))));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_json_store_failed_remove_and_replace_keep_bookings() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir(&data_dir).unwrap();
    let store = JsonFileBookingStore::open(data_dir.join("bookings.json"))
        .await
        .unwrap();
    store.add(booking("2025-01-25 - 10:10", "A1")).await.unwrap();
    std::fs::remove_dir_all(&data_dir).unwrap();

    assert!(store.remove("A1").await.is_err());
    assert!(
        store
            .replace("A1", booking("2025-01-25 - 10:35", "A1"))
            .await
            .is_err()
    );

    assert_eq!(
        store.list().await.unwrap(),
        vec![booking("2025-01-25 - 10:10", "A1")]
    );
}
