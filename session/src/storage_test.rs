use super::*;

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.load().unwrap(), None);
}

#[test]
fn memory_storage_clones_share_one_slot() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.save("tok").unwrap();
    assert_eq!(b.load().unwrap().as_deref(), Some("tok"));
    b.clear().unwrap();
    assert_eq!(a.peek(), None);
}

#[test]
fn memory_storage_save_replaces_previous_value() {
    let storage = MemoryStorage::with_token("old");
    storage.save("new").unwrap();
    assert_eq!(storage.peek().as_deref(), Some("new"));
}

#[test]
fn clearing_empty_memory_storage_is_ok() {
    let storage = MemoryStorage::new();
    assert!(storage.clear().is_ok());
}
