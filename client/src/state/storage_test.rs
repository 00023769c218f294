use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());

    storage.set("k", "v1");
    assert_eq!(storage.get("k").as_deref(), Some("v1"));

    storage.set("k", "v2");
    assert_eq!(storage.get("k").as_deref(), Some("v2"));
    assert_eq!(storage.len(), 1);

    storage.remove("k");
    assert_eq!(storage.get("k"), None);
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove("absent");
    assert!(storage.is_empty());
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_outside_browser() {
    let storage = BrowserStorage;
    storage.set("k", "v");
    assert_eq!(storage.get("k"), None);
    storage.remove("k");
}

#[cfg(not(feature = "csr"))]
#[test]
fn default_storage_is_memory_backed_natively() {
    let storage = default_storage();
    storage.set("k", "v");
    assert_eq!(storage.get("k").as_deref(), Some("v"));
}
