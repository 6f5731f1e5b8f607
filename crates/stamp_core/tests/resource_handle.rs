use std::collections::BTreeSet;

use stamp_core::{ObjectUrlStore, ResourceHandle};

#[derive(Debug, Default)]
struct FakeStore {
    next: u32,
    live: BTreeSet<String>,
    revoked: Vec<String>,
    fail_next: bool,
}

impl ObjectUrlStore for FakeStore {
    type Handle = String;
    type Error = String;

    fn create(&mut self, bytes: &[u8], mime: Option<&str>) -> Result<String, String> {
        if std::mem::take(&mut self.fail_next) {
            return Err("quota exceeded".to_string());
        }
        self.next += 1;
        let handle = format!(
            "blob:{}:{}:{}",
            self.next,
            mime.unwrap_or("application/octet-stream"),
            bytes.len()
        );
        self.live.insert(handle.clone());
        Ok(handle)
    }

    fn revoke(&mut self, handle: &String) {
        assert!(self.live.remove(handle), "revoked unknown handle {handle}");
        self.revoked.push(handle.clone());
    }
}

#[test]
fn repeated_set_keeps_exactly_one_live_handle() {
    let mut handle = ResourceHandle::new(FakeStore::default());
    for n in 1..=25usize {
        let current = handle.set(&vec![0u8; n], Some("image/png")).unwrap().clone();
        assert_eq!(handle.store().live.len(), 1);
        assert!(handle.store().live.contains(&current));
        assert_eq!(handle.store().revoked.len(), n - 1);
        assert_eq!(handle.current(), Some(&current));
    }
}

#[test]
fn release_without_live_handle_is_noop() {
    let mut handle = ResourceHandle::new(FakeStore::default());
    handle.release();
    handle.release();
    assert!(handle.current().is_none());
    assert!(handle.store().revoked.is_empty());
}

#[test]
fn release_revokes_live_handle_once() {
    let mut handle = ResourceHandle::new(FakeStore::default());
    handle.set(b"zip", Some("application/zip")).unwrap();
    handle.release();
    handle.release();
    assert!(handle.current().is_none());
    assert!(handle.store().live.is_empty());
    assert_eq!(handle.store().revoked.len(), 1);
}

#[test]
fn failed_create_leaves_no_live_handle() {
    let mut handle = ResourceHandle::new(FakeStore::default());
    handle.set(b"first", None).unwrap();

    handle.store_mut().fail_next = true;
    let err = handle.set(b"second", None).unwrap_err();
    assert_eq!(err, "quota exceeded");
    assert!(handle.current().is_none());
    assert!(handle.store().live.is_empty());
    assert_eq!(handle.store().revoked.len(), 1);

    handle.set(b"third", None).unwrap();
    assert_eq!(handle.store().live.len(), 1);
}
