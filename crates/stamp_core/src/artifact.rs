use std::fmt;

/// Creates and revokes transient references to in-memory binary data.
///
/// The browser implementation backs this with object URLs.
pub trait ObjectUrlStore {
    type Handle: Clone + fmt::Debug;
    type Error: fmt::Display;

    fn create(&mut self, bytes: &[u8], mime: Option<&str>) -> Result<Self::Handle, Self::Error>;
    fn revoke(&mut self, handle: &Self::Handle);
}

/// Owns at most one live handle from its store.
#[derive(Debug)]
pub struct ResourceHandle<S: ObjectUrlStore> {
    store: S,
    live: Option<S::Handle>,
}

impl<S: ObjectUrlStore> ResourceHandle<S> {
    pub fn new(store: S) -> Self {
        Self { store, live: None }
    }

    /// Replaces the live handle with one built from `bytes`.
    ///
    /// The previous handle is revoked before the new one is created. If
    /// creation fails no handle is live afterwards.
    pub fn set(&mut self, bytes: &[u8], mime: Option<&str>) -> Result<&S::Handle, S::Error> {
        self.release();
        let handle = self.store.create(bytes, mime)?;
        Ok(self.live.insert(handle))
    }

    pub fn current(&self) -> Option<&S::Handle> {
        self.live.as_ref()
    }

    pub fn release(&mut self) {
        if let Some(handle) = self.live.take() {
            self.store.revoke(&handle);
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

impl<S: ObjectUrlStore> Drop for ResourceHandle<S> {
    fn drop(&mut self) {
        self.release();
    }
}
