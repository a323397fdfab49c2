use std::collections::HashMap;

/// Owns the input contexts handed out over the C ABI. The host only ever
/// sees the `u64`; zero is reserved to signal failure and is never issued.
pub struct HandleStore<T> {
    items: HashMap<u64, T>,
    next: u64,
}

impl<T> HandleStore<T> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            next: 1,
        }
    }

    /// Take ownership of `item` and return its handle. Handles are never
    /// reused, so a stale handle from a destroyed context stays invalid.
    pub fn insert(&mut self, item: T) -> u64 {
        let handle = self.next;
        self.next += 1;
        self.items.insert(handle, item);
        handle
    }

    /// Shared access for queries.
    pub fn get(&self, handle: u64) -> Option<&T> {
        self.items.get(&handle)
    }

    /// Exclusive access for event delivery and frame commits.
    pub fn get_mut(&mut self, handle: u64) -> Option<&mut T> {
        self.items.get_mut(&handle)
    }

    /// Drop the context behind `handle`, returning it if it was live.
    pub fn remove(&mut self, handle: u64) -> Option<T> {
        self.items.remove(&handle)
    }

    /// Number of live contexts.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for HandleStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_nonzero_and_distinct() {
        let mut store = HandleStore::new();
        let a = store.insert("a");
        let b = store.insert("b");
        assert_ne!(a, 0);
        assert_ne!(a, b);
        assert_eq!(store.get(a), Some(&"a"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_invalidates_handle() {
        let mut store = HandleStore::new();
        let h = store.insert(7);
        assert_eq!(store.remove(h), Some(7));
        assert!(store.get(h).is_none());
        assert!(store.get_mut(h).is_none());
        assert!(store.remove(h).is_none());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_handles_not_reused_after_remove() {
        let mut store = HandleStore::new();
        let a = store.insert(1);
        store.remove(a);
        let b = store.insert(2);
        assert_ne!(a, b);
        assert!(store.get(a).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_zero_is_never_live() {
        let mut store = HandleStore::new();
        store.insert(());
        assert!(store.get(0).is_none());
    }
}
