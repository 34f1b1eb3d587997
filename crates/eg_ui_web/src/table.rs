//! Stable [`ElementKey`] assignment for host element handles.

use eg_ui_core::ElementKey;

/// Interns element handles so the same node always maps to the same key.
///
/// Lookups compare handles with `PartialEq`, which for `web-sys` elements is JS identity.
/// Released slots are reused by later handles; every other key stays put.
#[derive(Debug, Clone)]
pub struct ElementTable<T> {
    slots: Vec<Option<T>>,
    free: Vec<usize>,
}

impl<T> Default for ElementTable<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }
}

impl<T: PartialEq> ElementTable<T> {
    /// Returns the key for `handle`, assigning one if it is not currently held.
    pub fn intern(&mut self, handle: T) -> ElementKey {
        if let Some(index) = self
            .slots
            .iter()
            .position(|slot| slot.as_ref() == Some(&handle))
        {
            return ElementKey(index);
        }
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(handle);
                ElementKey(index)
            }
            None => {
                self.slots.push(Some(handle));
                ElementKey(self.slots.len() - 1)
            }
        }
    }

    /// Handle currently held under `key`.
    pub fn get(&self, key: ElementKey) -> Option<&T> {
        self.slots.get(key.0)?.as_ref()
    }

    /// Drops the handle under `key` and frees its slot. Unknown or free keys are ignored.
    pub fn release(&mut self, key: ElementKey) -> Option<T> {
        let handle = self.slots.get_mut(key.0)?.take()?;
        self.free.push(key.0);
        Some(handle)
    }

    /// Number of handles currently held.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Whether no handle is held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn same_handle_keeps_its_key() {
        let mut table = ElementTable::default();
        let modal = table.intern("modal");
        let toast = table.intern("toast");

        assert_eq!(table.intern("modal"), modal);
        assert_ne!(modal, toast);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(toast), Some(&"toast"));
    }

    #[test]
    fn unknown_key_resolves_to_nothing() {
        let table: ElementTable<&str> = ElementTable::default();
        assert!(table.is_empty());
        assert_eq!(table.get(ElementKey(3)), None);
    }

    #[test]
    fn released_slots_are_reused_without_moving_other_keys() {
        let mut table = ElementTable::default();
        let container = table.intern("container");
        let first = table.intern("toast-1");
        let message = table.intern("message-1");

        assert_eq!(table.release(first), Some("toast-1"));
        assert_eq!(table.release(first), None);
        assert_eq!(table.get(first), None);
        assert_eq!(table.len(), 2);

        let second = table.intern("toast-2");
        assert_eq!(second, first);
        assert_eq!(table.get(container), Some(&"container"));
        assert_eq!(table.get(message), Some(&"message-1"));
        assert_eq!(table.intern("toast-1"), ElementKey(3));
        assert_eq!(table.len(), 4);
    }
}
