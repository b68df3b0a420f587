use log::debug;

use crate::model::{Category, Contact, ContactId};
use crate::seed::seed_contacts;

/// Session-scoped collection of contacts.
///
/// Storage keeps insertion order. Ordering for display is never stored here,
/// it is derived by [`crate::filter`]. The store is not shared across threads;
/// the UI loop owns it and mutates it from the reducer.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    version: u64,
}

impl ContactStore {
    /// Empty store (no seed entries).
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the built-in seed list.
    pub fn with_seed() -> Self {
        let contacts: Vec<Contact> = seed_contacts().collect();
        debug!("contact store seeded with {} entries", contacts.len());
        Self {
            contacts,
            version: 0,
        }
    }

    /// Append a new contact and return a copy of it.
    ///
    /// No validation: empty name or number are stored as given.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        phone_number: impl Into<String>,
        category: Category,
    ) -> Contact {
        let contact = Contact::new(name, phone_number, category);
        debug!(
            "adding contact id={} name={:?} category={}",
            contact.id(),
            contact.name(),
            contact.category()
        );
        self.contacts.push(contact.clone());
        self.version += 1;
        contact
    }

    /// Remove the contact with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: ContactId) -> Option<Contact> {
        let index = self.contacts.iter().position(|c| c.id() == id)?;
        let removed = self.contacts.remove(index);
        self.version += 1;
        debug!("removed contact id={} name={:?}", id, removed.name());
        Some(removed)
    }

    /// Copy of all contacts in insertion order.
    pub fn snapshot(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Mutation counter; bumped by every successful `add` / `remove`.
    pub fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SEED;
    use std::collections::HashSet;

    #[test]
    fn seeded_store_matches_seed_list_in_order() {
        let store = ContactStore::with_seed();
        let names: Vec<&str> = store.iter().map(|c| c.name()).collect();
        let expected: Vec<&str> = SEED.iter().map(|(n, _, _)| *n).collect();
        assert_eq!(names, expected);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn add_appends_exactly_once_with_fresh_id() {
        let mut store = ContactStore::with_seed();
        let before: HashSet<ContactId> = store.iter().map(|c| c.id()).collect();

        let added = store.add("Taxi", "999", Category::Custom);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), SEED.len() + 1);
        assert_eq!(snapshot.last(), Some(&added));
        assert_eq!(snapshot.iter().filter(|c| c.id() == added.id()).count(), 1);
        assert!(!before.contains(&added.id()));
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn add_accepts_empty_fields() {
        let mut store = ContactStore::new();
        let added = store.add("", "", Category::Custom);
        assert_eq!(store.get(added.id()).map(|c| c.name()), Some(""));
    }

    #[test]
    fn remove_deletes_by_id() {
        let mut store = ContactStore::with_seed();
        let fire = store
            .iter()
            .find(|c| c.name() == "Fire Department")
            .map(|c| c.id())
            .expect("seeded");

        let removed = store.remove(fire).expect("removed");
        assert_eq!(removed.phone_number(), "101");
        assert!(store.get(fire).is_none());
        assert!(store.snapshot().iter().all(|c| c.id() != fire));
        assert_eq!(store.len(), SEED.len() - 1);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut store = ContactStore::with_seed();
        let before = store.snapshot();

        assert!(store.remove(ContactId::new()).is_none());

        assert_eq!(store.snapshot(), before);
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn snapshot_is_detached_copy() {
        let mut store = ContactStore::with_seed();
        let mut snapshot = store.snapshot();
        snapshot.clear();
        assert_eq!(store.len(), SEED.len());

        store.add("Taxi", "999", Category::Custom);
        assert!(snapshot.is_empty());
    }
}
