//! Root state of the TUI.
//!
//! `RootState` owns the contact store and everything derived from it for the
//! screen: the current query, the memoized display list and the selection.
//! Every mutation goes through a method here that recomputes the display list
//! and clamps the selection afterwards, so the three never disagree.
//!
//! The reducer is the only writer. Fields that the event loop has to bridge
//! into the app (`quit_requested`, `pending_popup`) are public, the same way
//! navigation requests are handed over elsewhere.

use directory::{Category, Contact, ContactId, ContactStore, FilterEngine};

use crate::action::PopupRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// One line of feedback shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub struct RootState {
    store: ContactStore,
    query: String,
    selected: Option<ContactId>,
    filter: FilterEngine,
    status: Option<Status>,
    /// Set by `Intent::Quit`; the loop turns it into `should_quit`.
    pub quit_requested: bool,
    /// Popup the reducer asked for; taken by the loop.
    pub pending_popup: Option<PopupRequest>,
}

impl RootState {
    pub fn new(store: ContactStore) -> Self {
        let mut state = Self {
            store,
            query: String::new(),
            selected: None,
            filter: FilterEngine::new(),
            status: None,
            quit_requested: false,
            pending_popup: None,
        };
        state.recompute();
        state
    }

    /// Root state over the built-in directory.
    pub fn with_seed() -> Self {
        Self::new(ContactStore::with_seed())
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Sorted and filtered contacts as shown on screen.
    pub fn display_list(&self) -> &[Contact] {
        self.filter.results()
    }

    pub fn selected(&self) -> Option<ContactId> {
        self.selected
    }

    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected?;
        self.display_list().iter().position(|c| c.id() == id)
    }

    pub fn selected_contact(&self) -> Option<&Contact> {
        self.selected_index().map(|i| &self.display_list()[i])
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }

    pub fn set_query(&mut self, query: String) {
        if self.query == query {
            return;
        }
        self.query = query;
        self.recompute();
    }

    /// Add a contact and select it.
    pub fn add_contact(&mut self, name: &str, phone_number: &str, category: Category) -> Contact {
        let contact = self.store.add(name, phone_number, category);
        self.selected = Some(contact.id());
        self.recompute();
        contact
    }

    pub fn remove_contact(&mut self, id: ContactId) -> Option<Contact> {
        let removed = self.store.remove(id)?;
        self.recompute();
        Some(removed)
    }

    /// Select a visible contact. Ids that are not on screen are ignored.
    pub fn select(&mut self, id: ContactId) -> bool {
        if self.display_list().iter().any(|c| c.id() == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    /// Move the selection by `delta` rows, stopping at both ends.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.display_list().len();
        if len == 0 {
            self.selected = None;
            return;
        }
        let current = self.selected_index().unwrap_or(0);
        let target = current.saturating_add_signed(delta).min(len - 1);
        self.selected = Some(self.display_list()[target].id());
    }

    fn recompute(&mut self) {
        // index vor dem Neuberechnen merken, damit die Auswahl in der Nähe bleibt
        let previous = self.selected_index();
        self.filter.refresh(&self.store, &self.query);
        self.clamp_selection(previous);
    }

    fn clamp_selection(&mut self, previous: Option<usize>) {
        let list = self.filter.results();
        if list.is_empty() {
            self.selected = None;
            return;
        }
        if let Some(id) = self.selected {
            if list.iter().any(|c| c.id() == id) {
                return;
            }
        }
        let index = previous.unwrap_or(0).min(list.len() - 1);
        self.selected = Some(list[index].id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(state: &RootState) -> Vec<&str> {
        state.display_list().iter().map(|c| c.name()).collect()
    }

    #[test]
    fn seeded_state_selects_first_row() {
        let state = RootState::with_seed();
        assert_eq!(state.display_list().len(), 20);
        assert_eq!(state.selected_index(), Some(0));
        assert_eq!(
            state.selected_contact().map(|c| c.name()),
            Some("AIDS Helpline")
        );
    }

    #[test]
    fn query_narrows_list_and_moves_selection_into_it() {
        let mut state = RootState::with_seed();
        state.set_query("101".into());
        assert_eq!(names(&state), vec!["Fire Department"]);
        assert_eq!(
            state.selected_contact().map(|c| c.name()),
            Some("Fire Department")
        );
    }

    #[test]
    fn selection_survives_query_that_keeps_it_visible() {
        let mut state = RootState::with_seed();
        state.move_selection(1);
        let ambulance = state.selected();
        state.set_query("a".into());
        assert_eq!(state.selected(), ambulance);
    }

    #[test]
    fn empty_result_clears_selection() {
        let mut state = RootState::with_seed();
        state.set_query("no such contact".into());
        assert!(state.display_list().is_empty());
        assert_eq!(state.selected(), None);
        assert_eq!(state.selected_contact(), None);
    }

    #[test]
    fn move_selection_stops_at_ends() {
        let mut state = RootState::with_seed();
        state.move_selection(-1);
        assert_eq!(state.selected_index(), Some(0));
        state.move_selection(100);
        assert_eq!(state.selected_index(), Some(19));
        state.move_selection(1);
        assert_eq!(state.selected_index(), Some(19));
    }

    #[test]
    fn removing_selected_keeps_position() {
        let mut state = RootState::with_seed();
        state.move_selection(2);
        let removed = state.selected().expect("selection");
        state.remove_contact(removed).expect("present");
        assert_eq!(state.selected_index(), Some(2));
        assert_ne!(state.selected(), Some(removed));
    }

    #[test]
    fn removing_last_row_clamps_to_new_end() {
        let mut state = RootState::with_seed();
        state.move_selection(19);
        let last = state.selected().expect("selection");
        state.remove_contact(last);
        assert_eq!(state.selected_index(), Some(18));
    }

    #[test]
    fn added_contact_becomes_selected() {
        let mut state = RootState::with_seed();
        let taxi = state.add_contact("Taxi", "999", Category::Custom);
        assert_eq!(state.selected(), Some(taxi.id()));
        assert_eq!(state.display_list().len(), 21);
    }

    #[test]
    fn select_ignores_hidden_contacts() {
        let mut state = RootState::with_seed();
        let police = state
            .display_list()
            .iter()
            .find(|c| c.name() == "Police")
            .map(|c| c.id())
            .expect("seeded");
        state.set_query("fire".into());
        assert!(!state.select(police));
        assert_ne!(state.selected(), Some(police));
    }
}
