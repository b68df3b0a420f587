//! User intentions understood by the reducer.
//!
//! Intents are pure data: they are produced by key bindings, components and
//! popups and consumed by [`crate::core::reducer::reduce`]. Anything that only
//! touches the presentation (search focus, redraws) stays an `Action`.

use directory::{Category, ContactId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Replace the search query.
    Search(String),
    AddContact {
        name: String,
        phone_number: String,
        category: Category,
    },
    DeleteContact(ContactId),
    SelectContact(ContactId),
    CallContact(ContactId),

    // relativ zur aktuellen Auswahl
    SelectNext,
    SelectPrev,
    CallSelected,
    OpenInfo,
    RequestDelete,

    OpenAddForm,
    Quit,
}
