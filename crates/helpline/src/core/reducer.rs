//! Reducer: intents -> state transitions + effects.
//!
//! Policy:
//!   * no I/O, no async; the only outputs are mutations of `RootState` and the
//!     returned `Vec<Effect>`
//!   * unknown ids are ignored (logged via `Effect::Log`), never a panic
//!   * popups and quitting are requested through `pending_popup` /
//!     `quit_requested`, the loop applies them

use crate::action::PopupRequest;
use crate::core::effects::{Effect, InternalEvent, TaskKind, TaskResultKind};
use crate::core::intent_model::Intent;
use crate::core::state::{RootState, Status};

/// Reduce a single user intent.
pub fn reduce(state: &mut RootState, intent: Intent) -> Vec<Effect> {
    match intent {
        Intent::Search(query) => {
            state.set_query(query);
            Vec::new()
        }
        Intent::AddContact {
            name,
            phone_number,
            category,
        } => {
            let contact = state.add_contact(&name, &phone_number, category);
            state.set_status(Status::success(format!("Added {}", contact.name())));
            vec![Effect::log(format!(
                "added contact {} ({})",
                contact.id(),
                contact.category()
            ))]
        }
        Intent::DeleteContact(id) => match state.remove_contact(id) {
            Some(contact) => {
                state.set_status(Status::success(format!("Deleted {}", contact.name())));
                vec![Effect::log(format!("deleted contact {id}"))]
            }
            None => vec![Effect::log(format!("delete ignored, unknown contact {id}"))],
        },
        Intent::SelectContact(id) => {
            state.select(id);
            Vec::new()
        }
        Intent::CallContact(id) => {
            let Some(contact) = state.store().get(id).cloned() else {
                return vec![Effect::log(format!("call ignored, unknown contact {id}"))];
            };
            state.set_status(Status::info(format!(
                "Calling {} ({})",
                contact.name(),
                contact.phone_number()
            )));
            vec![Effect::async_task(TaskKind::PlaceCall {
                contact: contact.name().to_string(),
                phone_number: contact.phone_number().to_string(),
            })]
        }
        Intent::SelectNext => {
            state.move_selection(1);
            Vec::new()
        }
        Intent::SelectPrev => {
            state.move_selection(-1);
            Vec::new()
        }
        Intent::CallSelected => match state.selected() {
            Some(id) => reduce(state, Intent::CallContact(id)),
            None => no_selection(state),
        },
        Intent::OpenInfo => match state.selected_contact().cloned() {
            Some(contact) => {
                state.pending_popup = Some(PopupRequest::Info(contact));
                Vec::new()
            }
            None => no_selection(state),
        },
        Intent::RequestDelete => match state.selected_contact().cloned() {
            Some(contact) => {
                state.pending_popup = Some(PopupRequest::ConfirmDelete(contact));
                Vec::new()
            }
            None => no_selection(state),
        },
        Intent::OpenAddForm => {
            state.pending_popup = Some(PopupRequest::AddContact);
            Vec::new()
        }
        Intent::Quit => {
            state.quit_requested = true;
            vec![Effect::log("quit requested")]
        }
    }
}

/// Reduce an event coming back from the executor.
pub fn reduce_internal(state: &mut RootState, event: InternalEvent) -> Vec<Effect> {
    match event {
        InternalEvent::TaskFinished { id, result } => {
            let status = match &result {
                TaskResultKind::CallOpened { contact, number } => {
                    Status::success(format!("Dialer opened for {contact} ({number})"))
                }
                TaskResultKind::CallFailed { contact, error } => {
                    Status::error(format!("Call to {contact} failed: {error}"))
                }
                TaskResultKind::DialerUnavailable { contact, error } => {
                    Status::error(format!("Cannot call {contact}: {error}"))
                }
                TaskResultKind::MalformedNumber { contact, error } => {
                    Status::error(format!("Cannot call {contact}: {error}"))
                }
            };
            let effect = Effect::log(format!("[task:{id}] {}", status.message));
            state.set_status(status);
            vec![effect]
        }
    }
}

fn no_selection(state: &mut RootState) -> Vec<Effect> {
    state.set_status(Status::info("No contact selected"));
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::StatusKind;
    use directory::{Category, ContactId, DialError};
    use pretty_assertions::assert_eq;

    fn id_of(state: &RootState, name: &str) -> ContactId {
        state
            .store()
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.id())
            .expect("contact present")
    }

    #[test]
    fn search_updates_display_list() {
        let mut rs = RootState::with_seed();
        let effects = reduce(&mut rs, Intent::Search("helpline".into()));
        assert!(effects.is_empty());
        assert_eq!(rs.query(), "helpline");
        assert_eq!(rs.display_list().len(), 10);
    }

    #[test]
    fn add_contact_selects_and_reports() {
        let mut rs = RootState::with_seed();
        let effects = reduce(
            &mut rs,
            Intent::AddContact {
                name: "Taxi".into(),
                phone_number: "999".into(),
                category: Category::Custom,
            },
        );
        assert_eq!(effects.len(), 1);
        assert_eq!(rs.store().len(), 21);
        assert_eq!(rs.selected_contact().map(|c| c.name()), Some("Taxi"));
        assert_eq!(rs.status().map(|s| s.kind), Some(StatusKind::Success));
    }

    #[test]
    fn add_contact_accepts_empty_fields() {
        let mut rs = RootState::with_seed();
        reduce(
            &mut rs,
            Intent::AddContact {
                name: String::new(),
                phone_number: String::new(),
                category: Category::Custom,
            },
        );
        assert_eq!(rs.store().len(), 21);
        // leerer Name sortiert nach vorne
        assert_eq!(rs.display_list()[0].name(), "");
    }

    #[test]
    fn delete_contact_removes_it_from_list() {
        let mut rs = RootState::with_seed();
        let fire = id_of(&rs, "Fire Department");
        reduce(&mut rs, Intent::DeleteContact(fire));
        reduce(&mut rs, Intent::Search("101".into()));
        assert!(rs.display_list().is_empty());
    }

    #[test]
    fn delete_unknown_id_is_a_no_op() {
        let mut rs = RootState::with_seed();
        let effects = reduce(&mut rs, Intent::DeleteContact(ContactId::new()));
        assert_eq!(rs.store().len(), 20);
        assert!(rs.status().is_none());
        assert!(matches!(effects.as_slice(), [Effect::Log(_)]));
    }

    #[test]
    fn call_contact_emits_place_call() {
        let mut rs = RootState::with_seed();
        let police = id_of(&rs, "Police");
        let effects = reduce(&mut rs, Intent::CallContact(police));
        assert_eq!(
            effects,
            vec![Effect::Async(TaskKind::PlaceCall {
                contact: "Police".into(),
                phone_number: "100".into(),
            })]
        );
    }

    #[test]
    fn call_selected_uses_selection() {
        let mut rs = RootState::with_seed();
        reduce(&mut rs, Intent::Search("101".into()));
        let effects = reduce(&mut rs, Intent::CallSelected);
        assert_eq!(
            effects,
            vec![Effect::Async(TaskKind::PlaceCall {
                contact: "Fire Department".into(),
                phone_number: "101".into(),
            })]
        );
    }

    #[test]
    fn selection_relative_intents_without_selection() {
        let mut rs = RootState::with_seed();
        reduce(&mut rs, Intent::Search("zzz".into()));
        assert!(reduce(&mut rs, Intent::CallSelected).is_empty());
        reduce(&mut rs, Intent::OpenInfo);
        reduce(&mut rs, Intent::RequestDelete);
        assert!(rs.pending_popup.is_none());
        assert_eq!(rs.status().map(|s| s.kind), Some(StatusKind::Info));
    }

    #[test]
    fn select_next_and_prev_move_through_sorted_list() {
        let mut rs = RootState::with_seed();
        reduce(&mut rs, Intent::SelectNext);
        reduce(&mut rs, Intent::SelectNext);
        assert_eq!(
            rs.selected_contact().map(|c| c.name()),
            Some("Anti-Poison Helpline")
        );
        reduce(&mut rs, Intent::SelectPrev);
        assert_eq!(rs.selected_contact().map(|c| c.name()), Some("Ambulance"));
    }

    #[test]
    fn select_contact_by_id() {
        let mut rs = RootState::with_seed();
        let police = id_of(&rs, "Police");
        reduce(&mut rs, Intent::SelectContact(police));
        assert_eq!(rs.selected(), Some(police));
    }

    #[test]
    fn popups_are_requested_not_opened() {
        let mut rs = RootState::with_seed();
        reduce(&mut rs, Intent::OpenAddForm);
        assert_eq!(rs.pending_popup.take(), Some(PopupRequest::AddContact));

        reduce(&mut rs, Intent::RequestDelete);
        match rs.pending_popup.take() {
            Some(PopupRequest::ConfirmDelete(c)) => assert_eq!(c.name(), "AIDS Helpline"),
            other => panic!("expected confirm popup, got {other:?}"),
        }
        // Anfrage allein löscht nichts
        assert_eq!(rs.store().len(), 20);
    }

    #[test]
    fn quit_sets_quit_requested() {
        let mut rs = RootState::with_seed();
        assert!(!rs.quit_requested);
        reduce(&mut rs, Intent::Quit);
        assert!(rs.quit_requested);
    }

    #[test]
    fn task_results_end_up_in_status_line() {
        let mut rs = RootState::with_seed();
        reduce_internal(
            &mut rs,
            InternalEvent::TaskFinished {
                id: 1,
                result: TaskResultKind::CallOpened {
                    contact: "Police".into(),
                    number: "100".into(),
                },
            },
        );
        assert_eq!(rs.status().map(|s| s.kind), Some(StatusKind::Success));

        reduce_internal(
            &mut rs,
            InternalEvent::TaskFinished {
                id: 2,
                result: TaskResultKind::DialerUnavailable {
                    contact: "Police".into(),
                    error: DialError::Unavailable {
                        scheme: "tel".into(),
                        handler: "xdg-open".into(),
                    },
                },
            },
        );
        let status = rs.status().expect("status");
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.message.contains("xdg-open"));
    }
}
