//! Key bindings of the main screen (normal mode).
//!
//! | Key                | Action                 |
//! |--------------------|------------------------|
//! | `/`                | focus search           |
//! | `Enter`, `c`       | call selected contact  |
//! | `i`                | contact info           |
//! | `a`                | add contact            |
//! | `d`, `Delete`      | delete (with confirm)  |
//! | `Up`/`k`, `Down`/`j` | move selection       |
//! | `q`, `Ctrl-C`      | quit                   |
//! | `Ctrl-Z`           | suspend                |
//!
//! In search mode the search bar sees keys first; only what it lets through
//! (arrows, `Ctrl-C`) reaches this table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{action::Action, core::intent_model::Intent};

pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Intent(Intent::Quit)),
            KeyCode::Char('z') => Some(Action::Suspend),
            _ => None,
        };
    }
    let action = match key.code {
        KeyCode::Char('/') => Action::EnterSearch,
        KeyCode::Enter | KeyCode::Char('c') => Action::Intent(Intent::CallSelected),
        KeyCode::Char('i') => Action::Intent(Intent::OpenInfo),
        KeyCode::Char('a') => Action::Intent(Intent::OpenAddForm),
        KeyCode::Char('d') | KeyCode::Delete => Action::Intent(Intent::RequestDelete),
        KeyCode::Up | KeyCode::Char('k') => Action::Intent(Intent::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => Action::Intent(Intent::SelectNext),
        KeyCode::Char('q') => Action::Intent(Intent::Quit),
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_calls_selection() {
        assert_eq!(
            action_for_key(key(KeyCode::Enter)),
            Some(Action::Intent(Intent::CallSelected))
        );
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_calls() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(ctrl_c), Some(Action::Intent(Intent::Quit)));
        assert_eq!(
            action_for_key(key(KeyCode::Char('c'))),
            Some(Action::Intent(Intent::CallSelected))
        );
    }

    #[test]
    fn vim_and_arrow_navigation_agree() {
        assert_eq!(
            action_for_key(key(KeyCode::Char('j'))),
            action_for_key(key(KeyCode::Down))
        );
        assert_eq!(
            action_for_key(key(KeyCode::Char('k'))),
            action_for_key(key(KeyCode::Up))
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(action_for_key(key(KeyCode::Char('x'))), None);
        assert_eq!(action_for_key(key(KeyCode::F(5))), None);
    }
}
