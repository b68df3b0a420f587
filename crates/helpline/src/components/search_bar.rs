use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tui_input::Input;

use crate::{
    action::Action,
    components::{Component, input_request},
    core::{intent_model::Intent, state::RootState},
    theme::{Theme, UiGroup},
    tui::{EventResponse, Frame},
};

/// Search field above the list.
///
/// Only sees events while the app is in search mode. Every edit that changes
/// the text is reported as `Intent::Search` so the list follows as you type.
/// `Esc` and `Enter` leave search mode and keep the query.
pub struct SearchBar {
    input: Input,
    focused: bool,
    theme: Theme,
}

impl SearchBar {
    pub fn new(theme: Theme) -> Self {
        Self {
            input: Input::default(),
            focused: false,
            theme,
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    fn search_response(&self, before: &str) -> EventResponse<Action> {
        if self.input.value() == before {
            EventResponse::Stop(Action::Update)
        } else {
            EventResponse::Stop(Action::Intent(Intent::Search(
                self.input.value().to_string(),
            )))
        }
    }
}

impl Component for SearchBar {
    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<EventResponse<Action>>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(None);
        }
        let response = match key.code {
            KeyCode::Esc | KeyCode::Enter => EventResponse::Stop(Action::LeaveSearch),
            // Auswahl bewegen geht auch während der Suche
            KeyCode::Up | KeyCode::Down => return Ok(None),
            _ => {
                let Some(req) = input_request(key) else {
                    return Ok(None);
                };
                let before = self.input.value().to_string();
                self.input.handle(req);
                self.search_response(&before)
            }
        };
        Ok(Some(response))
    }

    fn handle_paste(&mut self, text: String) -> Result<Option<EventResponse<Action>>> {
        let before = self.input.value().to_string();
        let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
        self.input = Input::new(format!("{before}{pasted}"));
        Ok(Some(self.search_response(&before)))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::EnterSearch => self.focused = true,
            Action::LeaveSearch => self.focused = false,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &RootState) -> Result<()> {
        let border = if self.focused {
            self.theme.style(UiGroup::Title)
        } else {
            self.theme.style(UiGroup::Border)
        };
        let block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(area);

        let line = if state.query().is_empty() && !self.focused {
            Line::from(Span::styled(
                "press / to search names and numbers",
                self.theme.style(UiGroup::Dimmed),
            ))
        } else {
            Line::from(Span::raw(state.query().to_string()))
        };
        f.render_widget(Paragraph::new(line).block(block), area);

        if self.focused && inner.width > 0 && inner.height > 0 {
            let col = (self.input.visual_cursor() as u16).min(inner.width.saturating_sub(1));
            f.set_cursor_position((inner.x + col, inner.y));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn press(bar: &mut SearchBar, code: KeyCode) -> Option<EventResponse<Action>> {
        bar.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
            .expect("key handling")
    }

    #[test]
    fn typing_emits_search_intents() {
        let mut bar = SearchBar::new(Theme::from_env_auto());
        press(&mut bar, KeyCode::Char('1'));
        let resp = press(&mut bar, KeyCode::Char('0'));
        assert_eq!(
            resp,
            Some(EventResponse::Stop(Action::Intent(Intent::Search("10".into()))))
        );
        let resp = press(&mut bar, KeyCode::Backspace);
        assert_eq!(
            resp,
            Some(EventResponse::Stop(Action::Intent(Intent::Search("1".into()))))
        );
    }

    #[test]
    fn cursor_moves_do_not_search() {
        let mut bar = SearchBar::new(Theme::from_env_auto());
        press(&mut bar, KeyCode::Char('a'));
        assert_eq!(
            press(&mut bar, KeyCode::Left),
            Some(EventResponse::Stop(Action::Update))
        );
    }

    #[test]
    fn esc_and_enter_leave_search_arrows_pass_through() {
        let mut bar = SearchBar::new(Theme::from_env_auto());
        assert_eq!(
            press(&mut bar, KeyCode::Esc),
            Some(EventResponse::Stop(Action::LeaveSearch))
        );
        assert_eq!(
            press(&mut bar, KeyCode::Enter),
            Some(EventResponse::Stop(Action::LeaveSearch))
        );
        assert_eq!(press(&mut bar, KeyCode::Down), None);
    }

    #[test]
    fn paste_appends_to_query() {
        let mut bar = SearchBar::new(Theme::from_env_auto());
        press(&mut bar, KeyCode::Char('h'));
        let resp = bar.handle_paste("elp\n".into()).expect("paste");
        assert_eq!(
            resp,
            Some(EventResponse::Stop(Action::Intent(Intent::Search("help".into()))))
        );
        assert_eq!(bar.value(), "help");
    }
}
