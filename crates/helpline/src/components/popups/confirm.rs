use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};

use crate::{
    action::{Action, PopupResult},
    components::{Component, PopupComponent},
    core::state::RootState,
    tui::{EventResponse, Frame},
};

use super::{centered_rect_fixed, draw_popup_frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Ok,
    Cancel,
}

/// Modal yes/no question.
///
/// - Left/Right/Tab: switch button
/// - Enter: `PopupResult::Confirmed` or `Cancelled`, depending on the button
/// - `y` / `n`: confirm / cancel directly
/// - Esc: `PopupResult::Cancelled`
///
/// The popup does not know what is being confirmed. The app keeps the pending
/// intent and dispatches it on `Confirmed`. When the result comes back through
/// `update`, the popup asks to be closed.
pub struct ConfirmPopup {
    title: String,
    question: String,
    ok_label: String,
    cancel_label: String,
    selected: Choice,
    min_width: u16,
    min_height: u16,
}

impl ConfirmPopup {
    pub fn new<T: Into<String>, Q: Into<String>>(title: T, question: Q) -> Self {
        Self {
            title: title.into(),
            question: question.into(),
            ok_label: "OK".into(),
            cancel_label: "Cancel".into(),
            // destruktive Aktion: Cancel vorausgewählt
            selected: Choice::Cancel,
            min_width: 52,
            min_height: 8,
        }
    }

    pub fn ok_label<S: Into<String>>(mut self, label: S) -> Self {
        self.ok_label = label.into();
        self
    }

    pub fn cancel_label<S: Into<String>>(mut self, label: S) -> Self {
        self.cancel_label = label.into();
        self
    }

    fn confirm_action(&self) -> Action {
        match self.selected {
            Choice::Ok => Action::PopupResult(PopupResult::Confirmed),
            Choice::Cancel => Action::PopupResult(PopupResult::Cancelled),
        }
    }

    fn toggle_selection(&mut self) {
        self.selected = match self.selected {
            Choice::Ok => Choice::Cancel,
            Choice::Cancel => Choice::Ok,
        };
    }

    fn button(&self, label: &str, choice: Choice) -> Span<'static> {
        let style = if self.selected == choice {
            Style::default().fg(Color::Black).bg(Color::White).bold()
        } else {
            Style::default().fg(Color::White).bg(Color::Black)
        };
        Span::styled(format!("[ {label} ]"), style)
    }
}

impl Component for ConfirmPopup {
    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<EventResponse<Action>>> {
        let action = match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_selection();
                Some(Action::Update)
            }
            KeyCode::Enter => self.submit_action(),
            KeyCode::Esc | KeyCode::Char('n') => self.cancel_action(),
            KeyCode::Char('y') => {
                self.selected = Choice::Ok;
                self.submit_action()
            }
            _ => None,
        };
        Ok(action.map(EventResponse::Stop))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Submit => Ok(Some(self.confirm_action())),
            Action::PopupResult(PopupResult::Confirmed)
            | Action::PopupResult(PopupResult::Cancelled) => Ok(Some(Action::ClosePopup)),
            _ => Ok(None),
        }
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, _state: &RootState) -> Result<()> {
        if area.width < 5 || area.height < 5 {
            return Ok(());
        }

        let dialog = centered_rect_fixed(area, self.min_width, self.min_height);
        let inner = draw_popup_frame(f, dialog, &self.title);

        let mut lines: Vec<Line> = self.question.lines().map(Line::raw).collect();
        if inner.height >= 3 {
            lines.push(Line::raw(""));
        }

        let spacing = "   ";
        let buttons_len = (4 + self.ok_label.len()) + spacing.len() + (4 + self.cancel_label.len());
        let pad = (inner.width as usize).saturating_sub(buttons_len) / 2;
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(pad)),
            self.button(&self.ok_label, Choice::Ok),
            Span::raw(spacing),
            self.button(&self.cancel_label, Choice::Cancel),
        ]));

        if inner.height >= 5 {
            lines.push(Line::raw(""));
            lines.push(
                Line::from(vec![
                    Span::styled("←/→/Tab", Style::default().fg(Color::White)),
                    Span::raw(": Select   "),
                    Span::styled("Enter", Style::default().fg(Color::White)),
                    Span::raw(": Confirm   "),
                    Span::styled("Esc", Style::default().fg(Color::White)),
                    Span::raw(": Cancel"),
                ])
                .fg(Color::DarkGray),
            );
        }

        f.render_widget(
            Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true }),
            inner,
        );
        Ok(())
    }
}

impl PopupComponent for ConfirmPopup {
    fn submit_action(&mut self) -> Option<Action> {
        Some(self.confirm_action())
    }

    fn cancel_action(&mut self) -> Option<Action> {
        Some(Action::PopupResult(PopupResult::Cancelled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(popup: &mut ConfirmPopup, code: KeyCode) -> Option<EventResponse<Action>> {
        popup
            .handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
            .expect("key handling")
    }

    #[test]
    fn enter_defaults_to_cancel() {
        let mut popup = ConfirmPopup::new("Delete", "Really?");
        assert_eq!(
            press(&mut popup, KeyCode::Enter),
            Some(EventResponse::Stop(Action::PopupResult(PopupResult::Cancelled)))
        );
    }

    #[test]
    fn toggle_then_enter_confirms() {
        let mut popup = ConfirmPopup::new("Delete", "Really?");
        press(&mut popup, KeyCode::Tab);
        assert_eq!(
            press(&mut popup, KeyCode::Enter),
            Some(EventResponse::Stop(Action::PopupResult(PopupResult::Confirmed)))
        );
    }

    #[test]
    fn y_confirms_and_esc_cancels() {
        let mut popup = ConfirmPopup::new("Delete", "Really?");
        assert_eq!(
            press(&mut popup, KeyCode::Char('y')),
            Some(EventResponse::Stop(Action::PopupResult(PopupResult::Confirmed)))
        );
        assert_eq!(
            press(&mut popup, KeyCode::Esc),
            Some(EventResponse::Stop(Action::PopupResult(PopupResult::Cancelled)))
        );
    }

    #[test]
    fn result_closes_popup() {
        let mut popup = ConfirmPopup::new("Delete", "Really?");
        let next = popup
            .update(Action::PopupResult(PopupResult::Confirmed))
            .expect("update");
        assert_eq!(next, Some(Action::ClosePopup));
    }
}
