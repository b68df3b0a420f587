use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use directory::{Contact, DialAddress};
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use crate::{
    action::Action,
    components::{Component, PopupComponent},
    core::{intent_model::Intent, state::RootState},
    tui::{EventResponse, Frame},
};

use super::{centered_rect_fixed, draw_popup_frame};

/// Read-only detail view of one contact.
///
/// Esc/Enter/`i` close it, `c` calls the contact and closes.
pub struct ContactInfoPopup {
    contact: Contact,
    dial: std::result::Result<DialAddress, String>,
}

impl ContactInfoPopup {
    pub fn new(contact: Contact, scheme: &str) -> Self {
        let dial =
            DialAddress::with_scheme(contact.phone_number(), scheme).map_err(|e| e.to_string());
        Self { contact, dial }
    }

    fn field(label: &'static str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:>9}: "), Style::default().fg(Color::DarkGray)),
            Span::raw(value),
        ])
    }
}

impl Component for ContactInfoPopup {
    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<EventResponse<Action>>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('i') => self.cancel_action(),
            KeyCode::Enter => self.submit_action(),
            KeyCode::Char('c') => Some(Action::Intent(Intent::CallContact(self.contact.id()))),
            _ => None,
        };
        Ok(action.map(EventResponse::Stop))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Intent(Intent::CallContact(id)) if id == self.contact.id() => {
                Ok(Some(Action::ClosePopup))
            }
            _ => Ok(None),
        }
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, _state: &RootState) -> Result<()> {
        if area.width < 5 || area.height < 5 {
            return Ok(());
        }
        let dialog = centered_rect_fixed(area, 56, 10);
        let inner = draw_popup_frame(f, dialog, "Contact");

        let dial = match &self.dial {
            Ok(address) => Span::raw(address.to_string()),
            Err(e) => Span::styled(e.clone(), Style::default().fg(Color::Red)),
        };
        let name = if self.contact.name().is_empty() {
            "(no name)".to_string()
        } else {
            self.contact.name().to_string()
        };
        let lines = vec![
            Self::field("Name", name),
            Self::field("Number", self.contact.phone_number().to_string()),
            Self::field("Type", self.contact.category().label().to_string()),
            Line::from(vec![
                Span::styled(format!("{:>9}: ", "Dial"), Style::default().fg(Color::DarkGray)),
                dial,
            ]),
            Line::raw(""),
            Line::from(vec![
                Span::styled("c", Style::default().fg(Color::White)),
                Span::raw(": Call   "),
                Span::styled("Esc/Enter", Style::default().fg(Color::White)),
                Span::raw(": Close"),
            ])
            .fg(Color::DarkGray),
        ];
        f.render_widget(Paragraph::new(Text::from(lines)), inner);
        Ok(())
    }
}

impl PopupComponent for ContactInfoPopup {}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use directory::Category;

    fn press(popup: &mut ContactInfoPopup, code: KeyCode) -> Option<EventResponse<Action>> {
        popup
            .handle_key_events(KeyEvent::new(code, KeyModifiers::NONE))
            .expect("key handling")
    }

    #[test]
    fn esc_and_enter_close() {
        let police = Contact::new("Police", "100", Category::Emergency);
        let mut popup = ContactInfoPopup::new(police, "tel");
        assert_eq!(
            press(&mut popup, KeyCode::Esc),
            Some(EventResponse::Stop(Action::ClosePopup))
        );
        assert_eq!(
            press(&mut popup, KeyCode::Enter),
            Some(EventResponse::Stop(Action::ClosePopup))
        );
    }

    #[test]
    fn c_calls_this_contact_then_closes() {
        let contact = Contact::new("Police", "100", Category::Emergency);
        let id = contact.id();
        let mut popup = ContactInfoPopup::new(contact, "tel");
        let call = Action::Intent(Intent::CallContact(id));
        assert_eq!(
            press(&mut popup, KeyCode::Char('c')),
            Some(EventResponse::Stop(call.clone()))
        );
        assert_eq!(popup.update(call).expect("update"), Some(Action::ClosePopup));
    }

    #[test]
    fn undialable_number_is_shown_as_error() {
        let broken = Contact::new("Broken", "  ", Category::Custom);
        let popup = ContactInfoPopup::new(broken, "tel");
        assert!(popup.dial.is_err());
    }
}
