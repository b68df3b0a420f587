use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use directory::Category;
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use strum::IntoEnumIterator;
use tui_input::Input;

use crate::{
    action::{Action, PopupResult},
    components::{Component, PopupComponent, input_request},
    core::state::RootState,
    tui::{EventResponse, Frame},
};

use super::{centered_rect_fixed, draw_popup_frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Phone,
    Type,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::Name => Field::Phone,
            Field::Phone => Field::Type,
            Field::Type => Field::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            Field::Name => Field::Type,
            Field::Phone => Field::Name,
            Field::Type => Field::Phone,
        }
    }
}

/// Form for a new contact: name, phone number and a type picker.
///
/// - Tab/Down, BackTab/Up: move between fields
/// - Left/Right or Space on the type field: cycle the category
/// - Enter: submit as `PopupResult::ContactSubmitted`
/// - Esc: `PopupResult::Cancelled`
///
/// Fields are not validated; empty name or number are submitted as they are.
pub struct AddContactPopup {
    name: Input,
    phone: Input,
    category: Category,
    focus: Field,
}

impl Default for AddContactPopup {
    fn default() -> Self {
        Self::new()
    }
}

impl AddContactPopup {
    pub fn new() -> Self {
        Self {
            name: Input::default(),
            phone: Input::default(),
            category: Category::default(),
            focus: Field::Name,
        }
    }

    fn result(&self) -> Action {
        Action::PopupResult(PopupResult::ContactSubmitted {
            name: self.name.value().to_string(),
            phone_number: self.phone.value().to_string(),
            category: self.category,
        })
    }

    fn cycle_category(&mut self, forward: bool) {
        let all: Vec<Category> = Category::iter().collect();
        let pos = all.iter().position(|c| *c == self.category).unwrap_or(0);
        let next = if forward {
            (pos + 1) % all.len()
        } else {
            (pos + all.len() - 1) % all.len()
        };
        self.category = all[next];
    }

    fn active_input(&mut self) -> Option<&mut Input> {
        match self.focus {
            Field::Name => Some(&mut self.name),
            Field::Phone => Some(&mut self.phone),
            Field::Type => None,
        }
    }
}

/// Bordered single-line text field. Long values are cut at the front so the
/// end (and the cursor) stays visible.
fn text_field(f: &mut Frame<'_>, area: Rect, label: &str, value: &str, focused: bool) {
    let border = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);
    let keep = block.inner(area).width.saturating_sub(1) as usize;
    let len = value.chars().count();
    let visible: String = value.chars().skip(len.saturating_sub(keep)).collect();
    f.render_widget(Paragraph::new(visible).block(block), area);
}

impl Component for AddContactPopup {
    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<EventResponse<Action>>> {
        let action = match key.code {
            KeyCode::Enter => self.submit_action(),
            KeyCode::Esc => self.cancel_action(),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                Some(Action::Update)
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                Some(Action::Update)
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if self.focus == Field::Type => {
                self.cycle_category(key.code != KeyCode::Left);
                Some(Action::Update)
            }
            _ => {
                if let (Some(req), Some(input)) = (input_request(key), self.active_input()) {
                    input.handle(req);
                }
                Some(Action::Update)
            }
        };
        Ok(action.map(EventResponse::Stop))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Submit => Ok(self.submit_action()),
            Action::PopupResult(PopupResult::ContactSubmitted { .. })
            | Action::PopupResult(PopupResult::Cancelled) => Ok(Some(Action::ClosePopup)),
            _ => Ok(None),
        }
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, _state: &RootState) -> Result<()> {
        if area.width < 5 || area.height < 5 {
            return Ok(());
        }
        let dialog = centered_rect_fixed(area, 50, 14);
        let inner = draw_popup_frame(f, dialog, "Add Contact");
        if inner.height < 9 {
            return Ok(());
        }

        let row = |i: u16| Rect {
            y: inner.y + 3 * i,
            height: 3,
            ..inner
        };

        let field_width = inner.width.saturating_sub(2);
        let name_area = row(0);
        let phone_area = row(1);
        let type_area = row(2);
        text_field(f, name_area, "Name", self.name.value(), self.focus == Field::Name);
        text_field(
            f,
            phone_area,
            "Phone Number",
            self.phone.value(),
            self.focus == Field::Phone,
        );

        let focused = self.focus == Field::Type;
        let picker = Line::from(vec![
            Span::raw(" Type: "),
            Span::styled(
                format!("‹ {} ›", self.category.label()),
                if focused {
                    Style::default().fg(Color::Black).bg(Color::White).bold()
                } else {
                    Style::default().fg(Color::White)
                },
            ),
        ]);
        let picker_area = Rect {
            y: type_area.y + 1,
            height: 1,
            ..type_area
        };
        f.render_widget(Paragraph::new(picker), picker_area);

        let hints_y = inner.y + inner.height.saturating_sub(1);
        if hints_y > type_area.y + 1 {
            let hints = Line::from(vec![
                Span::styled("Tab", Style::default().fg(Color::White)),
                Span::raw(": Next   "),
                Span::styled("Enter", Style::default().fg(Color::White)),
                Span::raw(": Save   "),
                Span::styled("Esc", Style::default().fg(Color::White)),
                Span::raw(": Cancel"),
            ])
            .fg(Color::DarkGray);
            let hints_area = Rect {
                y: hints_y,
                height: 1,
                ..inner
            };
            f.render_widget(Paragraph::new(hints), hints_area);
        }

        // Cursor ins aktive Textfeld
        let cursor_field = match self.focus {
            Field::Name => Some((name_area, &self.name)),
            Field::Phone => Some((phone_area, &self.phone)),
            Field::Type => None,
        };
        if let Some((rect, input)) = cursor_field {
            if rect.height >= 3 && rect.width > 2 {
                let col = (input.visual_cursor() as u16).min(field_width.saturating_sub(1));
                f.set_cursor_position((rect.x + 1 + col, rect.y + 1));
            }
        }
        Ok(())
    }
}

impl PopupComponent for AddContactPopup {
    fn submit_action(&mut self) -> Option<Action> {
        Some(self.result())
    }

    fn cancel_action(&mut self) -> Option<Action> {
        Some(Action::PopupResult(PopupResult::Cancelled))
    }
}
