use color_eyre::Result;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{
    components::Component,
    core::state::RootState,
    theme::{Theme, UiGroup},
    tui::Frame,
};

/// The sorted, filtered directory. Purely a view: the selection lives in
/// `RootState` and is only mirrored into the widget state when drawing.
pub struct ContactList {
    list_state: ListState,
    theme: Theme,
}

impl ContactList {
    pub fn new(theme: Theme) -> Self {
        Self {
            list_state: ListState::default(),
            theme,
        }
    }

    fn row(&self, name: &str, number: &str, label: Span<'static>, width: u16) -> Line<'static> {
        let name = if name.is_empty() { "(no name)" } else { name };
        let right = format!("{number}  ");
        let used = name.chars().count() + right.chars().count() + label.width() + 2;
        let pad = (width as usize).saturating_sub(used);
        Line::from(vec![
            Span::raw(format!(" {name}")),
            Span::raw(" ".repeat(pad.max(1))),
            Span::styled(right, self.theme.style(UiGroup::Dimmed)),
            label,
        ])
    }
}

impl Component for ContactList {
    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &RootState) -> Result<()> {
        let contacts = state.display_list();
        let block = Block::default()
            .title(format!(" Contacts ({}) ", contacts.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.style(UiGroup::Border));

        if contacts.is_empty() {
            let message = if state.query().is_empty() {
                "The directory is empty. Press a to add a contact.".to_string()
            } else {
                format!("No contacts match \"{}\"", state.query())
            };
            let empty = Paragraph::new(Line::from(Span::styled(
                message,
                self.theme.style(UiGroup::Dimmed),
            )))
            .alignment(Alignment::Center)
            .block(block);
            f.render_widget(empty, area);
            return Ok(());
        }

        let width = block.inner(area).width;
        let items: Vec<ListItem> = contacts
            .iter()
            .map(|c| {
                let label = Span::styled(
                    c.category().label(),
                    self.theme.category_style(c.category()),
                );
                ListItem::new(self.row(c.name(), c.phone_number(), label, width))
            })
            .collect();

        self.list_state.select(state.selected_index());
        let list = List::new(items)
            .block(block)
            .highlight_style(self.theme.style(UiGroup::Selected))
            .highlight_symbol("▶");
        f.render_stateful_widget(list, area, &mut self.list_state);
        Ok(())
    }
}
