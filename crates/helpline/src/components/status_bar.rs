use color_eyre::Result;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    action::Action,
    components::Component,
    core::state::RootState,
    theme::{Mode, Theme, UiGroup},
    tui::Frame,
};

/// One-line footer: mode chip, last status message, key hints.
///
/// Tracks the mode from `EnterSearch` / `LeaveSearch`; the message comes from
/// `RootState::status`, which the reducer fills with dialer outcomes and
/// add/delete confirmations.
pub struct StatusBar {
    mode: Mode,
    theme: Theme,
}

impl StatusBar {
    pub fn new(theme: Theme) -> Self {
        Self {
            mode: Mode::Normal,
            theme,
        }
    }

    fn hints(&self) -> &'static str {
        match self.mode {
            Mode::Normal => "/ search  ⏎ call  i info  a add  d delete  q quit",
            Mode::Search => "type to filter  ↑/↓ select  ⏎/Esc done",
        }
    }
}

impl Component for StatusBar {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::EnterSearch => self.mode = Mode::Search,
            Action::LeaveSearch => self.mode = Mode::Normal,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &RootState) -> Result<()> {
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.mode.label()),
                self.mode.status_segment_style(&self.theme),
            ),
            Span::raw(" "),
        ];
        match state.status() {
            Some(status) => spans.push(Span::styled(
                status.message.clone(),
                self.theme.status_style(status.kind),
            )),
            None => spans.push(Span::styled(
                self.hints(),
                self.theme.style(UiGroup::Dimmed),
            )),
        }

        let left = Line::from(spans);
        f.render_widget(Paragraph::new(left), area);

        // Hinweise rechts, sobald eine Statusmeldung links steht
        if state.status().is_some() {
            let hints = Span::styled(format!(" {} ", self.hints()), self.theme.chip_style());
            let width = (hints.width() as u16).min(area.width);
            let right = Rect {
                x: area.x + area.width.saturating_sub(width),
                width,
                ..area
            };
            f.render_widget(Paragraph::new(Line::from(hints)), right);
        }
        Ok(())
    }
}
