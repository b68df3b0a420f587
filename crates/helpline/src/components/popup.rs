use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Block, Borders, Clear},
};

use crate::{action::Action, components::Component, tui::Frame};

/// Popup components and the helpers to draw them.
///
/// Drawing order:
/// 1) draw the main screen as usual
/// 2) if a popup is active, call `render_backdrop(frame, area)`, then let the
///    popup compute its dialog rect with `centered_rect_fixed` and draw its
///    shell with `draw_popup_frame` before its content
pub trait PopupComponent: Component {
    /// Modal popups swallow every event that is not theirs.
    fn is_modal(&self) -> bool {
        true
    }

    /// Action for Enter. Defaults to closing the popup.
    fn submit_action(&mut self) -> Option<Action> {
        Some(Action::ClosePopup)
    }

    /// Action for Esc. Defaults to closing the popup.
    fn cancel_action(&mut self) -> Option<Action> {
        Some(Action::ClosePopup)
    }
}

/// Dim the screen behind a popup. Terminals have no transparency, so this
/// only recolours the background; text under it stays readable.
pub fn render_backdrop(frame: &mut Frame<'_>, area: Rect) {
    let backdrop = Block::default().style(Style::default().fg(Color::DarkGray));
    frame.render_widget(backdrop, area);
}

/// A `width` x `height` rect centered in `area`, clamped to it.
pub fn centered_rect_fixed(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);

    let x = area.x.saturating_add((area.width.saturating_sub(w)) / 2);
    let y = area.y.saturating_add((area.height.saturating_sub(h)) / 2);

    Rect {
        x,
        y,
        width: w,
        height: h,
    }
}

/// Clear `area` and draw a rounded, titled border. Returns the inner rect.
pub fn draw_popup_frame(frame: &mut Frame<'_>, area: Rect, title: impl Into<String>) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title.into()))
        .borders(Borders::ALL)
        .border_set(symbols::border::ROUNDED)
        .style(Style::default().fg(Color::White).bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect_fixed(area, 60, 10), Rect::new(20, 15, 60, 10));
        assert_eq!(centered_rect_fixed(area, 200, 80), area);
    }

    #[test]
    fn centered_rect_respects_offset_area() {
        let area = Rect::new(10, 5, 20, 10);
        assert_eq!(centered_rect_fixed(area, 10, 4), Rect::new(15, 8, 10, 4));
    }
}
