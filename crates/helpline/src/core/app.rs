use std::sync::Arc;

use color_eyre::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::info;

use crate::{
    action::PopupRequest,
    components::{
        Component, PopupComponent,
        contact_list::ContactList,
        popups::{
            add_contact::AddContactPopup, confirm::ConfirmPopup, contact_info::ContactInfoPopup,
            render_backdrop,
        },
        search_bar::SearchBar,
        status_bar::StatusBar,
    },
    config::Config,
    core::{intent_model::Intent, state::RootState},
    dialer::{DialerGateway, SystemDialer},
    theme::{Mode, Theme, UiGroup},
};

pub const TITLE: &str = "Important Contacts";

pub struct HelplineApp {
    pub config: Config,
    pub root_state: RootState,
    pub search_bar: SearchBar,
    pub contact_list: ContactList,
    pub status_bar: StatusBar,
    pub popup: Option<Box<dyn PopupComponent>>,
    /// Intent to dispatch once the open confirm popup answers `Confirmed`.
    pub pending_confirm: Option<Intent>,
    pub mode: Mode,
    pub theme: Theme,
    pub dialer: Arc<dyn DialerGateway>,
    pub should_quit: bool,
    pub should_suspend: bool,
}

impl HelplineApp {
    pub fn new(config: Config) -> Result<Self> {
        let dialer = Arc::new(SystemDialer::new(&config.dialer));
        info!("dialer handler: {}", dialer.handler());
        Ok(Self::with_dialer(config, RootState::with_seed(), dialer))
    }

    /// App over an explicit state and dialer (tests, alternative frontends).
    pub fn with_dialer(
        config: Config,
        root_state: RootState,
        dialer: Arc<dyn DialerGateway>,
    ) -> Self {
        let theme = Theme::from_env_auto();
        Self {
            config,
            root_state,
            search_bar: SearchBar::new(theme.clone()),
            contact_list: ContactList::new(theme.clone()),
            status_bar: StatusBar::new(theme.clone()),
            popup: None,
            pending_confirm: None,
            mode: Mode::Normal,
            theme,
            dialer,
            should_quit: false,
            should_suspend: false,
        }
    }

    /// Turn a popup request from the reducer into a live popup.
    pub fn open_popup(&mut self, request: PopupRequest) {
        self.pending_confirm = None;
        let popup: Box<dyn PopupComponent> = match request {
            PopupRequest::AddContact => Box::new(AddContactPopup::new()),
            PopupRequest::Info(contact) => {
                Box::new(ContactInfoPopup::new(contact, &self.config.dialer.scheme))
            }
            PopupRequest::ConfirmDelete(contact) => {
                self.pending_confirm = Some(Intent::DeleteContact(contact.id()));
                let question = format!(
                    "Delete \"{}\" ({})?\nThis cannot be undone.",
                    contact.name(),
                    contact.phone_number()
                );
                Box::new(
                    ConfirmPopup::new("Delete contact", question)
                        .ok_label("Delete")
                        .cancel_label("Keep"),
                )
            }
        };
        self.popup = Some(popup);
    }

    pub fn close_popup(&mut self) {
        self.popup = None;
        self.pending_confirm = None;
    }

    pub fn render(&mut self, frame: &mut Frame<'_>) -> Result<()> {
        let area = frame.area();
        let [header, search, list, footer] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .areas(area);

        let title = Line::from(vec![
            Span::styled(format!(" {TITLE} "), self.theme.style(UiGroup::Title)),
            Span::styled(
                format!("· {} entries", self.root_state.store().len()),
                self.theme.style(UiGroup::Dimmed),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), header);

        self.search_bar.draw(frame, search, &self.root_state)?;
        self.contact_list.draw(frame, list, &self.root_state)?;
        self.status_bar.draw(frame, footer, &self.root_state)?;

        if let Some(popup) = self.popup.as_mut() {
            render_backdrop(frame, area);
            popup.draw(frame, area, &self.root_state)?;
        }
        Ok(())
    }
}
