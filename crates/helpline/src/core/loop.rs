use color_eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, error, info};

use crate::{
    action::{Action, PopupResult},
    components::Component,
    core::{
        app::HelplineApp,
        effects::{Effect, InternalEvent},
        executor::TaskExecutor,
        reducer,
    },
    keymap,
    theme::Mode,
    tui::{Event, EventResponse, Tui},
};

/// The application event loop.
///
/// Owns the terminal while borrowing the app state. Per iteration:
/// 1. one terminal event is routed popup -> search bar -> key bindings and
///    turned into actions
/// 2. all queued actions are processed: intents through the reducer, effects
///    to the executor, popup lifecycle, rendering
/// 3. suspend / quit flags are honoured
pub struct AppLoop<'a> {
    app: &'a mut HelplineApp,
    tui: Tui,
}

impl<'a> AppLoop<'a> {
    pub fn new(app: &'a mut HelplineApp) -> Result<Self> {
        let tui = Tui::new()?
            .tick_rate(app.config.tick_rate)
            .frame_rate(app.config.frame_rate);
        Ok(Self { app, tui })
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
        let executor = TaskExecutor::new(
            action_tx.clone(),
            self.app.dialer.clone(),
            self.app.config.dialer.scheme.clone(),
        );

        self.tui.enter()?;
        info!("tui started");

        loop {
            if let Some(event) = self.tui.next_event().await {
                self.handle_event(event, &action_tx)?;
            }

            while let Ok(action) = action_rx.try_recv() {
                self.handle_action(action, &action_tx, &executor)?;
            }

            if self.app.should_suspend {
                self.tui.suspend()?;
                action_tx.send(Action::Resume).ok();
                action_tx.send(Action::ClearScreen).ok();
                self.tui.resume()?;
            } else if self.app.should_quit {
                self.tui.stop()?;
                break;
            }
        }
        self.tui.exit()?;
        info!("tui stopped");
        Ok(())
    }

    fn handle_event(&mut self, event: Event, action_tx: &UnboundedSender<Action>) -> Result<()> {
        match event {
            Event::Tick => {
                action_tx.send(Action::Tick).ok();
                return Ok(());
            }
            Event::Render => {
                action_tx.send(Action::Render).ok();
                return Ok(());
            }
            Event::Resize(w, h) => {
                action_tx.send(Action::Resize(w, h)).ok();
                return Ok(());
            }
            Event::Error => {
                action_tx
                    .send(Action::Error("terminal event stream error".into()))
                    .ok();
                return Ok(());
            }
            _ => {}
        }

        // 1. Popup
        if let Some(popup) = self.app.popup.as_mut() {
            let response = popup.handle_events(event.clone())?;
            if dispatch(response, action_tx) || popup.is_modal() {
                return Ok(());
            }
        }

        // 2. Suchleiste (nur im Suchmodus)
        if self.app.mode == Mode::Search {
            let response = self.app.search_bar.handle_events(event.clone())?;
            if dispatch(response, action_tx) {
                return Ok(());
            }
        }

        // 3. globale Tastenbelegung
        if let Event::Key(key) = event {
            if let Some(action) = keymap::action_for_key(key) {
                action_tx.send(action).ok();
            }
        }
        Ok(())
    }

    fn handle_action(
        &mut self,
        action: Action,
        action_tx: &UnboundedSender<Action>,
        executor: &TaskExecutor,
    ) -> Result<()> {
        match &action {
            Action::Tick | Action::Render => {}
            _ => debug!("{action}"),
        }

        match action.clone() {
            Action::Quit => self.app.should_quit = true,
            Action::Suspend => self.app.should_suspend = true,
            Action::Resume => self.app.should_suspend = false,
            Action::ClearScreen => self.tui.terminal.clear()?,
            Action::Resize(w, h) => {
                self.tui.resize(Rect::new(0, 0, w, h))?;
                self.render(action_tx)?;
            }
            Action::Render | Action::Update => self.render(action_tx)?,
            Action::Error(msg) => error!("{msg}"),
            Action::EnterSearch => self.app.mode = Mode::Search,
            Action::LeaveSearch => self.app.mode = Mode::Normal,
            Action::Intent(intent) => {
                let effects = reducer::reduce(&mut self.app.root_state, intent);
                run_effects(effects, executor);
                self.bridge_root_state();
            }
            Action::ClosePopup => self.app.close_popup(),
            Action::PopupResult(result) => match result {
                PopupResult::Confirmed => {
                    if let Some(intent) = self.app.pending_confirm.take() {
                        action_tx.send(Action::Intent(intent)).ok();
                    }
                }
                PopupResult::Cancelled => self.app.pending_confirm = None,
                PopupResult::ContactSubmitted {
                    name,
                    phone_number,
                    category,
                } => {
                    action_tx
                        .send(Action::Intent(
                            crate::core::intent_model::Intent::AddContact {
                                name,
                                phone_number,
                                category,
                            },
                        ))
                        .ok();
                }
            },
            Action::TaskFinished(id, result) => {
                let effects = reducer::reduce_internal(
                    &mut self.app.root_state,
                    InternalEvent::TaskFinished { id, result },
                );
                run_effects(effects, executor);
            }
            Action::Tick | Action::Submit => {}
        }

        // Komponenten sehen jede Action; Folge-Actions wieder in die Queue
        self.app.search_bar.update(action.clone())?;
        self.app.status_bar.update(action.clone())?;
        if let Some(popup) = self.app.popup.as_mut() {
            if let Some(next) = popup.update(action)? {
                action_tx.send(next).ok();
            }
        }
        Ok(())
    }

    /// Apply what the reducer left for the app: quit flag and popup request.
    fn bridge_root_state(&mut self) {
        if self.app.root_state.quit_requested {
            self.app.should_quit = true;
        }
        if let Some(request) = self.app.root_state.pending_popup.take() {
            self.app.open_popup(request);
        }
    }

    fn render(&mut self, action_tx: &UnboundedSender<Action>) -> Result<()> {
        self.tui.draw(|f| {
            if let Err(err) = self.app.render(f) {
                action_tx
                    .send(Action::Error(format!("Failed to draw: {:?}", err)))
                    .ok();
            }
        })?;
        Ok(())
    }
}

/// Send the action of a component response. Returns whether propagation
/// stops here.
fn dispatch(response: Option<EventResponse<Action>>, action_tx: &UnboundedSender<Action>) -> bool {
    match response {
        Some(EventResponse::Continue(action)) => {
            action_tx.send(action).ok();
            false
        }
        Some(EventResponse::Stop(action)) => {
            action_tx.send(action).ok();
            true
        }
        None => false,
    }
}

fn run_effects(effects: Vec<Effect>, executor: &TaskExecutor) {
    for eff in effects {
        match eff {
            Effect::None => {}
            Effect::Log(msg) => info!("[effect] {msg}"),
            Effect::Async(task) => {
                info!("[effect] schedule async task: {task}");
                executor.spawn(task);
            }
        }
    }
}
