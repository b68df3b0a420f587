use directory::{Category, Contact};
use strum::Display;

use crate::core::{effects::TaskResultKind, executor::TaskId, intent_model::Intent};

#[derive(Debug, Clone, PartialEq, Display)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    ClearScreen,
    Error(String),
    /// Redraw request without state change (e.g. a keystroke inside a popup).
    Update,
    Submit,
    EnterSearch,
    LeaveSearch,
    Intent(Intent),
    ClosePopup,
    PopupResult(PopupResult),
    /// Completion callback from the task executor.
    TaskFinished(TaskId, TaskResultKind),
}

/// Popups the reducer may ask for.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupRequest {
    AddContact,
    Info(Contact),
    ConfirmDelete(Contact),
}

/// Outcome reported by a popup when it is submitted or dismissed.
#[derive(Debug, Clone, PartialEq)]
pub enum PopupResult {
    Confirmed,
    Cancelled,
    ContactSubmitted {
        name: String,
        phone_number: String,
        category: Category,
    },
}
