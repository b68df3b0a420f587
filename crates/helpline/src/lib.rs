//! Helpline terminal UI.
//!
//! Layout of the crate:
//!   - `core`       : root state, reducer, effects, task executor and the event loop
//!   - `components` : search bar, contact list, status bar and the popups
//!   - `dialer`     : boundary to the system phone dialer
//!   - `tui`        : terminal setup + crossterm event stream
//!   - `cli`, `config`, `errors`, `logging`, `commands` : process plumbing
pub mod action;
pub mod cli;
pub mod commands;
pub mod components;
pub mod config;
pub mod core;
pub mod dialer;
pub mod errors;
pub mod keymap;
pub mod logging;
pub mod theme;
pub mod tui;
