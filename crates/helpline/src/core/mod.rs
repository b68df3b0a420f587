//! Kern der Helpline-TUI.
//!
//! Datenfluss:
//!   Taste -> `keymap` / Komponente -> `Action::Intent` -> `reducer::reduce`
//!   -> `Vec<Effect>` -> `executor` (Anrufe) -> `Action::TaskFinished`
//!   -> `reducer::reduce_internal`.
//!
//!   - `state`        : `RootState` (Store, Suchtext, Auswahl, Statuszeile)
//!   - `intent_model` : Intents der Oberfläche
//!   - `reducer`      : reine Zustandsübergänge, liefert Effekte
//!   - `effects`      : Effect / TaskKind / TaskResultKind
//!   - `executor`     : Hintergrund-Worker für Anrufe
//!   - `app`          : Komponenten + Rendering
//!   - `loop`         : Event-/Action-Schleife
pub mod app;
pub mod effects;
pub mod executor;
pub mod intent_model;
pub mod r#loop;
pub mod reducer;
pub mod state;
