/*!
Effect & task model.

The reducer never performs I/O. It returns `Effect`s, and the event loop
interprets them:

- `Effect::Log` is written to the log file,
- `Effect::Async(TaskKind)` is handed to the [`TaskExecutor`](crate::core::executor::TaskExecutor),
  which reports back with `Action::TaskFinished(id, TaskResultKind)`.

The loop converts that action into an [`InternalEvent`] and feeds it to
`reducer::reduce_internal`, so task outcomes land in `RootState` through the
same pure path as user intents.
*/

use std::fmt;

use directory::DialError;

/// Declarative instruction emitted by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Explicit "no effect" marker.
    None,
    /// Spawn background work.
    Async(TaskKind),
    /// Info-level log line.
    Log(String),
}

impl Effect {
    pub fn log<T: Into<String>>(msg: T) -> Self {
        Effect::Log(msg.into())
    }

    pub fn async_task(kind: TaskKind) -> Self {
        Effect::Async(kind)
    }

    pub fn none() -> Self {
        Effect::None
    }
}

/// Background work units. Each variant carries everything the executor needs.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskKind {
    /// Hand a number to the system dialer. `contact` is the display name,
    /// only used for reporting.
    PlaceCall {
        contact: String,
        phone_number: String,
    },
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::PlaceCall {
                contact,
                phone_number,
            } => write!(f, "PlaceCall({contact}, {phone_number})"),
        }
    }
}

/// Outcomes produced by the executor.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskResultKind {
    /// The dialer accepted the address.
    CallOpened { contact: String, number: String },
    /// The dialer was launched but the call attempt failed.
    CallFailed { contact: String, error: DialError },
    /// No handler for the dial scheme; nothing was launched.
    DialerUnavailable { contact: String, error: DialError },
    /// The stored number cannot be dialed; nothing was launched.
    MalformedNumber { contact: String, error: DialError },
}

impl TaskResultKind {
    pub fn is_success(&self) -> bool {
        matches!(self, TaskResultKind::CallOpened { .. })
    }
}

/// Events that enter the reducer from inside the system rather than from the
/// user.
#[derive(Debug, Clone, PartialEq)]
pub enum InternalEvent {
    TaskFinished { id: u64, result: TaskResultKind },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_log_effect() {
        match Effect::log("hello") {
            Effect::Log(s) => assert_eq!(s, "hello"),
            other => panic!("expected Log variant, got {other:?}"),
        }
    }

    #[test]
    fn place_call_display_names_contact_and_number() {
        let kind = TaskKind::PlaceCall {
            contact: "Police".into(),
            phone_number: "100".into(),
        };
        assert_eq!(kind.to_string(), "PlaceCall(Police, 100)");
    }

    #[test]
    fn only_opened_calls_count_as_success() {
        let opened = TaskResultKind::CallOpened {
            contact: "Police".into(),
            number: "100".into(),
        };
        let failed = TaskResultKind::MalformedNumber {
            contact: "Broken".into(),
            error: DialError::Empty,
        };
        assert!(opened.is_success());
        assert!(!failed.is_success());
    }
}
