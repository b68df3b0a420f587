/*!
Task executor.

Takes the reducer's `Effect::Async(TaskKind)` off the UI loop:

1. The loop calls [`TaskExecutor::spawn`] with the task kind.
2. A single Tokio worker pulls tasks from an unbounded channel.
3. Blocking work (launching the dialer) runs on `spawn_blocking`.
4. The worker reports with `Action::TaskFinished(id, TaskResultKind)` on the
   action channel, where the loop feeds it to `reducer::reduce_internal`.

Failures never escape the worker: they are logged and reported as a result
kind. There is no retry and no timeout. Pending tasks are dropped on shutdown.
*/

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use directory::{DialAddress, DialError};
use log::{info, warn};
use tokio::sync::mpsc;

use crate::action::Action;
use crate::core::effects::{TaskKind, TaskResultKind};
use crate::dialer::{CallOutcome, DialerGateway};

/// Monotonic task identifier type.
pub type TaskId = u64;

/// Handle for scheduling background tasks. Cloning clones the sender.
#[derive(Clone)]
pub struct TaskExecutor {
    tx: mpsc::UnboundedSender<Dispatch>,
}

struct Dispatch {
    id: TaskId,
    kind: TaskKind,
}

impl TaskExecutor {
    /// Create the executor and spawn its worker. Must be called inside a
    /// Tokio runtime.
    ///
    /// `scheme` is the dial scheme used to build addresses (`tel` by default).
    pub fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        dialer: Arc<dyn DialerGateway>,
        scheme: impl Into<String>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Dispatch>();
        Worker {
            rx,
            action_tx,
            dialer,
            scheme: scheme.into(),
        }
        .spawn();
        Self { tx }
    }

    /// Schedule a task and return its id.
    pub fn spawn(&self, kind: TaskKind) -> TaskId {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        if let Err(e) = self.tx.send(Dispatch { id, kind }) {
            warn!(
                "TaskExecutor channel closed; failed to schedule task: {}",
                e.0.kind
            );
        }
        id
    }
}

struct Worker {
    rx: mpsc::UnboundedReceiver<Dispatch>,
    action_tx: mpsc::UnboundedSender<Action>,
    dialer: Arc<dyn DialerGateway>,
    scheme: String,
}

impl Worker {
    fn emit(&self, id: TaskId, result: TaskResultKind) {
        // Empfänger weg heißt: App beendet sich gerade
        let _ = self.action_tx.send(Action::TaskFinished(id, result));
    }

    fn spawn(mut self) {
        tokio::spawn(async move {
            while let Some(dispatch) = self.rx.recv().await {
                if let Err(e) = self.handle(dispatch).await {
                    warn!("Task execution failed: {e}");
                }
            }
            info!("TaskExecutor worker stopped (channel closed)");
        });
    }

    async fn handle(&self, dispatch: Dispatch) -> Result<(), DialError> {
        let id = dispatch.id;
        match dispatch.kind {
            TaskKind::PlaceCall {
                contact,
                phone_number,
            } => {
                let address = match DialAddress::with_scheme(&phone_number, &self.scheme) {
                    Ok(address) => address,
                    Err(error) => {
                        self.emit(
                            id,
                            TaskResultKind::MalformedNumber {
                                contact,
                                error: error.clone(),
                            },
                        );
                        return Err(error);
                    }
                };

                if !self.dialer.can_open(&address) {
                    let error = DialError::Unavailable {
                        scheme: address.scheme().to_string(),
                        handler: self.dialer.handler(),
                    };
                    self.emit(
                        id,
                        TaskResultKind::DialerUnavailable {
                            contact,
                            error: error.clone(),
                        },
                    );
                    return Err(error);
                }

                info!("[task:{id}] dialing {contact} via {address}");
                let dialer = Arc::clone(&self.dialer);
                let target = address.clone();
                let outcome = match tokio::task::spawn_blocking(move || dialer.open(&target)).await
                {
                    Ok(outcome) => outcome,
                    Err(join) => Err(DialError::NotCompleted {
                        number: address.number().to_string(),
                        reason: join.to_string(),
                    }),
                };

                match outcome {
                    Ok(CallOutcome { opened: true }) => {
                        info!("[task:{id}] dialer accepted {address}");
                        self.emit(
                            id,
                            TaskResultKind::CallOpened {
                                contact,
                                number: address.number().to_string(),
                            },
                        );
                        Ok(())
                    }
                    Ok(CallOutcome { opened: false }) => {
                        let error = DialError::NotCompleted {
                            number: address.number().to_string(),
                            reason: format!("{} reported failure", self.dialer.handler()),
                        };
                        self.emit(
                            id,
                            TaskResultKind::CallFailed {
                                contact,
                                error: error.clone(),
                            },
                        );
                        Err(error)
                    }
                    Err(error) => {
                        self.emit(
                            id,
                            TaskResultKind::CallFailed {
                                contact,
                                error: error.clone(),
                            },
                        );
                        Err(error)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records opened addresses instead of launching anything.
    struct FakeDialer {
        available: bool,
        opened: bool,
        calls: Mutex<Vec<String>>,
    }

    impl FakeDialer {
        fn new(available: bool, opened: bool) -> Arc<Self> {
            Arc::new(Self {
                available,
                opened,
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    impl DialerGateway for FakeDialer {
        fn handler(&self) -> String {
            "fake".into()
        }

        fn can_open(&self, _address: &DialAddress) -> bool {
            self.available
        }

        fn open(&self, address: &DialAddress) -> Result<CallOutcome, DialError> {
            self.calls
                .lock()
                .expect("lock")
                .push(address.as_str().to_string());
            Ok(CallOutcome {
                opened: self.opened,
            })
        }
    }

    fn place_call(number: &str) -> TaskKind {
        TaskKind::PlaceCall {
            contact: "Police".into(),
            phone_number: number.into(),
        }
    }

    async fn finished(rx: &mut mpsc::UnboundedReceiver<Action>) -> (TaskId, TaskResultKind) {
        match rx.recv().await {
            Some(Action::TaskFinished(id, result)) => (id, result),
            other => panic!("expected TaskFinished, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn successful_call_reports_opened() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dialer = FakeDialer::new(true, true);
        let exec = TaskExecutor::new(tx, dialer.clone(), "tel");

        let id = exec.spawn(place_call("1 00"));
        let (done, result) = finished(&mut rx).await;

        assert_eq!(done, id);
        assert_eq!(
            result,
            TaskResultKind::CallOpened {
                contact: "Police".into(),
                number: "100".into(),
            }
        );
        assert_eq!(
            *dialer.calls.lock().expect("lock"),
            vec!["tel://100".to_string()]
        );
    }

    #[tokio::test]
    async fn malformed_number_never_reaches_dialer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let dialer = FakeDialer::new(true, true);
        let exec = TaskExecutor::new(tx, dialer.clone(), "tel");

        exec.spawn(place_call("   "));
        let (_, result) = finished(&mut rx).await;

        assert_eq!(
            result,
            TaskResultKind::MalformedNumber {
                contact: "Police".into(),
                error: DialError::Empty,
            }
        );
        assert!(dialer.calls.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn unavailable_dialer_is_reported() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let exec = TaskExecutor::new(tx, FakeDialer::new(false, true), "tel");

        exec.spawn(place_call("100"));
        let (_, result) = finished(&mut rx).await;

        assert!(matches!(
            result,
            TaskResultKind::DialerUnavailable {
                error: DialError::Unavailable { .. },
                ..
            }
        ));
    }

    #[tokio::test]
    async fn failed_handler_reports_not_completed() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let exec = TaskExecutor::new(tx, FakeDialer::new(true, false), "tel");

        exec.spawn(place_call("100"));
        let (_, result) = finished(&mut rx).await;

        assert!(matches!(
            result,
            TaskResultKind::CallFailed {
                error: DialError::NotCompleted { .. },
                ..
            }
        ));
    }

    #[tokio::test]
    async fn task_ids_are_monotonic() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let exec = TaskExecutor::new(tx, FakeDialer::new(true, true), "tel");
        let first = exec.spawn(place_call("100"));
        let second = exec.spawn(place_call("101"));
        assert!(second > first);
    }
}
