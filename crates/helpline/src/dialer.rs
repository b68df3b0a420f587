//! Boundary to the system phone dialer.
//!
//! The app never talks to a phone stack itself. It hands a `tel://` address
//! (or whatever scheme is configured) to the platform URL handler and reports
//! whether the handler accepted it.

use std::{
    path::PathBuf,
    process::{Command, Stdio},
};

use directory::{DialAddress, DialError};
use tracing::{debug, warn};

use crate::config::DialerConfig;

/// What the dialer reported back. `opened == false` means the handler ran but
/// exited with a failure status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallOutcome {
    pub opened: bool,
}

pub trait DialerGateway: Send + Sync {
    /// Human readable name of the handler, used in messages.
    fn handler(&self) -> String;

    /// Whether this dialer can take the address at all.
    fn can_open(&self, address: &DialAddress) -> bool;

    /// Launch the call. Blocks until the handler returns.
    fn open(&self, address: &DialAddress) -> Result<CallOutcome, DialError>;
}

/// Dialer backed by the platform URL handler or a configured command.
#[derive(Debug, Clone)]
pub struct SystemDialer {
    program: String,
    args: Vec<String>,
    scheme: String,
}

impl SystemDialer {
    pub fn new(config: &DialerConfig) -> Self {
        let (program, args) = match config.command.as_deref().map(str::split_whitespace) {
            Some(mut parts) => match parts.next() {
                Some(program) => (program.to_string(), parts.map(String::from).collect()),
                None => platform_launcher(),
            },
            None => platform_launcher(),
        };
        Self {
            program,
            args,
            scheme: config.scheme.clone(),
        }
    }

    fn resolve(&self) -> Option<PathBuf> {
        match which::which(&self.program) {
            Ok(path) => Some(path),
            Err(e) => {
                debug!("dialer handler {} not found: {e}", self.program);
                None
            }
        }
    }
}

impl DialerGateway for SystemDialer {
    fn handler(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }

    fn can_open(&self, address: &DialAddress) -> bool {
        address.scheme() == self.scheme && self.resolve().is_some()
    }

    fn open(&self, address: &DialAddress) -> Result<CallOutcome, DialError> {
        let Some(path) = self.resolve() else {
            return Err(DialError::Unavailable {
                scheme: address.scheme().to_string(),
                handler: self.handler(),
            });
        };
        debug!("launching {} {}", path.display(), address);
        let status = Command::new(&path)
            .args(&self.args)
            .arg(address.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| DialError::NotCompleted {
                number: address.number().to_string(),
                reason: e.to_string(),
            })?;
        if !status.success() {
            warn!("dialer {} exited with {status}", self.program);
        }
        Ok(CallOutcome {
            opened: status.success(),
        })
    }
}

#[cfg(target_os = "macos")]
fn platform_launcher() -> (String, Vec<String>) {
    ("open".into(), Vec::new())
}

#[cfg(windows)]
fn platform_launcher() -> (String, Vec<String>) {
    // leerer Titel, sonst hält `start` die URL für den Fenstertitel
    ("cmd".into(), vec!["/C".into(), "start".into(), String::new()])
}

#[cfg(not(any(target_os = "macos", windows)))]
fn platform_launcher() -> (String, Vec<String>) {
    ("xdg-open".into(), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(command: Option<&str>) -> DialerConfig {
        DialerConfig {
            command: command.map(String::from),
            ..DialerConfig::default()
        }
    }

    #[test]
    fn configured_command_is_split_into_program_and_args() {
        let dialer = SystemDialer::new(&config(Some("my-dialer --call")));
        assert_eq!(dialer.program, "my-dialer");
        assert_eq!(dialer.args, vec!["--call".to_string()]);
        assert_eq!(dialer.handler(), "my-dialer --call");
    }

    #[test]
    fn blank_command_falls_back_to_platform_handler() {
        let dialer = SystemDialer::new(&config(Some("   ")));
        assert_eq!(dialer.program, platform_launcher().0);
    }

    #[test]
    fn missing_handler_is_unavailable() {
        let dialer = SystemDialer::new(&config(Some("helpline-no-such-dialer-binary")));
        let address = DialAddress::parse("100").expect("dialable");
        assert!(!dialer.can_open(&address));
        match dialer.open(&address) {
            Err(DialError::Unavailable { handler, scheme }) => {
                assert_eq!(handler, "helpline-no-such-dialer-binary");
                assert_eq!(scheme, "tel");
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[test]
    fn other_scheme_is_rejected() {
        let dialer = SystemDialer::new(&config(None));
        let address = DialAddress::with_scheme("100", "sip").expect("dialable");
        assert!(!dialer.can_open(&address));
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_decides_outcome() {
        let address = DialAddress::parse("100").expect("dialable");
        let ok = SystemDialer::new(&config(Some("true")));
        assert_eq!(ok.open(&address), Ok(CallOutcome { opened: true }));
        let failing = SystemDialer::new(&config(Some("false")));
        assert_eq!(failing.open(&address), Ok(CallOutcome { opened: false }));
    }
}
