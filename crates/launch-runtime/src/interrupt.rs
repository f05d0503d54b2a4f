//! Operator interrupts and their delivery to supervised children
//!
//! Once [`Interrupts::arm`] has run, SIGINT (Ctrl-C on Windows) no longer
//! terminates the launcher. Each interrupt is queued until a supervised
//! child is waiting, then passed on to that child so it can shut down on
//! its own terms. A second interrupt while the child is stopping kills it.

use std::path::Path;
use std::process::ExitStatus;

use tokio::process::Child;

use crate::error::{Error, Result};

#[cfg(unix)]
type Listener = tokio::signal::unix::Signal;
#[cfg(windows)]
type Listener = tokio::signal::windows::CtrlC;

#[cfg(unix)]
fn listen() -> std::io::Result<Listener> {
    use tokio::signal::unix::{SignalKind, signal};
    signal(SignalKind::interrupt())
}

#[cfg(windows)]
fn listen() -> std::io::Result<Listener> {
    tokio::signal::windows::ctrl_c()
}

/// Subscription to the launcher's own interrupt signal.
#[derive(Default)]
pub struct Interrupts {
    listener: Option<Listener>,
    armed: bool,
}

impl std::fmt::Debug for Interrupts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interrupts")
            .field("armed", &self.armed)
            .field("listening", &self.listener.is_some())
            .finish()
    }
}

impl Interrupts {
    /// Start listening. Later calls do nothing.
    ///
    /// Must be called from inside a Tokio runtime.
    pub fn arm(&mut self) {
        if self.armed {
            return;
        }
        self.armed = true;
        match listen() {
            Ok(listener) => self.listener = Some(listener),
            Err(e) => tracing::warn!(error = %e, "Could not listen for interrupts"),
        }
    }

    /// Resolves on the next interrupt; never resolves when not listening.
    pub async fn recv(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            if listener.recv().await.is_some() {
                return;
            }
        }
        std::future::pending::<()>().await
    }

    /// Consume an interrupt that already arrived, without waiting.
    pub async fn take_pending(&mut self) -> bool {
        tokio::select! {
            biased;
            _ = self.recv() => true,
            _ = std::future::ready(()) => false,
        }
    }
}

/// How a supervised child finished.
#[derive(Debug)]
pub enum Supervised {
    Exited(ExitStatus),
    /// The operator interrupted, or the child itself died from SIGINT
    Interrupted,
}

/// Wait for `child`, passing operator interrupts on to it.
pub async fn supervise(
    child: &mut Child,
    program: &Path,
    interrupts: &mut Interrupts,
) -> Result<Supervised> {
    let finished = tokio::select! {
        biased;
        _ = interrupts.recv() => None,
        status = child.wait() => Some(status.map_err(|e| Error::spawn(program, e))?),
    };

    if let Some(status) = finished {
        if died_from_interrupt(&status) {
            return Ok(Supervised::Interrupted);
        }
        return Ok(Supervised::Exited(status));
    }

    tracing::info!(program = %program.display(), pid = child.id(), "Interrupt received, stopping child");
    forward_interrupt(child);

    let escalate = tokio::select! {
        status = child.wait() => {
            if let Err(e) = status {
                tracing::warn!(error = %e, "Lost track of the child process");
            }
            false
        }
        _ = interrupts.recv() => true,
    };

    if escalate {
        tracing::warn!(pid = child.id(), "Second interrupt, killing child");
        if let Err(e) = child.start_kill() {
            tracing::warn!(error = %e, "Could not kill the child process");
        }
        if let Err(e) = child.wait().await {
            tracing::warn!(error = %e, "Lost track of the child process");
        }
    }

    Ok(Supervised::Interrupted)
}

#[cfg(unix)]
fn died_from_interrupt(status: &ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    status.signal() == Some(nix::sys::signal::Signal::SIGINT as i32)
}

#[cfg(not(unix))]
fn died_from_interrupt(_status: &ExitStatus) -> bool {
    false
}

#[cfg(unix)]
fn forward_interrupt(child: &Child) {
    use nix::sys::signal::{Signal, kill};
    use nix::unistd::Pid;

    // Already reaped
    let Some(pid) = child.id() else {
        return;
    };
    if let Err(e) = kill(Pid::from_raw(pid as i32), Signal::SIGINT) {
        tracing::warn!(pid, error = %e, "Could not forward interrupt");
    }
}

// A console Ctrl-C already reaches every process attached to the console.
#[cfg(not(unix))]
fn forward_interrupt(_child: &Child) {}
