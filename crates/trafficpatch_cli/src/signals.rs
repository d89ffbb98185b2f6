//! Termination signals during the preparation passes.

use tokio::signal::unix::{signal, Signal, SignalKind};

/// What stopped the wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interruption {
    /// SIGTERM, e.g. `docker stop`.
    Terminate,
    /// SIGINT, Ctrl-C on an interactive terminal.
    Interrupt,
}

/// SIGTERM and SIGINT handlers.
///
/// Installed as soon as [`Signals::install`] returns, so a signal delivered
/// before [`Signals::recv`] is first polled is still observed.
pub struct Signals {
    terminate: Signal,
    interrupt: Signal,
}

impl Signals {
    /// Must be called from within the tokio runtime.
    pub fn install() -> std::io::Result<Self> {
        Ok(Self {
            terminate: signal(SignalKind::terminate())?,
            interrupt: signal(SignalKind::interrupt())?,
        })
    }

    /// Resolve on the first SIGTERM or SIGINT.
    pub async fn recv(&mut self) -> Interruption {
        tokio::select! {
            _ = self.terminate.recv() => Interruption::Terminate,
            _ = self.interrupt.recv() => Interruption::Interrupt,
        }
    }
}
