//! Forwards console lines to the application as commands.

use crate::AppCommand;

use std::io::BufRead;

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, error, warn};

/// Spawn the blocking stdin reader.
///
/// Stdin has no async-friendly blocking `recv()`, so a single persistent
/// blocking task reads lines and forwards parsed commands. End of input is
/// turned into [`AppCommand::Shutdown`].
///
/// Shutdown: when the command receiver is dropped, the next
/// `blocking_send()` fails and the loop breaks.
pub(crate) fn spawn_console_reader(command_tx: mpsc::Sender<AppCommand>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();

        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    error!(error = ?e, "Failed to read console input");
                    break;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<AppCommand>() {
                Ok(cmd) => {
                    if command_tx.blocking_send(cmd).is_err() {
                        return;
                    }
                }
                Err(reason) => warn!(%reason, "Ignoring console input"),
            }
        }

        debug!("Console input closed");
        let _ = command_tx.blocking_send(AppCommand::Shutdown);
    })
}
