use std::str::FromStr;

/// Commands sent from the console reader to the main application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Press the start/stop control.
    Toggle,
    /// The screen goes to the background.
    Pause,
    /// The screen comes back to the foreground.
    Resume,
    /// Tear the screen down and build it again, keeping the saved state.
    Recreate,
    /// Print the current recording state.
    Status,
    /// Request application shutdown.
    Shutdown,
}

impl FromStr for AppCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        match line.trim().to_ascii_lowercase().as_str() {
            "toggle" | "t" => Ok(AppCommand::Toggle),
            "pause" | "p" => Ok(AppCommand::Pause),
            "resume" | "r" => Ok(AppCommand::Resume),
            "recreate" => Ok(AppCommand::Recreate),
            "status" | "s" => Ok(AppCommand::Status),
            "quit" | "exit" | "q" => Ok(AppCommand::Shutdown),
            other => Err(format!("Unknown command: {:?}", other)),
        }
    }
}
