use trail_recorder_core::{ToggleLabel, ToggleView};
use tracing::info;

/// Start/stop control rendered as a line on the console.
#[derive(Debug, Default)]
pub struct ConsoleToggle {
    label: Option<ToggleLabel>,
}

impl ConsoleToggle {
    /// Create a control with no label shown yet.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ToggleView for ConsoleToggle {
    fn set_label(&mut self, label: ToggleLabel) {
        if self.label == Some(label) {
            return;
        }
        self.label = Some(label);

        info!(label = label.text(), "Toggle label updated");
        println!("[ {} ]  (type `toggle`)", label.text());
    }
}
