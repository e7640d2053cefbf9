pub mod import;
pub mod photos;
pub mod remove;
pub mod show;
pub mod weeks;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while the recognizer subprocess runs.
pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
