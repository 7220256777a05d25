//! Progress indicators for the scan phase

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::config::{SCANNING_MESSAGE, SPINNER_TEMPLATE, SPINNER_TICK_MILLIS};

/// Creates a spinner style configuration
/// Returns a ProgressStyle configured with the application's visual styling
pub(crate) fn create_spinner_style() -> Result<ProgressStyle> {
    Ok(ProgressStyle::default_spinner().template(SPINNER_TEMPLATE)?)
}

/// Creates the spinner shown while the tree is walked
///
/// indicatif draws to stderr and hides itself when stderr is not a terminal, so
/// redirected runs only contain log lines.
pub fn create_scan_spinner() -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(create_spinner_style()?);
    spinner.set_message(SCANNING_MESSAGE);
    spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MILLIS));
    Ok(spinner)
}
