use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner for the load/search phases of a command.
pub(crate) fn spinner(message: impl Into<String>) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(message.into());
    Ok(pb)
}

/// Row-counting bar for the preparation passes.
pub(crate) fn row_bar(len: u64, message: impl Into<String>) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len);
    pb.set_style(ProgressStyle::default_bar().template("{msg} {bar:30.green} {pos}/{len}")?);
    pb.set_message(message.into());
    Ok(pb)
}
