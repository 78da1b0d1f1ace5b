mod summary;
mod utils;

pub mod input;
pub mod time;
pub mod verifier;

use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use log::{info, warn};
use thiserror::Error;

use crate::input::allocation::ProjectQueues;
use crate::input::scheduler::{TimeSheet, WorkSchedule};
use crate::input::Config;
use crate::utils::Resources;
use crate::verifier::{Verifier, VerifyDistribution, VerifyNoOverlap};

pub use crate::summary::AllocationSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("unknown output format `{0}`, expected `text` or `json`")]
pub struct InvalidOutputFormat(String);

impl FromStr for OutputFormat {
    type Err = InvalidOutputFormat;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(InvalidOutputFormat(string.to_string())),
        }
    }
}

/// Distributes the hours of every project and lays them out day by day.
pub fn generate_time_sheet(config: &Config) -> anyhow::Result<TimeSheet> {
    if let Err(errors) = VerifyDistribution.verify(config) {
        for error in errors {
            warn!("{}", error);
        }
    }

    let mut queues = ProjectQueues::new(config.allocations()?);

    info!("generating time sheet for {} week(s)", config.weeks());
    let time_sheet = WorkSchedule::from_config(config).schedule(&mut queues)?;

    if let Err(errors) = VerifyNoOverlap.verify(&time_sheet) {
        let message = errors
            .into_iter()
            .map(|error| error.to_string())
            .collect::<Vec<_>>()
            .join("\n");

        return Err(anyhow::anyhow!("generated an invalid time sheet:\n{}", message));
    }

    Ok(time_sheet)
}

pub fn render_time_sheet(time_sheet: &TimeSheet, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(time_sheet.to_string()),
        OutputFormat::Json => Ok(time_sheet.to_json()?),
    }
}

/// Writes the rendered time sheet to `output`, creating missing directories.
pub fn write_time_sheet(
    time_sheet: &TimeSheet,
    format: OutputFormat,
    output: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let output = output.as_ref();
    let contents = render_time_sheet(time_sheet, format)?;

    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        utils::create_dir_all(parent)?;
    }

    utils::write(output, contents)
        .with_context(|| format!("failed to write time sheet to `{}`", output.display()))?;

    info!("wrote time sheet to `{}`", output.display());

    Ok(())
}

/// Writes the bundled example configuration to `output`.
///
/// An existing file is only replaced if `force` is set.
pub fn write_sample_config(output: impl AsRef<Path>, force: bool) -> anyhow::Result<()> {
    let output = output.as_ref();

    if output.exists() && !force {
        return Err(anyhow::anyhow!(
            "`{}` already exists, use --force to overwrite it",
            output.display()
        ));
    }

    utils::write(output, Resources::sample_config()?)
        .with_context(|| format!("failed to write sample config to `{}`", output.display()))?;

    info!("wrote sample config to `{}`", output.display());

    Ok(())
}
