use std::io::Write;

use fittrack_algos::{InfoMessage, MessageLocale, Training};
use fittrack_types::trainings::TrainingPackage;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub locale: MessageLocale,
    pub format: OutputFormat,
    /// Log and skip packets that fail instead of aborting the run.
    pub keep_going: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub printed: usize,
    pub failed: usize,
}

pub fn render(info: &InfoMessage, options: &ReportOptions) -> anyhow::Result<String> {
    match options.format {
        OutputFormat::Text => Ok(info.get_message(options.locale)),
        OutputFormat::Json => Ok(serde_json::to_string(info)?),
    }
}

/// Writes one summary line per packet, in input order.
pub fn run_report<W: Write>(
    packages: &[TrainingPackage],
    options: &ReportOptions,
    out: &mut W,
) -> anyhow::Result<ReportSummary> {
    let mut summary = ReportSummary::default();

    for (index, package) in packages.iter().enumerate() {
        debug!(
            "Packet #{}: {} {:?}",
            index, package.workout_type, package.data
        );

        let training = match Training::try_from(package) {
            Ok(training) => training,
            Err(e) if options.keep_going => {
                error!("Skipping packet #{}: {}", index, e);
                summary.failed += 1;
                continue;
            }
            Err(e) => return Err(anyhow::Error::new(e).context(format!("Packet #{}", index))),
        };

        let line = render(&training.show_training_info(), options)?;
        writeln!(out, "{}", line)?;
        summary.printed += 1;
    }

    info!(
        "Processed {} packets: {} printed, {} failed",
        packages.len(),
        summary.printed,
        summary.failed
    );

    Ok(summary)
}
