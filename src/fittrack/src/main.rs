#[macro_use]
extern crate log;

use std::{io, path::PathBuf};

use anyhow::bail;
use clap::{CommandFactory as _, Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use fittrack::{
    OutputFormat, ReportOptions,
    algos::{MessageLocale, TrainingPackage},
    kinds::write_kinds,
    packages::{default_packages, load_packages},
    run_report,
};

#[derive(Parser)]
#[command(name = "fittrack", version, about)]
pub struct FitTrackCli {
    /// Language of the summary lines (en, ru)
    #[arg(env = "FITTRACK_LOCALE", long, default_value_t = MessageLocale::En)]
    pub locale: MessageLocale,
    /// Output format (text, json)
    #[arg(env = "FITTRACK_FORMAT", long, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[clap(subcommand)]
    pub subcommand: Option<FitTrackCommand>,
}

#[derive(Subcommand)]
pub enum FitTrackCommand {
    ///
    /// Print a summary for every packet, bundled packets are used without a file
    ///
    Report {
        #[arg(long, env = "FITTRACK_PACKAGES")]
        packages: Option<PathBuf>,
        #[arg(long)]
        keep_going: bool,
    },
    ///
    /// Print a summary for a single packet, e.g. `show RUN 15000 1 75`
    ///
    Show {
        workout_type: String,
        #[arg(required = true, allow_negative_numbers = true)]
        data: Vec<f64>,
    },
    ///
    /// List workout codes and the readings they expect
    ///
    Kinds,
    ///
    /// Generate shell completions
    ///
    Completions { shell: Shell },
}

fn main() -> anyhow::Result<()> {
    let dotenv_result = dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = dotenv_result {
        debug!("No .env loaded: {}", error);
    }

    let cli = FitTrackCli::parse();
    let mut options = ReportOptions {
        locale: cli.locale,
        format: cli.format,
        keep_going: false,
    };

    let subcommand = cli.subcommand.unwrap_or(FitTrackCommand::Report {
        packages: None,
        keep_going: false,
    });

    match subcommand {
        FitTrackCommand::Report {
            packages,
            keep_going,
        } => {
            let packages = match packages {
                Some(path) => {
                    info!("Reading packets from {}", path.display());
                    load_packages(&path)?
                }
                None => default_packages(),
            };

            options.keep_going = keep_going;
            let summary = run_report(&packages, &options, &mut io::stdout().lock())?;
            if summary.failed > 0 {
                bail!("{} of {} packets failed", summary.failed, packages.len());
            }
            Ok(())
        }
        FitTrackCommand::Show { workout_type, data } => {
            let package = TrainingPackage::new(workout_type, data);
            run_report(&[package], &options, &mut io::stdout().lock())?;
            Ok(())
        }
        FitTrackCommand::Kinds => {
            write_kinds(&mut io::stdout().lock())?;
            Ok(())
        }
        FitTrackCommand::Completions { shell } => {
            write_completions(shell, &mut io::stdout());
            Ok(())
        }
    }
}

fn write_completions<W: io::Write>(shell: Shell, out: &mut W) {
    let mut command = FitTrackCli::command();
    clap_complete::generate(shell, &mut command, "fittrack", out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults() {
        let cli = FitTrackCli::try_parse_from(["fittrack"]).unwrap();
        assert!(cli.subcommand.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn report_with_file() {
        let cli = FitTrackCli::try_parse_from([
            "fittrack",
            "--locale",
            "ru",
            "--format",
            "json",
            "report",
            "--packages",
            "packets.json",
            "--keep-going",
        ])
        .unwrap();
        assert_eq!(cli.locale, MessageLocale::Ru);
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.subcommand {
            Some(FitTrackCommand::Report {
                packages,
                keep_going,
            }) => {
                assert_eq!(packages, Some(PathBuf::from("packets.json")));
                assert!(keep_going);
            }
            _ => panic!("expected report"),
        }
    }

    #[test]
    fn show_single_packet() {
        let cli = FitTrackCli::try_parse_from(["fittrack", "show", "RUN", "15000", "1", "75"])
            .unwrap();
        match cli.subcommand {
            Some(FitTrackCommand::Show { workout_type, data }) => {
                assert_eq!(workout_type, "RUN");
                assert_eq!(data, vec![15000.0, 1.0, 75.0]);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn show_requires_readings() {
        assert!(FitTrackCli::try_parse_from(["fittrack", "show", "RUN"]).is_err());
    }

    #[test]
    fn unknown_locale_is_rejected() {
        assert!(FitTrackCli::try_parse_from(["fittrack", "--locale", "de"]).is_err());
    }

    #[test]
    fn kinds_subcommand_parses() {
        let cli = FitTrackCli::try_parse_from(["fittrack", "kinds"]).unwrap();
        assert!(matches!(cli.subcommand, Some(FitTrackCommand::Kinds)));
    }

    #[test]
    fn bash_completions_cover_subcommands() {
        let cli = FitTrackCli::try_parse_from(["fittrack", "completions", "bash"]).unwrap();
        let Some(FitTrackCommand::Completions { shell }) = cli.subcommand else {
            panic!("expected completions");
        };

        let mut out = Vec::new();
        write_completions(shell, &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("fittrack"));
        for subcommand in ["report", "show", "kinds"] {
            assert!(script.contains(subcommand), "missing {subcommand}");
        }
    }

    #[test]
    fn cli_is_consistent() {
        FitTrackCli::command().debug_assert();
    }
}
