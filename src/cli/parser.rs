use crate::config::ReportSettings;
use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for canvas-grade-report.
/// Credentials and course ids come from the environment (or a `.env` file);
/// the options below only shape the report.
#[derive(Parser, Debug)]
#[command(
    name = "canvas-grade-report",
    version = env!("CARGO_PKG_VERSION"),
    about = "List Canvas submissions waiting too long for a grade and write them to a PDF",
    long_about = None
)]
pub struct Cli {
    /// YAML file with report settings (timezone, min_age_hours, output_dir, paginate_submissions)
    #[arg(global = true, long = "settings")]
    pub settings: Option<PathBuf>,

    /// Directory the timestamped report is written to
    #[arg(global = true, long = "out-dir")]
    pub out_dir: Option<String>,

    /// Exact output file, overrides --out-dir
    #[arg(global = true, long = "output", short = 'o')]
    pub output: Option<PathBuf>,

    /// Minimum age (hours) before an ungraded submission is reported
    #[arg(global = true, long = "min-age-hours")]
    pub min_age_hours: Option<u32>,

    /// IANA timezone used to evaluate and print submission times
    #[arg(global = true, long = "timezone")]
    pub timezone: Option<String>,

    /// Read every page of submissions instead of only the first
    #[arg(global = true, long = "paginate-submissions")]
    pub paginate_submissions: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch ungraded submissions and write the PDF report (default)
    Report,

    /// Inspect the effective configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration (token redacted)")]
        print_config: bool,
    },
}

impl Cli {
    /// Settings file (or defaults) with command-line overrides applied.
    pub fn report_settings(&self) -> AppResult<ReportSettings> {
        let mut settings = match &self.settings {
            Some(path) => ReportSettings::load(path)?,
            None => ReportSettings::default(),
        };

        if let Some(dir) = &self.out_dir {
            settings.output_dir = dir.clone();
        }
        if let Some(hours) = self.min_age_hours {
            settings.min_age_hours = hours;
        }
        if let Some(tz) = &self.timezone {
            settings.timezone = tz.clone();
        }
        if self.paginate_submissions {
            settings.paginate_submissions = true;
        }

        settings.reference_zone()?;
        Ok(settings)
    }
}
