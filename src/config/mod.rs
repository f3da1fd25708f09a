use crate::errors::{AppError, AppResult};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize, Serializer};
use std::env;
use std::fs;
use std::path::Path;

pub const ENV_ACCESS_TOKEN: &str = "ACCESS_TOKEN";
pub const ENV_DOMAIN: &str = "CANVAS_DOMAIN";
pub const ENV_COURSE_IDS: &str = "COURSE_IDS";

pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";

/// Connection settings for the Canvas API, read from the environment.
#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(serialize_with = "redact")]
    pub access_token: String,
    pub course_ids: Vec<String>,
}

fn redact<S: Serializer>(_token: &str, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str("********")
}

impl ApiConfig {
    /// Build from the process environment. Every variable is required.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` but reads through `lookup`, so callers can supply
    /// values from somewhere other than the real environment.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::MissingEnv(key.to_string()))
        };

        let access_token = required(ENV_ACCESS_TOKEN)?;
        let domain = required(ENV_DOMAIN)?;
        let course_ids = parse_course_ids(&required(ENV_COURSE_IDS)?);

        if course_ids.is_empty() {
            return Err(AppError::Config(format!(
                "{ENV_COURSE_IDS} does not contain any course id"
            )));
        }

        Ok(Self {
            base_url: base_url_for(&domain),
            access_token,
            course_ids,
        })
    }
}

/// `canvas.example.edu` becomes `https://canvas.example.edu`; a value that
/// already carries a scheme is kept (minus any trailing slash).
pub fn base_url_for(domain: &str) -> String {
    let domain = domain.trim().trim_end_matches('/');
    if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("https://{domain}")
    }
}

pub fn parse_course_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Knobs that shape the report. Loaded from an optional YAML file and then
/// overridden from the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_min_age_hours")]
    pub min_age_hours: u32,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Follow `rel="next"` links when listing submissions. Off by default:
    /// only the first page of submissions is read per assignment.
    #[serde(default)]
    pub paginate_submissions: bool,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}
fn default_min_age_hours() -> u32 {
    24
}
fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            min_age_hours: default_min_age_hours(),
            output_dir: default_output_dir(),
            paginate_submissions: false,
        }
    }
}

impl ReportSettings {
    /// Load settings from a YAML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: ReportSettings = serde_yaml::from_str(&content)?;
        settings.reference_zone()?;
        Ok(settings)
    }

    pub fn reference_zone(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| AppError::InvalidTimezone(self.timezone.clone()))
    }

    pub fn min_age(&self) -> chrono::Duration {
        chrono::Duration::hours(i64::from(self.min_age_hours))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    pub report: ReportSettings,
}

impl Config {
    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
