//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services, so
//! that no environment variables are read while a session is being processed.

use crate::constants::{DEFAULT_STATE_FILENAME, TEMPLATE_DIR_NAME};
use crate::{OosError, OosResult};
use std::path::{Path, PathBuf};

/// How the day before and the day after a test date are chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateBracketRule {
    /// Exactly one calendar day either side.
    #[default]
    Calendar,
    /// One day either side, except a Monday brackets back to the previous Friday and a
    /// Friday brackets forward to the following Monday.
    BusinessDays,
}

impl std::str::FromStr for DateBracketRule {
    type Err = OosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calendar" => Ok(Self::Calendar),
            "business-days" | "business_days" | "business" => Ok(Self::BusinessDays),
            other => Err(OosError::InvalidInput(format!(
                "unknown date bracket rule '{other}' (expected calendar or business-days)"
            ))),
        }
    }
}

/// How counts of more than one prior failure are written in the sample-history paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CountStyle {
    /// `three incidents`
    #[default]
    Words,
    /// `3 incidents`
    Digits,
}

impl std::str::FromStr for CountStyle {
    type Err = OosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "words" => Ok(Self::Words),
            "digits" => Ok(Self::Digits),
            other => Err(OosError::InvalidInput(format!(
                "unknown count style '{other}' (expected words or digits)"
            ))),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    state_file: PathBuf,
    template_dir: PathBuf,
    output_dir: PathBuf,
    date_bracket_rule: DateBracketRule,
    history_count_style: CountStyle,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(
        state_file: PathBuf,
        template_dir: PathBuf,
        output_dir: PathBuf,
        date_bracket_rule: DateBracketRule,
        history_count_style: CountStyle,
    ) -> OosResult<Self> {
        if state_file.as_os_str().is_empty() {
            return Err(OosError::InvalidInput("state file path cannot be empty".into()));
        }

        Ok(Self {
            state_file,
            template_dir,
            output_dir,
            date_bracket_rule,
            history_count_style,
        })
    }

    /// Configuration rooted at `dir`: state file, templates and output all live there.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            state_file: dir.join(DEFAULT_STATE_FILENAME),
            template_dir: dir.to_path_buf(),
            output_dir: dir.to_path_buf(),
            date_bracket_rule: DateBracketRule::default(),
            history_count_style: CountStyle::default(),
        }
    }

    pub fn with_date_bracket_rule(mut self, rule: DateBracketRule) -> Self {
        self.date_bracket_rule = rule;
        self
    }

    pub fn with_history_count_style(mut self, style: CountStyle) -> Self {
        self.history_count_style = style;
        self
    }

    pub fn state_file(&self) -> &Path {
        &self.state_file
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn date_bracket_rule(&self) -> DateBracketRule {
        self.date_bracket_rule
    }

    pub fn history_count_style(&self) -> CountStyle {
        self.history_count_style
    }
}

/// Resolve the template directory without reading environment variables.
///
/// If `override_dir` is provided it must be an existing directory. Otherwise `templates/` in
/// the current working directory is used when present, falling back to the working directory
/// itself.
pub fn resolve_template_dir(override_dir: Option<PathBuf>) -> OosResult<PathBuf> {
    if let Some(template_dir) = override_dir {
        if template_dir.is_dir() {
            return Ok(template_dir);
        }
        return Err(OosError::InvalidInput(format!(
            "OOS_TEMPLATE_DIR override is not a directory: {}",
            template_dir.display()
        )));
    }

    let cwd_relative = PathBuf::from(TEMPLATE_DIR_NAME);
    if cwd_relative.is_dir() {
        return Ok(cwd_relative);
    }

    Ok(PathBuf::from("."))
}

/// Resolve the state file path, defaulting to [`DEFAULT_STATE_FILENAME`] in the working
/// directory.
pub fn resolve_state_file(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_FILENAME))
}

/// Resolve the output directory, defaulting to the working directory.
///
/// The directory does not need to exist yet; it is created when a report is written.
pub fn resolve_output_dir(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Parse the date bracket rule from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DateBracketRule::Calendar`].
pub fn date_bracket_rule_from_env_value(value: Option<String>) -> OosResult<DateBracketRule> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<DateBracketRule>()).transpose()?;

    Ok(parsed.unwrap_or_default())
}

/// Parse the history count style from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`CountStyle::Words`].
pub fn history_count_style_from_env_value(value: Option<String>) -> OosResult<CountStyle> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<CountStyle>()).transpose()?;

    Ok(parsed.unwrap_or_default())
}
