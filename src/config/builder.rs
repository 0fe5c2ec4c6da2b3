use super::{
    default_exclude_masks,
    parsing::{dedup_masks, normalize_extension, parse_exclude_list},
    Config,
};
use crate::cli::Cli;
use crate::constants;
use crate::errors::{Error, Result};
use std::path::PathBuf;

/// Fluent builder for [`Config`].
///
/// Unset values fall back to the defaults in [`crate::constants`]. The
/// exclusion masks only fall back when they were never set: an explicitly
/// empty list disables exclusion entirely.
///
/// # Examples
///
/// ```
/// use srccombine::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .input_folder("src")
///     .output_file("all.txt")
///     .extension("rs")
///     .exclude_masks(vec!["target".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(config.file_extension, ".rs");
/// assert_eq!(config.exclude_masks, vec!["target"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    input_folder: Option<String>,
    output_file: Option<String>,
    extension: Option<String>,
    exclude_masks: Option<Vec<String>>,
    sort_by_path: Option<bool>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from parsed command-line arguments.
    ///
    /// `--input` wins over the positional folder argument.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            input_folder: cli.input.or(cli.folder),
            output_file: cli.output,
            extension: cli.extension,
            exclude_masks: cli.exclude.as_deref().map(parse_exclude_list),
            sort_by_path: Some(cli.sort),
        }
    }

    pub fn input_folder(mut self, path: impl Into<String>) -> Self {
        self.input_folder = Some(path.into());
        self
    }

    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Extension to collect, with or without the leading `.`.
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn exclude_masks(mut self, masks: Vec<String>) -> Self {
        self.exclude_masks = Some(masks);
        self
    }

    pub fn sort_by_path(mut self, sort: bool) -> Self {
        self.sort_by_path = Some(sort);
        self
    }

    /// Validates the collected settings and produces the immutable [`Config`].
    ///
    /// # Errors
    /// Returns [`Error::Config`] when the extension is empty or a path argument is blank.
    pub fn build(self) -> Result<Config> {
        let input_folder = non_blank(self.input_folder, "input folder")?
            .unwrap_or_else(|| constants::DEFAULT_INPUT_FOLDER.to_string());
        let output_file = non_blank(self.output_file, "output file")?
            .unwrap_or_else(|| constants::DEFAULT_OUTPUT_FILE.to_string());
        let file_extension = normalize_extension(
            self.extension
                .as_deref()
                .unwrap_or(constants::DEFAULT_EXTENSION),
        )?;
        let exclude_masks = match self.exclude_masks {
            Some(masks) => dedup_masks(masks),
            None => default_exclude_masks(),
        };

        let config = Config {
            input_folder: PathBuf::from(input_folder),
            output_file: PathBuf::from(output_file),
            file_extension,
            exclude_masks,
            sort_by_path: self.sort_by_path.unwrap_or(false),
        };
        log::debug!("Built configuration: {:?}", config);
        Ok(config)
    }
}

fn non_blank(value: Option<String>, what: &str) -> Result<Option<String>> {
    match value {
        Some(v) if v.trim().is_empty() => {
            Err(Error::Config(format!("The {} must not be empty", what)))
        }
        other => Ok(other),
    }
}

impl TryFrom<Cli> for Config {
    type Error = Error;

    fn try_from(cli: Cli) -> Result<Self> {
        ConfigBuilder::from_cli(cli).build()
    }
}
