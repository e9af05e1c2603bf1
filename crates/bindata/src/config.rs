// Copyright (c) Contributors to the bindata project.
// SPDX-License-Identifier: Apache-2.0

//! Generation settings and their validation.

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::input::{InputConfig, clean_path};
use crate::{DEF_ASSET_PREFIX, DEF_OUTPUT_NAME, DEF_PACKAGE_NAME, Error, Result};

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;

/// Everything a single generation needs to know.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory relative inputs and output are resolved against.
    ///
    /// Filled with the process working directory by [`Config::validate`]
    /// when left unset.
    pub cwd: Option<PathBuf>,

    /// Package name of the generated source.
    pub package: String,

    /// Optional build tags, emitted as a `// +build` line.
    pub tags: String,

    /// Ordered inputs; earlier inputs win on duplicate asset names.
    pub input: Vec<InputConfig>,

    /// Output file, or output directory in split mode.
    ///
    /// Empty selects `bindata.go` (or the working directory when splitting).
    pub output: PathBuf,

    /// String prepended to every generated asset function.
    pub asset_prefix: String,

    /// Pattern whose matches are removed from asset names.
    pub prefix: Option<Regex>,

    /// Paths matching any of these are skipped.
    pub ignore: Vec<Regex>,

    /// When not empty, only paths matching one of these are kept.
    pub include: Vec<Regex>,

    /// File mode override, `0` keeps the mode found on disk.
    pub mode: u32,

    /// Modification time override in unix seconds, `0` keeps the disk value.
    pub mod_time: i64,

    /// Zero size, mode and modification time in the generated metadata.
    pub no_metadata: bool,

    /// Alias the embedded string instead of copying it on access.
    pub no_mem_copy: bool,

    /// Store assets uncompressed.
    pub no_compress: bool,

    /// Read assets from their absolute paths at runtime.
    pub debug: bool,

    /// Read assets relative to a `rootDir` variable at runtime.
    pub dev: bool,

    /// Write one file per asset plus a common file.
    pub split: bool,

    /// Embed the MD5 checksum of each asset.
    pub md5_checksum: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cwd: None,
            package: DEF_PACKAGE_NAME.to_string(),
            tags: String::new(),
            input: Vec::new(),
            output: PathBuf::new(),
            asset_prefix: DEF_ASSET_PREFIX.to_string(),
            prefix: None,
            ignore: Vec::new(),
            include: Vec::new(),
            mode: 0,
            mod_time: 0,
            no_metadata: false,
            no_mem_copy: false,
            no_compress: false,
            debug: false,
            dev: false,
            split: false,
            md5_checksum: false,
        }
    }
}

impl Config {
    /// Check the configuration and normalize inputs and output.
    ///
    /// Determines the working directory, cleans and de-duplicates inputs,
    /// makes sure every input exists and prepares the output location.
    pub fn validate(&mut self) -> Result<()> {
        if self.cwd.is_none() {
            let cwd = std::env::current_dir().map_err(Error::CwdUnavailable)?;
            self.cwd = Some(cwd);
        }

        if self.package.is_empty() {
            return Err(Error::NoPackageName);
        }

        self.validate_input()?;
        self.validate_output()
    }

    /// Working directory of this generation.
    pub fn working_dir(&self) -> &Path {
        self.cwd.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// Resolve `path` against the working directory.
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir().join(path)
        }
    }

    /// Clean every input path, drop repeated ones and check they exist.
    pub fn validate_input(&mut self) -> Result<()> {
        let mut inputs: Vec<InputConfig> = Vec::with_capacity(self.input.len());

        for input in &self.input {
            let path = clean_path(&input.path);
            if inputs.iter().any(|seen| seen.path == path) {
                continue;
            }

            std::fs::symlink_metadata(self.resolve(&path)).map_err(|error| {
                Error::InputStatFailed {
                    path: path.clone(),
                    error,
                }
            })?;
            inputs.push(InputConfig::new(path, input.recursive));
        }

        if inputs.is_empty() {
            return Err(Error::NoInput);
        }
        self.input = inputs;
        Ok(())
    }

    /// Default the output location and create what it needs on disk.
    ///
    /// Outside of split mode the output file is created up front so that
    /// permission problems show before any scanning happens.
    pub fn validate_output(&mut self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            self.output = if self.split {
                self.working_dir().to_path_buf()
            } else {
                self.working_dir().join(DEF_OUTPUT_NAME)
            };
            return Ok(());
        }

        let names_dir = self
            .output
            .to_str()
            .is_some_and(|s| s.ends_with('/') || s.ends_with(std::path::MAIN_SEPARATOR));
        let output = self.resolve(&self.output);

        let dir = if names_dir || self.split {
            Some(output.clone())
        } else {
            output.parent().map(Path::to_path_buf)
        };
        if let Some(dir) = dir.filter(|d| !d.as_os_str().is_empty()) {
            create_dir_all(&dir)?;
        }

        if self.split {
            self.output = output;
            return Ok(());
        }

        self.output = if names_dir {
            output.join(DEF_OUTPUT_NAME)
        } else {
            output
        };
        std::fs::File::create(&self.output).map_err(|error| Error::OutputCreate {
            path: self.output.clone(),
            error,
        })?;
        Ok(())
    }

    /// Whether `path` is filtered out by the ignore and include patterns.
    pub fn is_ignored(&self, path: &str) -> bool {
        if self.ignore.iter().any(|re| re.is_match(path)) {
            return true;
        }
        !self.include.is_empty() && !self.include.iter().any(|re| re.is_match(path))
    }
}

#[cfg(unix)]
fn create_dir_all(dir: &Path) -> Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o700)
        .create(dir)
        .map_err(|error| Error::OutputCreate {
            path: dir.to_path_buf(),
            error,
        })
}

#[cfg(not(unix))]
fn create_dir_all(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|error| Error::OutputCreate {
        path: dir.to_path_buf(),
        error,
    })
}

/// Compile a user supplied pattern.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|error| Error::InvalidPattern {
        pattern: pattern.to_string(),
        error,
    })
}

/// One input as written in a config file: either `dir/...` or a mapping.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum InputEntry {
    Arg(String),
    Explicit(InputConfig),
}

impl From<InputEntry> for InputConfig {
    fn from(entry: InputEntry) -> Self {
        match entry {
            InputEntry::Arg(arg) => InputConfig::parse(&arg),
            InputEntry::Explicit(input) => input,
        }
    }
}

/// Generation settings as stored in a YAML file.
///
/// Every field is optional; unset fields keep the [`Config`] defaults.
///
/// ```yaml
/// package: assets
/// output: assets/bindata.go
/// input:
///   - static/...
///   - path: templates
///     recursive: false
/// ignore:
///   - \.DS_Store$
/// no_compress: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub input: Vec<InputEntry>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mod_time: Option<i64>,

    pub no_metadata: bool,
    pub no_memcopy: bool,
    pub no_compress: bool,
    pub debug: bool,
    pub dev: bool,
    pub split: bool,
    pub md5_checksum: bool,
}

impl ConfigFile {
    /// Parse a config file from YAML.
    pub fn from_yaml<S: Into<String>>(yaml: S) -> Result<Self> {
        let yaml = yaml.into();
        serde_yaml::from_str(&yaml).map_err(|error| Error::InvalidYaml {
            error,
            yaml_content: yaml.clone(),
        })
    }

    /// Load a config file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|error| Error::ReadFailed {
            path: path.to_path_buf(),
            error,
        })?;
        Self::from_yaml(yaml)
    }

    /// Build a [`Config`], compiling every pattern.
    pub fn into_config(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(package) = self.package {
            config.package = package;
        }
        if let Some(tags) = self.tags {
            config.tags = tags;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(asset_prefix) = self.asset_prefix {
            config.asset_prefix = asset_prefix;
        }
        config.input = self.input.into_iter().map(InputConfig::from).collect();
        config.prefix = self.prefix.as_deref().map(compile_pattern).transpose()?;
        config.ignore = self
            .ignore
            .iter()
            .map(|p| compile_pattern(p))
            .collect::<Result<_>>()?;
        config.include = self
            .include
            .iter()
            .map(|p| compile_pattern(p))
            .collect::<Result<_>>()?;

        config.mode = self.mode.unwrap_or_default();
        config.mod_time = self.mod_time.unwrap_or_default();
        config.no_metadata = self.no_metadata;
        config.no_mem_copy = self.no_memcopy;
        config.no_compress = self.no_compress;
        config.debug = self.debug;
        config.dev = self.dev;
        config.split = self.split;
        config.md5_checksum = self.md5_checksum;
        Ok(config)
    }
}
