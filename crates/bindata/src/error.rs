// Copyright (c) Contributors to the bindata project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for bindata operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with bindata Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scanning inputs or emitting code.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// No input paths were given
    #[error("no input")]
    #[diagnostic(
        code(bindata::no_input),
        help("Pass at least one input directory or file, e.g. 'static/...'")
    )]
    NoInput,

    /// The package name is empty
    #[error("missing package name")]
    #[diagnostic(code(bindata::no_package_name), help("Set the package name with -pkg"))]
    NoPackageName,

    /// The working directory could not be determined
    #[error("unable to determine current working directory")]
    #[diagnostic(code(bindata::cwd_unavailable))]
    CwdUnavailable(#[source] std::io::Error),

    /// An input path does not exist or cannot be inspected
    #[error("failed to stat input path '{}'", path.display())]
    #[diagnostic(
        code(bindata::input_stat_failed),
        help("Check that the input path exists relative to the working directory")
    )]
    InputStatFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// A path could not be inspected or listed while scanning
    #[error("failed to scan '{}'", path.display())]
    #[diagnostic(code(bindata::scan_failed))]
    ScanFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// The logical name computed for a file is empty
    #[error("invalid file: {}", .0.display())]
    #[diagnostic(
        code(bindata::invalid_asset),
        help("The -prefix pattern must not remove the whole asset path")
    )]
    InvalidAsset(PathBuf),

    /// An asset name normalized to an empty identifier
    #[error("asset name '{0}' does not produce a valid identifier")]
    #[diagnostic(code(bindata::invalid_identifier))]
    InvalidIdentifier(String),

    /// The output directory or file cannot be created
    #[error("create output '{}'", path.display())]
    #[diagnostic(code(bindata::output_create))]
    OutputCreate {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Failed to read an asset or a config file
    #[error("failed to read '{}'", path.display())]
    #[diagnostic(code(bindata::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Failed to write generated code
    #[error("failed to write output")]
    #[diagnostic(code(bindata::write_failed))]
    WriteFailed(#[source] std::io::Error),

    /// A prefix, ignore or include pattern is not a valid regex
    #[error("invalid pattern '{pattern}'")]
    #[diagnostic(code(bindata::invalid_pattern))]
    InvalidPattern {
        pattern: String,
        #[source]
        error: regex::Error,
    },

    /// Invalid YAML in a config file
    #[error("invalid config file")]
    #[diagnostic(
        code(bindata::invalid_yaml),
        help("Check the YAML syntax and the field names of the config file")
    )]
    InvalidYaml {
        #[source]
        error: serde_yaml::Error,
        yaml_content: String,
    },
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::WriteFailed(error)
    }
}
