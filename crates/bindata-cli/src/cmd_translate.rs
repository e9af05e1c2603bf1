// Copyright (c) Contributors to the bindata project.
// SPDX-License-Identifier: Apache-2.0

//! Generate Go source from the given inputs.

use std::path::{Path, PathBuf};

use bindata::config::compile_pattern;
use bindata::input::{clean_path, to_slash};
use bindata::{Config, ConfigFile, InputConfig};
use clap::Args;
use miette::Result;

#[cfg(test)]
#[path = "./cmd_translate_test.rs"]
mod cmd_translate_test;

/// Generate Go source embedding the given inputs
#[derive(Debug, Default, Args)]
pub struct CmdTranslate {
    /// Load settings from a YAML file, command line flags take precedence
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Package name to use in the generated code
    #[clap(long, value_name = "NAME")]
    pkg: Option<String>,

    /// Optional name of the output file (the output directory with -split)
    #[clap(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Optional set of build tags to include
    #[clap(long)]
    tags: Option<String>,

    /// Optional path prefix pattern to strip off asset names
    #[clap(long, value_name = "REGEX")]
    prefix: Option<String>,

    /// Regex pattern of paths to ignore, may be repeated
    #[clap(long, value_name = "REGEX")]
    ignore: Vec<String>,

    /// Regex pattern of paths to include, may be repeated
    #[clap(long, value_name = "REGEX")]
    include: Vec<String>,

    /// Prefix of every generated asset function
    #[clap(long = "asset-prefix", value_name = "PREFIX")]
    asset_prefix: Option<String>,

    /// Do not embed the files but read them from disk using absolute paths
    #[clap(long)]
    debug: bool,

    /// Like -debug but paths are relative to a rootDir variable
    #[clap(long)]
    dev: bool,

    /// Store assets uncompressed
    #[clap(long)]
    nocompress: bool,

    /// Use a .rodata hack to get rid of unnecessary memcopies
    #[clap(long)]
    nomemcopy: bool,

    /// Ignore file metadata and generate zeroed size, mode and modtime
    #[clap(long)]
    nometadata: bool,

    /// Optional file mode override for all files
    #[clap(long, value_parser = parse_mode)]
    mode: Option<u32>,

    /// Optional modification unix timestamp override for all files
    #[clap(long, value_parser = parse_mod_time)]
    modtime: Option<i64>,

    /// Embed the MD5 checksum of each asset
    #[clap(long)]
    md5checksum: bool,

    /// Write one file per asset plus a common file into the output directory
    #[clap(long)]
    split: bool,

    /// Input files or directories, a trailing /... processes them recursively
    #[clap(value_name = "INPUT")]
    inputs: Vec<String>,
}

impl CmdTranslate {
    pub fn run(&mut self) -> Result<i32> {
        let mut config = self.config()?;
        bindata::translate(&mut config)?;
        Ok(0)
    }

    /// Build the generation settings: the config file first, then every
    /// flag given on the command line on top of it.
    pub fn config(&self) -> Result<Config> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("loading config file {}", path.display());
                ConfigFile::load(path)?
            }
            None => ConfigFile::default(),
        };
        let explicit_package = self.pkg.is_some() || file.package.is_some();
        let mut config = file.into_config()?;

        if let Some(pkg) = &self.pkg {
            config.package = pkg.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        let derived = if explicit_package {
            None
        } else {
            package_from_output(&config.output)
        };
        if let Some(package) = derived {
            config.package = package;
        }

        if let Some(tags) = &self.tags {
            config.tags = tags.clone();
        }
        if let Some(asset_prefix) = &self.asset_prefix {
            config.asset_prefix = asset_prefix.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = Some(compile_pattern(prefix)?);
        }
        for pattern in &self.ignore {
            config.ignore.push(compile_pattern(pattern)?);
        }
        for pattern in &self.include {
            config.include.push(compile_pattern(pattern)?);
        }
        if !self.inputs.is_empty() {
            config.input = self.inputs.iter().map(|arg| InputConfig::parse(arg)).collect();
        }

        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(mod_time) = self.modtime {
            config.mod_time = mod_time;
        }
        config.debug |= self.debug;
        config.dev |= self.dev;
        config.no_compress |= self.nocompress;
        config.no_mem_copy |= self.nomemcopy;
        config.no_metadata |= self.nometadata;
        config.md5_checksum |= self.md5checksum;
        config.split |= self.split;

        if config.debug && config.dev {
            tracing::warn!("both -debug and -dev given, generating dev code");
        }
        Ok(config)
    }
}

/// Package name implied by an output path: the name of the directory
/// holding it, unless that is the current or root directory.
///
/// `assets/bindata.go` gives `assets`, `bindata.go` gives nothing.
pub fn package_from_output(output: &Path) -> Option<String> {
    let slashed = to_slash(output);
    let (dir, _) = slashed.rsplit_once('/')?;
    let dir = clean_path(format!("{dir}/"));
    dir.file_name().map(|name| name.to_string_lossy().into_owned())
}

/// Parse an integer the way Go's `strconv` does with base 0: `0x`, `0o`
/// and `0b` prefixes, a bare leading `0` for octal, `_` separators.
pub fn parse_int(text: &str) -> std::result::Result<i128, String> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let lower = unsigned.to_ascii_lowercase();
    let (radix, digits) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (8, &lower[1..])
    } else {
        (10, lower.as_str())
    };

    let digits = digits.replace('_', "");
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(format!("invalid number '{text}'"));
    }
    let value = i128::from_str_radix(&digits, radix).map_err(|err| format!("'{text}': {err}"))?;
    Ok(if negative { -value } else { value })
}

fn parse_mode(text: &str) -> std::result::Result<u32, String> {
    let value = parse_int(text)?;
    u32::try_from(value).map_err(|_| format!("mode '{text}' out of range"))
}

fn parse_mod_time(text: &str) -> std::result::Result<i64, String> {
    let value = parse_int(text)?;
    i64::try_from(value).map_err(|_| format!("modtime '{text}' out of range"))
}
