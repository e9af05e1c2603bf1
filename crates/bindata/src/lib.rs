// Copyright (c) Contributors to the bindata project.
// SPDX-License-Identifier: Apache-2.0

//! bindata - embed arbitrary files into generated Go source
//!
//! This crate scans a set of filesystem inputs, turns every regular file it
//! finds into a byte literal inside a generated `.go` file and wires the
//! resulting assets into a lookup API (`Asset`, `AssetDir`, `AssetInfo`, ...)
//! so that the consuming program ships as one self-contained binary.
//!
//! # Overview
//!
//! Generation is a single synchronous pass:
//!
//! 1. [`Config`] validation (inputs exist, output is writable),
//! 2. scanning every [`InputConfig`] in order with the filesystem scanner,
//! 3. merging the results into an [`AssetRegistry`] sorted by asset name,
//! 4. emitting either release code (bytes inlined, optionally gzipped) or
//!    debug/dev stubs that read from disk at call time.
//!
//! # Example
//!
//! ```no_run
//! let mut config = bindata::Config::default();
//! config.package = "assets".to_string();
//! config.output = "assets/bindata.go".into();
//! config.input.push(bindata::InputConfig::parse("static/..."));
//! bindata::translate(&mut config)?;
//! # Ok::<(), bindata::Error>(())
//! ```

pub mod asset;
pub mod config;
pub mod debug;
pub mod encode;
pub mod error;
pub mod input;
pub mod name;
pub mod release;
pub mod scanner;
pub mod templates;
pub mod toc;
pub mod translate;

#[cfg(test)]
mod testutil;

pub use asset::{Asset, AssetRegistry};
pub use config::{Config, ConfigFile};
pub use error::{Error, Result};
pub use input::InputConfig;
pub use name::normalize;
pub use scanner::FsScanner;
pub use toc::AssetTree;
pub use translate::translate;

/// Default package name of the generated source.
pub const DEF_PACKAGE_NAME: &str = "main";

/// Default name of the generated file.
pub const DEF_OUTPUT_NAME: &str = "bindata.go";

/// Default string prepended to every generated asset function.
pub const DEF_ASSET_PREFIX: &str = "bindata";
