// Copyright (c) Contributors to the bindata project.
// SPDX-License-Identifier: Apache-2.0

//! Input path descriptions and lexical path helpers.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "./input_test.rs"]
mod input_test;

/// Suffix marking an input as recursive.
const RECURSIVE_SUFFIX: &str = "/...";

/// One directory or file to embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct InputConfig {
    /// Directory or file containing the assets.
    pub path: PathBuf,

    /// Whether sub directories of `path` are processed too.
    #[serde(default)]
    pub recursive: bool,
}

impl InputConfig {
    /// Create a new input for `path`.
    pub fn new<P: Into<PathBuf>>(path: P, recursive: bool) -> Self {
        Self {
            path: path.into(),
            recursive,
        }
    }

    /// Parse a command line input, where a trailing `/...` marks it recursive.
    ///
    /// ```
    /// use bindata::InputConfig;
    ///
    /// assert_eq!(InputConfig::parse("static/..."), InputConfig::new("static", true));
    /// assert_eq!(InputConfig::parse("./static"), InputConfig::new("static", false));
    /// ```
    pub fn parse(arg: &str) -> Self {
        match arg.strip_suffix(RECURSIVE_SUFFIX) {
            Some(path) => Self::new(clean_path(path), true),
            None => Self::new(clean_path(arg), false),
        }
    }
}

/// Lexically clean a path, the way the scanner keys its assets.
///
/// Removes `.` components, folds `dir/..` pairs and drops trailing
/// separators. An empty result becomes `.`.
pub fn clean_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// Render a path with `/` separators regardless of the host platform.
pub fn to_slash<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref().to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        path.into_owned()
    } else {
        path.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
