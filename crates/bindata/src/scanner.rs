// Copyright (c) Contributors to the bindata project.
// SPDX-License-Identifier: Apache-2.0

//! Filesystem walker turning inputs into assets.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::asset::{Asset, AssetRegistry};
use crate::input::{InputConfig, clean_path, to_slash};
use crate::{Config, Error, Result, normalize};

#[cfg(test)]
#[path = "./scanner_test.rs"]
mod scanner_test;

/// Walks inputs in order and collects their files into an [`AssetRegistry`].
///
/// Symbolic links are followed. A link to a file is embedded under the
/// link's own name, while its function name is derived from the target so
/// that aliases of one file share the generated code. Directories are
/// remembered by their canonical path, which breaks link cycles.
pub struct FsScanner<'a> {
    config: &'a Config,
    /// Canonical working directory, used to keep link targets relative.
    real_cwd: PathBuf,
    registry: AssetRegistry,
    visited_dirs: HashSet<PathBuf>,
    depth: usize,
}

impl<'a> FsScanner<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        let cwd = config.working_dir();
        let real_cwd = dunce::canonicalize(cwd).map_err(|error| Error::ScanFailed {
            path: cwd.to_path_buf(),
            error,
        })?;
        Ok(Self {
            config,
            real_cwd,
            registry: AssetRegistry::new(),
            visited_dirs: HashSet::new(),
            depth: 0,
        })
    }

    /// Forget the directories visited by the previous input.
    ///
    /// Assets and function names found so far are kept.
    pub fn reset(&mut self) {
        self.visited_dirs.clear();
        self.depth = 0;
    }

    /// Scan every configured input, in order.
    pub fn scan_all(mut self) -> Result<AssetRegistry> {
        for input in &self.config.input {
            self.scan_input(input)?;
        }
        Ok(self.registry)
    }

    /// Scan one input on top of what earlier inputs produced.
    pub fn scan_input(&mut self, input: &InputConfig) -> Result<()> {
        self.reset();
        self.scan(&input.path, None, input.recursive)
    }

    /// Assets collected so far.
    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    pub fn into_registry(self) -> AssetRegistry {
        self.registry
    }

    /// Whether `path` is filtered out by the ignore and include patterns.
    pub fn is_ignored(&self, path: &Path) -> bool {
        self.config.is_ignored(&to_slash(path))
    }

    /// Scan `path`, which is reachable through `real_path` when it lives
    /// below a followed directory link.
    pub fn scan(&mut self, path: &Path, real_path: Option<&Path>, recursive: bool) -> Result<()> {
        let path = clean_path(path);

        if self.is_ignored(&path) {
            tracing::info!("- {}", path.display());
            return Ok(());
        }

        let meta = std::fs::symlink_metadata(self.config.resolve(&path))
            .map_err(|error| scan_failed(&path, error))?;

        if meta.file_type().is_symlink() {
            return self.scan_symlink(&path, recursive);
        }
        if meta.is_file() {
            return self.add_asset(&path, real_path);
        }
        if !meta.is_dir() {
            tracing::debug!("skipping special file {}", path.display());
            return Ok(());
        }

        let real_dir = self.canonicalize(&path)?;
        self.scan_dir(&path, real_dir, real_path, recursive)
    }

    fn scan_symlink(&mut self, path: &Path, recursive: bool) -> Result<()> {
        let real_dir = self.canonicalize(path)?;
        let real_path = self.relative_to_cwd(&real_dir);

        let meta = std::fs::metadata(&real_dir).map_err(|error| scan_failed(path, error))?;
        if meta.is_file() {
            return self.add_asset(path, Some(&real_path));
        }
        if !meta.is_dir() {
            tracing::debug!("skipping special file {}", path.display());
            return Ok(());
        }

        self.scan_dir(path, real_dir, Some(&real_path), recursive)
    }

    fn scan_dir(
        &mut self,
        path: &Path,
        real_dir: PathBuf,
        real_path: Option<&Path>,
        recursive: bool,
    ) -> Result<()> {
        if !recursive {
            if self.depth > 0 {
                return Ok(());
            }
            self.depth += 1;
        }

        if !self.visited_dirs.insert(real_dir) {
            return Ok(());
        }

        for name in self.list_dir(path)? {
            let child = path.join(&name);
            let child_real = real_path.map(|real| real.join(&name));
            self.scan(&child, child_real.as_deref(), recursive)?;
        }
        Ok(())
    }

    /// Entry names of a directory in ascending order.
    fn list_dir(&self, path: &Path) -> Result<Vec<std::ffi::OsString>> {
        let entries =
            std::fs::read_dir(self.config.resolve(path)).map_err(|error| scan_failed(path, error))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|error| scan_failed(path, error))?;
            names.push(entry.file_name());
        }
        names.sort();
        Ok(names)
    }

    fn add_asset(&mut self, path: &Path, real_path: Option<&Path>) -> Result<()> {
        let name = self.asset_name(path)?;
        if self.registry.contains(&name) {
            tracing::info!("= {}", path.display());
            return Ok(());
        }

        let source = real_path.map(to_slash).unwrap_or_else(|| name.clone());
        let candidate = normalize(&self.config.asset_prefix, &source)?;
        let identity = self.canonicalize(path)?;
        let func_name = self.registry.resolve_func(&candidate, &identity);

        tracing::info!("+ {}", path.display());
        self.registry.add(Asset {
            path: path.to_path_buf(),
            name,
            func_name,
        });
        Ok(())
    }

    /// Logical name of `path`: prefix matches removed, `/` separated and
    /// without a leading `/`.
    fn asset_name(&self, path: &Path) -> Result<String> {
        let slashed = to_slash(path);
        let stripped = match &self.config.prefix {
            Some(prefix) => prefix.replace_all(&slashed, "").into_owned(),
            None => slashed,
        };

        let name = stripped.trim_start_matches('/');
        if name.is_empty() {
            return Err(Error::InvalidAsset(path.to_path_buf()));
        }
        Ok(name.to_string())
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        dunce::canonicalize(self.config.resolve(path)).map_err(|error| scan_failed(path, error))
    }

    fn relative_to_cwd(&self, real: &Path) -> PathBuf {
        match real.strip_prefix(&self.real_cwd) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
            _ => real.to_path_buf(),
        }
    }
}

fn scan_failed(path: &Path, error: std::io::Error) -> Error {
    Error::ScanFailed {
        path: path.to_path_buf(),
        error,
    }
}
