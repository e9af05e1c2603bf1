// Copyright (c) Contributors to the bindata project.
// SPDX-License-Identifier: Apache-2.0

//! Assets and the registry merging them across inputs.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "./asset_test.rs"]
mod asset_test;

/// A single regular file to embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Path used to read the bytes, as found by the scanner (relative to the
    /// working directory unless the input was absolute).
    pub path: PathBuf,

    /// Key under which the asset is looked up, `/` separated, no leading `/`.
    pub name: String,

    /// Identifier of the generated accessor function.
    pub func_name: String,
}

/// Assets keyed by name, plus the bookkeeping that keeps function names
/// unique.
///
/// The first asset registered under a name wins; later ones are dropped. A
/// function name already used by different content gets a `_N` suffix, `N`
/// starting at 2. Assets whose content resolves to the same real file share
/// one function.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    assets: BTreeMap<String, Asset>,
    /// Next numeric suffix to try per function name already in use.
    known_funcs: HashMap<String, usize>,
    assigned: HashMap<(String, PathBuf), String>,
}

impl AssetRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `candidate` into a function name that no other content uses.
    ///
    /// `identity` is the canonical path of the file the function will embed.
    pub fn resolve_func(&mut self, candidate: &str, identity: &Path) -> String {
        let key = (candidate.to_string(), identity.to_path_buf());
        if let Some(name) = self.assigned.get(&key) {
            return name.clone();
        }

        let func_name = match self.known_funcs.get(candidate).copied() {
            None => candidate.to_string(),
            Some(mut next) => loop {
                let suffixed = format!("{candidate}_{next}");
                next += 1;
                if !self.known_funcs.contains_key(&suffixed) {
                    self.known_funcs.insert(candidate.to_string(), next);
                    break suffixed;
                }
            },
        };

        self.known_funcs.entry(func_name.clone()).or_insert(2);
        self.assigned.insert(key, func_name.clone());
        func_name
    }

    /// Whether an asset is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.assets.contains_key(name)
    }

    /// Register an asset; returns false when the name was already taken.
    pub fn add(&mut self, asset: Asset) -> bool {
        if self.assets.contains_key(&asset.name) {
            return false;
        }
        self.assets.insert(asset.name.clone(), asset);
        true
    }

    /// Assets in ascending name order.
    pub fn list(&self) -> Vec<&Asset> {
        self.assets.values().collect()
    }

    /// Consume the registry, returning the assets in ascending name order.
    pub fn into_sorted(self) -> Vec<Asset> {
        self.assets.into_values().collect()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.assets.get(name)
    }
}
