// Copyright (c) Contributors to the bindata project.
// SPDX-License-Identifier: Apache-2.0

//! Table of contents and directory tree of the generated lookup API.

use std::collections::BTreeMap;
use std::io::Write;

use crate::Result;
use crate::asset::Asset;
use crate::encode::go_quote;
use crate::templates::{FUNC_ASSET, FUNC_ASSET_DIR, TYPE_BINTREE};

#[cfg(test)]
#[path = "./toc_test.rs"]
mod toc_test;

/// Node of the asset name hierarchy.
///
/// Children are kept sorted so the emitted literal is stable.
#[derive(Debug, Default)]
pub struct AssetTree<'a> {
    asset: Option<&'a Asset>,
    children: BTreeMap<&'a str, AssetTree<'a>>,
}

impl<'a> AssetTree<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the tree of `assets`, splitting their names on `/`.
    pub fn from_assets(assets: &'a [Asset]) -> Self {
        let mut tree = Self::new();
        for asset in assets {
            tree.add(asset);
        }
        tree
    }

    pub fn add(&mut self, asset: &'a Asset) {
        let mut node = self;
        for segment in asset.name.split('/') {
            node = node.children.entry(segment).or_default();
        }
        node.asset = Some(asset);
    }

    /// Immediate children names, in ascending order.
    pub fn children(&self) -> impl Iterator<Item = &str> {
        self.children.keys().copied()
    }

    pub fn child(&self, name: &str) -> Option<&AssetTree<'a>> {
        self.children.get(name)
    }

    pub fn asset(&self) -> Option<&'a Asset> {
        self.asset
    }

    fn func_or_nil(&self) -> &str {
        match self.asset {
            Some(asset) if !asset.func_name.is_empty() => &asset.func_name,
            _ => "nil",
        }
    }

    /// Write the Go literal of this node, `depth` tabs deep.
    fn write_go_map<W: Write>(&self, w: &mut W, depth: usize) -> Result<()> {
        write!(w, "{{{}, map[string]*bintree{{", self.func_or_nil())?;

        if !self.children.is_empty() {
            w.write_all(b"\n")?;
            for (name, child) in &self.children {
                write_indent(w, depth + 1)?;
                write!(w, "{}: ", go_quote(name))?;
                child.write_go_map(w, depth + 1)?;
            }
            write_indent(w, depth)?;
        }

        w.write_all(b"}}")?;
        if depth > 0 {
            w.write_all(b",")?;
        }
        w.write_all(b"\n")?;
        Ok(())
    }

    /// Write the `bintree` type followed by the `_bintree` literal.
    pub fn write_as_go_map<W: Write>(&self, w: &mut W) -> Result<()> {
        w.write_all(TYPE_BINTREE.as_bytes())?;
        self.write_go_map(w, 0)
    }
}

fn write_indent<W: Write>(w: &mut W, n: usize) -> Result<()> {
    for _ in 0..n {
        w.write_all(b"\t")?;
    }
    Ok(())
}

/// Write the lookup functions and the `_bindata` table.
///
/// `assets` must be sorted by name. Entries are aligned on the longest
/// name so that adding an asset only touches a few lines of a diff.
pub fn write_toc<W: Write>(w: &mut W, assets: &[Asset]) -> Result<()> {
    w.write_all(FUNC_ASSET.as_bytes())?;

    let longest = assets.iter().map(|a| a.name.len()).max().unwrap_or(0);
    for asset in assets {
        let pad = longest - asset.name.len() + 1;
        writeln!(
            w,
            "\t{}:{:pad$}{},",
            go_quote(&asset.name),
            "",
            asset.func_name,
        )?;
    }

    w.write_all(b"}\n")?;
    Ok(())
}

/// Write `AssetDir` and the tree it walks.
pub fn write_toc_tree<W: Write>(w: &mut W, assets: &[Asset]) -> Result<()> {
    w.write_all(FUNC_ASSET_DIR.as_bytes())?;
    AssetTree::from_assets(assets).write_as_go_map(w)
}
