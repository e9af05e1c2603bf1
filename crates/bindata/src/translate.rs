// Copyright (c) Contributors to the bindata project.
// SPDX-License-Identifier: Apache-2.0

//! Generation entry point: validate, scan, then write one or many files.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::asset::Asset;
use crate::debug::{write_debug, write_debug_header, write_one_file_debug};
use crate::release::{write_one_file_release, write_release, write_release_header};
use crate::templates::{FUNC_RESTORE, HEADER_GENERATED_BY};
use crate::toc::{write_toc, write_toc_tree};
use crate::{Config, DEF_OUTPUT_NAME, Error, FsScanner, Result};

#[cfg(test)]
#[path = "./translate_test.rs"]
mod translate_test;

/// Generate Go source embedding every asset `config` describes.
///
/// The configuration is validated first, which fills in the working
/// directory and the output path. The output is not written atomically: a
/// failure part way leaves whatever was written so far.
pub fn translate(config: &mut Config) -> Result<()> {
    tracing::debug!("validating");
    config.validate()?;

    tracing::debug!("scanning");
    let registry = FsScanner::new(config)?.scan_all()?;

    tracing::debug!("building-toc");
    let assets = registry.into_sorted();

    tracing::debug!(assets = assets.len(), "emitting");
    if config.split {
        translate_to_dir(config, &assets)
    } else {
        translate_to_file(config, &assets)
    }
}

/// Write the generated header: the generator marker, the list of sources
/// (or the common file marker in split mode) and the build tags.
pub fn write_header<W: Write>(w: &mut W, config: &Config, assets: &[Asset]) -> Result<()> {
    w.write_all(HEADER_GENERATED_BY.as_bytes())?;

    if config.split {
        w.write_all(b"// -- Common file --\n")?;
    } else {
        w.write_all(b"// sources:\n")?;
        for asset in assets {
            writeln!(w, "// {}", asset.path.display())?;
        }
    }

    write_tags(w, config)
}

fn write_tags<W: Write>(w: &mut W, config: &Config) -> Result<()> {
    if !config.tags.is_empty() {
        write!(w, "// +build {}\n\n", config.tags)?;
    }
    Ok(())
}

/// Write a complete single-file output.
pub fn write_single_file<W: Write>(w: &mut W, config: &Config, assets: &[Asset]) -> Result<()> {
    write_header(w, config, assets)?;
    write!(w, "\npackage {}\n\n", config.package)?;

    if config.debug || config.dev {
        write_debug(w, config, assets)?;
    } else {
        write_release(w, config, assets)?;
    }

    write_toc(w, assets)?;
    write_toc_tree(w, assets)?;
    w.write_all(FUNC_RESTORE.as_bytes())?;
    Ok(())
}

/// Write the common file of a split output: shared helpers and lookups.
pub fn write_common_file<W: Write>(w: &mut W, config: &Config, assets: &[Asset]) -> Result<()> {
    write_header(w, config, assets)?;
    write!(w, "\npackage {}\n\n", config.package)?;

    if config.debug || config.dev {
        write_debug_header(w)?;
    } else {
        write_release_header(w, config)?;
    }

    write_toc(w, assets)?;
    write_toc_tree(w, assets)?;
    w.write_all(FUNC_RESTORE.as_bytes())?;
    Ok(())
}

/// Write the file holding a single asset of a split output.
pub fn write_asset_file<W: Write>(w: &mut W, config: &Config, asset: &Asset) -> Result<()> {
    w.write_all(HEADER_GENERATED_BY.as_bytes())?;
    writeln!(w, "// source: {}", asset.path.display())?;
    write_tags(w, config)?;
    write!(w, "package {}\n\n", config.package)?;

    if config.debug || config.dev {
        write_one_file_debug(w, config, asset)
    } else {
        write_one_file_release(w, config, asset)
    }
}

fn translate_to_file(config: &Config, assets: &[Asset]) -> Result<()> {
    let mut w = create_output(&config.output)?;
    let result = write_single_file(&mut w, config, assets);
    finish(w, result)
}

fn translate_to_dir(config: &Config, assets: &[Asset]) -> Result<()> {
    let mut w = create_output(&config.output.join(DEF_OUTPUT_NAME))?;
    let result = write_common_file(&mut w, config, assets);
    finish(w, result)?;

    let mut written = HashSet::new();
    for asset in assets {
        // Aliases of one file share a function, and therefore a file.
        if !written.insert(asset.func_name.as_str()) {
            continue;
        }

        let path = config.output.join(format!("{}.go", asset.func_name));
        let mut w = create_output(&path)?;
        let result = write_asset_file(&mut w, config, asset);
        finish(w, result)?;
    }
    Ok(())
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|error| Error::OutputCreate {
        path: path.to_path_buf(),
        error,
    })?;
    tracing::info!("> {}", path.display());
    Ok(BufWriter::new(file))
}

/// Flush and close an output.
///
/// Buffered data is only flushed when writing succeeded. An error while
/// closing is reported only if nothing failed before it.
fn finish(w: BufWriter<File>, result: Result<()>) -> Result<()> {
    if let Err(err) = result {
        let (file, _unflushed) = w.into_parts();
        drop(file);
        return Err(err);
    }

    tracing::debug!("flushing");
    let file = w
        .into_inner()
        .map_err(|err| Error::WriteFailed(err.into_error()))?;
    file.sync_all()?;
    Ok(())
}
