// Copyright (c) Contributors to the bindata project.
// SPDX-License-Identifier: Apache-2.0

//! Debug and dev emitter: accessors read the asset from disk when called.

use std::collections::HashSet;
use std::io::Write;

use crate::asset::Asset;
use crate::encode::go_quote;
use crate::input::clean_path;
use crate::templates::{DEBUG_HEADER, IMPORT_DEBUG_ASSET_FILE, IMPORT_DEV_ASSET_FILE};
use crate::{Config, Result};

#[cfg(test)]
#[path = "./debug_test.rs"]
mod debug_test;

/// Write the imports and helpers shared by every debug accessor.
pub fn write_debug_header<W: Write>(w: &mut W) -> Result<()> {
    w.write_all(DEBUG_HEADER.as_bytes())?;
    Ok(())
}

/// Write the debug code of a single output file.
pub fn write_debug<W: Write>(w: &mut W, config: &Config, assets: &[Asset]) -> Result<()> {
    write_debug_header(w)?;

    let mut emitted = HashSet::new();
    for asset in assets {
        if emitted.insert(asset.func_name.as_str()) {
            write_debug_asset(w, config, asset)?;
        }
    }
    Ok(())
}

/// Write the body of a split per-asset file.
pub fn write_one_file_debug<W: Write>(w: &mut W, config: &Config, asset: &Asset) -> Result<()> {
    let imports = if config.dev {
        IMPORT_DEV_ASSET_FILE
    } else {
        IMPORT_DEBUG_ASSET_FILE
    };
    w.write_all(imports.as_bytes())?;
    write_debug_asset(w, config, asset)
}

/// Go expression locating the asset at runtime.
///
/// Debug code points at the absolute path found at generation time, dev
/// code joins the asset name onto a `rootDir` the consuming package defines.
pub fn path_expr(config: &Config, asset: &Asset) -> String {
    if config.dev {
        format!("filepath.Join(rootDir, {})", go_quote(&asset.name))
    } else {
        let path = clean_path(config.resolve(&asset.path));
        go_quote(&path.to_string_lossy())
    }
}

/// Write the `<func>Bytes` and `<func>` stubs of one asset.
pub fn write_debug_asset<W: Write>(w: &mut W, config: &Config, asset: &Asset) -> Result<()> {
    let func = &asset.func_name;
    write!(
        w,
        "// {func} reads file data from disk. It returns an error on failure.\n\
         func {func}Bytes() ([]byte, error) {{\n\
         \tasset, err := {func}()\n\
         \tif asset == nil {{\n\
         \t\treturn nil, err\n\
         \t}}\n\
         \treturn asset.bytes, err\n\
         }}\n\
         \n\
         func {func}() (*asset, error) {{\n\
         \tpath := {path}\n\
         \tname := {name}\n\
         \tbytes, err := bindataRead(path, name)\n\
         \tif err != nil {{\n\
         \t\treturn nil, err\n\
         \t}}\n\
         \n\
         \tfi, err := os.Stat(path)\n\
         \tif err != nil {{\n\
         \t\terr = fmt.Errorf(\"Error reading asset info %s at %s: %v\", name, path, err)\n\
         \t}}\n\
         \n\
         \ta := &asset{{bytes: bytes, info: fi}}\n\
         \treturn a, err\n\
         }}\n\n",
        path = path_expr(config, asset),
        name = go_quote(&asset.name),
    )?;
    Ok(())
}
