// Copyright (c) Contributors to the bindata project.
// SPDX-License-Identifier: Apache-2.0

//! Release emitter: asset bytes are inlined into the generated source.

use std::collections::HashSet;
use std::fs::Metadata;
use std::io::Write;
use std::time::UNIX_EPOCH;

use flate2::Compression;
use flate2::write::GzEncoder;

use crate::asset::Asset;
use crate::encode::{HexWriter, go_quote, is_raw_safe, quote_ascii, sanitize};
use crate::templates::{
    IMPORT_ASSET_FILE, IMPORT_COMPRESS_MEMCOPY, IMPORT_COMPRESS_NOMEMCOPY,
    IMPORT_NOCOMPRESS_MEMCOPY, IMPORT_NOCOMPRESS_NOMEMCOPY, RELEASE_HEADER,
};
use crate::{Config, Error, Result};

#[cfg(test)]
#[path = "./release_test.rs"]
mod release_test;

/// Metadata recorded for one asset in the generated file info.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMetadata {
    pub size: u64,
    /// Mode in Go `os.FileMode` bit layout.
    pub mode: u32,
    /// Unix seconds.
    pub mod_time: i64,
    /// Lowercase hex MD5, empty unless requested.
    pub md5_checksum: String,
}

impl AssetMetadata {
    /// Collect the metadata of `data`, read from a file with `meta`, and
    /// apply the overrides of `config`.
    pub fn collect(config: &Config, meta: &Metadata, data: &[u8]) -> Self {
        let mut info = Self {
            size: meta.len(),
            mode: go_file_mode(meta),
            mod_time: unix_mod_time(meta),
            md5_checksum: String::new(),
        };

        if config.no_metadata {
            info.size = 0;
            info.mode = 0;
            info.mod_time = 0;
        }
        if config.mode > 0 {
            info.mode = config.mode & 0o777;
        }
        if config.mod_time > 0 {
            info.mod_time = config.mod_time;
        }
        if config.md5_checksum {
            info.md5_checksum = format!("{:x}", md5::compute(data));
        }
        info
    }
}

/// Mode bits of a regular file, in the layout Go's `os.FileMode` uses.
#[cfg(unix)]
pub fn go_file_mode(meta: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;

    const GO_MODE_SETUID: u32 = 1 << 23;
    const GO_MODE_SETGID: u32 = 1 << 22;
    const GO_MODE_STICKY: u32 = 1 << 20;

    let raw = meta.permissions().mode();
    let mut mode = raw & 0o777;
    if raw & 0o4000 != 0 {
        mode |= GO_MODE_SETUID;
    }
    if raw & 0o2000 != 0 {
        mode |= GO_MODE_SETGID;
    }
    if raw & 0o1000 != 0 {
        mode |= GO_MODE_STICKY;
    }
    mode
}

#[cfg(not(unix))]
pub fn go_file_mode(meta: &Metadata) -> u32 {
    if meta.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}

fn unix_mod_time(meta: &Metadata) -> i64 {
    let Ok(modified) = meta.modified() else {
        return 0;
    };
    match modified.duration_since(UNIX_EPOCH) {
        Ok(after) => after.as_secs() as i64,
        Err(before) => -(before.duration().as_secs() as i64),
    }
}

/// Write the imports, the `bindataRead` helper matching the compression
/// and copy settings, and the shared asset types.
pub fn write_release_header<W: Write>(w: &mut W, config: &Config) -> Result<()> {
    let imports = match (config.no_compress, config.no_mem_copy) {
        (false, false) => IMPORT_COMPRESS_MEMCOPY,
        (false, true) => IMPORT_COMPRESS_NOMEMCOPY,
        (true, false) => IMPORT_NOCOMPRESS_MEMCOPY,
        (true, true) => IMPORT_NOCOMPRESS_NOMEMCOPY,
    };
    w.write_all(imports.as_bytes())?;
    w.write_all(RELEASE_HEADER.as_bytes())?;
    Ok(())
}

/// Write the release code of a single output file.
///
/// Assets sharing a function are emitted once.
pub fn write_release<W: Write>(w: &mut W, config: &Config, assets: &[Asset]) -> Result<()> {
    write_release_header(w, config)?;

    let mut emitted = HashSet::new();
    for asset in assets {
        if emitted.insert(asset.func_name.as_str()) {
            write_release_asset(w, config, asset)?;
        }
    }
    Ok(())
}

/// Write the body of a split per-asset file.
pub fn write_one_file_release<W: Write>(w: &mut W, config: &Config, asset: &Asset) -> Result<()> {
    w.write_all(IMPORT_ASSET_FILE.as_bytes())?;
    write_release_asset(w, config, asset)
}

/// Write the data variable, the `<func>Bytes` accessor and the `<func>`
/// constructor of one asset.
pub fn write_release_asset<W: Write>(w: &mut W, config: &Config, asset: &Asset) -> Result<()> {
    let path = config.resolve(&asset.path);
    let read_failed = |error| Error::ReadFailed {
        path: asset.path.clone(),
        error,
    };
    let data = std::fs::read(&path).map_err(read_failed)?;
    let meta = std::fs::metadata(&path).map_err(read_failed)?;

    let func = &asset.func_name;
    let name = go_quote(&asset.name);

    match (config.no_compress, config.no_mem_copy) {
        (false, false) => {
            write!(w, "var _{func} = []byte(\"")?;
            write_gzip_hex(w, &data)?;
            write!(w, "\")\n\n")?;
            write_bindata_read_func(w, func, &name)?;
        }
        (false, true) => {
            write!(w, "var _{func} = \"")?;
            write_gzip_hex(w, &data)?;
            write!(w, "\"\n\n")?;
            write_bindata_read_func(w, func, &name)?;
        }
        (true, false) => {
            write!(w, "var _{func} = []byte(")?;
            if is_raw_safe(&data) {
                w.write_all(&sanitize(&data))?;
            } else {
                w.write_all(quote_ascii(&data).as_bytes())?;
            }
            write!(
                w,
                ")\n\nfunc {func}Bytes() ([]byte, error) {{\n\treturn _{func}, nil\n}}\n\n"
            )?;
        }
        (true, true) => {
            write!(w, "var _{func} = \"")?;
            HexWriter::new(&mut *w).write_all(&data)?;
            write!(w, "\"\n\n")?;
            write_bindata_read_func(w, func, &name)?;
        }
    }

    let info = AssetMetadata::collect(config, &meta, &data);
    write_release_common(w, asset, &info)
}

fn write_gzip_hex<W: Write>(w: &mut W, data: &[u8]) -> Result<()> {
    let mut gz = GzEncoder::new(HexWriter::new(&mut *w), Compression::default());
    gz.write_all(data)?;
    gz.finish()?;
    Ok(())
}

fn write_bindata_read_func<W: Write>(w: &mut W, func: &str, name: &str) -> Result<()> {
    write!(
        w,
        "func {func}Bytes() ([]byte, error) {{\n\
         \treturn bindataRead(\n\
         \t\t_{func},\n\
         \t\t{name},\n\
         \t)\n\
         }}\n\n"
    )?;
    Ok(())
}

fn write_release_common<W: Write>(w: &mut W, asset: &Asset, info: &AssetMetadata) -> Result<()> {
    let func = &asset.func_name;
    write!(
        w,
        "func {func}() (*asset, error) {{\n\
         \tbytes, err := {func}Bytes()\n\
         \tif err != nil {{\n\
         \t\treturn nil, err\n\
         \t}}\n\
         \n\
         \tinfo := bindataFileInfo{{name: {name}, size: {size}, md5checksum: {md5}, \
         mode: os.FileMode({mode}), modTime: time.Unix({mod_time}, 0)}}\n\
         \ta := &asset{{bytes: bytes, info: info}}\n\
         \treturn a, nil\n\
         }}\n\n",
        name = go_quote(&asset.name),
        size = info.size,
        md5 = go_quote(&info.md5_checksum),
        mode = info.mode,
        mod_time = info.mod_time,
    )?;
    Ok(())
}
