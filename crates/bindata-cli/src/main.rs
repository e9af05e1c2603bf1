// Copyright (c) Contributors to the bindata project.
// SPDX-License-Identifier: Apache-2.0

//! go-bindata - embed files into generated Go source

use std::ffi::OsString;

use clap::{CommandFactory, Parser};
use miette::Result;

mod cmd_translate;

use cmd_translate::CmdTranslate;


#[derive(Parser)]
#[clap(
    name = "go-bindata",
    about = "Convert any file into managable Go source code",
    version,
    override_usage = "go-bindata [options] <input directories>...",
    long_about = "Embed files into generated Go source. An input ending in /... is \
                  processed recursively."
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(flatten)]
    cmd: CmdTranslate,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long)]
    quiet: bool,
}

impl Opt {
    fn run(mut self) -> Result<i32> {
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(log_level)
            .init();

        self.cmd.run()
    }
}

/// Rewrite single dash long flags (`-pkg`, `-nocompress=true`) into the
/// double dash form clap expects.
///
/// Only names of known long flags are rewritten so that clustered short
/// flags like `-vv` keep working. Everything after `--` is left untouched.
fn go_style_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut cmd = Opt::command();
    cmd.build();
    let long: Vec<String> = cmd
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .map(str::to_string)
        .collect();

    let mut rewriting = true;
    args.into_iter()
        .map(|arg| {
            let Some(text) = arg.to_str().filter(|_| rewriting) else {
                return arg;
            };
            if text == "--" {
                rewriting = false;
                return arg;
            }
            let Some(flag) = text.strip_prefix('-').filter(|f| !f.starts_with('-')) else {
                return arg;
            };
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            if long.iter().any(|l| l == name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}

/// Render an error as one line: each cause of the chain joined by `": "`.
fn error_line(err: &miette::Report) -> String {
    err.chain()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}

fn main() {
    let opt = Opt::parse_from(go_style_args(std::env::args_os()));
    match opt.run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("go-bindata: {}", error_line(&err));
            std::process::exit(1);
        }
    }
}
