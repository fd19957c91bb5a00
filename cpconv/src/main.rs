//! iconv-style converter between UTF-8 and single-byte codepages.
//!
//! Usage:
//!   cpconv -f <from-encoding> -t <to-encoding> [-c | --replace TEXT] [file...]
//!   cpconv -l

mod app;
mod convert;

use std::fs::{self, File};
use std::io::{self, Read, Write};

use anyhow::{bail, Context, Result};
use bytepage::registry;
use clap::Parser;
use log::info;

use crate::app::Cli;
use crate::convert::{build_fallback, convert, Endpoint, FallbackChoice};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // bytepage and cpconv log to stderr; --verbose enables debug; RUST_LOG overrides
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_module("bytepage", level)
        .filter_module("cpconv", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();

    if cli.list {
        list_encodings();
        return Ok(());
    }

    let Some(from) = cli.from.as_deref() else {
        bail!("source encoding (-f) is required");
    };
    let Some(to) = cli.to.as_deref() else {
        bail!("target encoding (-t) is required");
    };

    let from = Endpoint::resolve(from).context("source encoding")?;
    let to = Endpoint::resolve(to).context("target encoding")?;

    let choice = match (&cli.replace, cli.discard) {
        (Some(text), _) => FallbackChoice::Replace(text.clone()),
        (None, true) => FallbackChoice::Discard,
        (None, false) => FallbackChoice::Strict,
    };
    let fallback = build_fallback(to, &choice)?;

    let input = read_input(&cli)?;
    info!(
        "converting {} bytes from {} to {}",
        input.len(),
        from.name(),
        to.name()
    );
    let output = convert(&input, from, to, &fallback)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("writing {}", path.display()))?
        }
        None => io::stdout().write_all(&output).context("writing output")?,
    }

    Ok(())
}

fn read_input(cli: &Cli) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    if cli.inputs.is_empty() {
        io::stdin().read_to_end(&mut buf).context("reading stdin")?;
        return Ok(buf);
    }

    for path in &cli.inputs {
        File::open(path)
            .and_then(|mut f| f.read_to_end(&mut buf))
            .with_context(|| format!("reading {}", path.display()))?;
    }
    Ok(buf)
}

fn list_encodings() {
    let mut pages: Vec<_> = registry::encodings().collect();
    pages.sort_unstable_by_key(|p| p.code_page());

    println!("    id  name           description");
    for page in pages {
        println!(
            "{:>6}  {:<14} {}",
            page.code_page(),
            page.web_name(),
            page.encoding_name()
        );
    }
    println!(" 65001  utf-8          Unicode (UTF-8)");
}
