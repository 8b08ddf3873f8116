use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, Command};
use std::fs;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use minddoc::parser::parse_document;
use minddoc::renderer::{Exporter, OutputFormat};
use minddoc::store::IdentifierStore;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("minddoc")
        .about("Translate a FreeMind file to plain text, Markdown, or wiki documents")
        .arg(
            Arg::new("input")
                .help("FreeMind (.mm) input file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("plaintext")
                .short('t')
                .long("plaintext")
                .action(ArgAction::SetTrue)
                .help("Export to plain text"),
        )
        .arg(
            Arg::new("markdown")
                .short('m')
                .long("markdown")
                .action(ArgAction::SetTrue)
                .help("Export to Markdown"),
        )
        .arg(
            Arg::new("wiki")
                .short('w')
                .long("wiki")
                .action(ArgAction::SetTrue)
                .help("Export to wiki markup"),
        )
        .get_matches();

    let mut formats = Vec::new();
    if matches.get_flag("plaintext") {
        formats.push(OutputFormat::PlainText);
    }
    if matches.get_flag("markdown") {
        formats.push(OutputFormat::Markdown);
    }
    if matches.get_flag("wiki") {
        formats.push(OutputFormat::Wiki);
    }
    if formats.is_empty() {
        bail!("no export format specified (use --plaintext, --markdown, or --wiki)");
    }

    let input = matches.get_one::<String>("input").unwrap();
    let content =
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input))?;
    let roots = parse_document(&content)
        .with_context(|| format!("failed to parse {}", input))?;

    let base = Path::new(input)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .context("input path has no usable base name")?
        .to_string();

    // One store serves every format pass of the run, so requirement numbers
    // come out identical in all outputs.
    let mut store = IdentifierStore::open(format!("{}.req", base))?;

    for format in &formats {
        let mut rendered = String::new();
        let mut exporter = Exporter::new(format.heading_format(), &mut store);
        for root in &roots {
            rendered.push_str(&exporter.export(root)?);
        }

        let output_path = format!("{}{}", base, format.extension());
        fs::write(&output_path, rendered)
            .with_context(|| format!("failed to write {}", output_path))?;
        info!(path = %output_path, "wrote output");
    }

    store.close()?;
    Ok(())
}
