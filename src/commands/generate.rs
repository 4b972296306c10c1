//! `generate` subcommand.
use anyhow::{Context, Result};
use clap_complete::Shell;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write shell completions for `cmd` to `writer`.
pub fn write_completions<W: Write>(
    shell: Shell,
    cmd: &mut clap::Command,
    writer: &mut W,
) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, writer);
}

/// Write a man page for `cmd` and one for each of its subcommands, at any
/// depth, into `output_dir` (the current directory if `None`). Subcommand
/// pages are named after their path, e.g. `htok-generate-man.1`.
///
/// Returns the paths written, top-level page first.
///
/// # Errors
///
/// Returns an error if the output directory or a page cannot be written.
pub fn generate_man_pages(
    cmd: &clap::Command,
    output_dir: Option<PathBuf>,
) -> Result<Vec<PathBuf>> {
    let output_dir = match output_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Opening current directory")?,
    };
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    let mut written = Vec::new();
    let mut pending = vec![(cmd.get_name().to_string(), cmd.clone())];
    while let Some((page_name, page_cmd)) = pending.pop() {
        for sub in page_cmd.get_subcommands() {
            pending.push((format!("{page_name}-{}", sub.get_name()), sub.clone()));
        }
        // Rename so NAME and SYNOPSIS show the full path. The leak is bounded
        // by the number of subcommands in a one-shot invocation.
        let leaked: &'static str = Box::leak(page_name.into_boxed_str());
        let page = page_cmd.name(leaked).disable_help_subcommand(true);
        written.push(render_page(page, &output_dir)?);
    }

    Ok(written)
}

fn render_page(cmd: clap::Command, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(format!("{}.1", cmd.get_name()));
    let mut file = File::create(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    clap_mangen::Man::new(cmd)
        .render(&mut file)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
