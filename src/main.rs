/*!
Main binary for htmlwords.
*/

use anyhow::{Context, Result};
use clap::{ArgAction, ColorChoice, CommandFactory, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::info;
use std::io::{self, BufReader, IsTerminal, Write};
use std::{fs::File, path::PathBuf};

use htmlwords::commands::{
    self,
    tokenize::{Options, OutputFormat},
};

/// Split an HTML-like document into tags, words, numbers, and punctuation,
/// one line at a time.
#[derive(Parser)]
#[command(name = "htok", version, about, long_about = None, disable_help_subcommand = true)]
struct Args {
    /// Optional subcommands
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(value_name = "FILE")]
    /// Optional path to the document. If omitted, reads from STDIN
    input: Option<PathBuf>,
    /// Print one JSON array of tokens per input line
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
    /// Display the number of tokens and lines read
    #[arg(long, action = ArgAction::SetTrue)]
    count: bool,
    /// Do not display tokens
    #[arg(short, long, action = ArgAction::SetTrue)]
    no_display: bool,
    /// When to color tokens by kind
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

/// Available subcommands for `htok`
#[derive(Subcommand)]
enum Commands {
    #[command(subcommand)]
    /// Generate additional documentation and/or completions
    Generate(GenerateCommand),
}

/// Generate shell completions and man page
#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate shell completions for the given shell to stdout.
    Shell { shell: clap_complete::Shell },
    /// Generate man pages for htok to output directory if specified, else
    /// the current directory.
    Man {
        /// The output directory to write the man pages.
        #[clap(short, long)]
        output_dir: Option<PathBuf>,
    },
}

/// Entry point for main binary.
///
/// Reads the document from the given file, or from STDIN when piped, and
/// writes each line's tokens to STDOUT in the format chosen on the command
/// line.
fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .parse_default_env()
        .init();

    match args.command {
        Some(Commands::Generate(cmd)) => match cmd {
            GenerateCommand::Shell { shell } => {
                commands::generate::write_completions(
                    shell,
                    &mut Args::command(),
                    &mut io::stdout().lock(),
                );
            }
            GenerateCommand::Man { output_dir } => {
                for path in commands::generate::generate_man_pages(
                    &Args::command(),
                    output_dir,
                )? {
                    println!("Generated: {}", path.display());
                }
            }
        },
        None => {
            let options = Options {
                format: if args.json {
                    OutputFormat::Json
                } else {
                    OutputFormat::Listing
                },
                colored: match args.color {
                    ColorChoice::Always => {
                        colored::control::set_override(true);
                        true
                    }
                    ColorChoice::Never => false,
                    ColorChoice::Auto => true,
                },
                quiet: args.no_display,
            };

            let stdout = io::stdout();
            let mut writer = stdout.lock();
            let summary = if let Some(path) = args.input {
                info!("tokenizing {}", path.display());
                let file = File::open(&path).with_context(|| {
                    format!("Failed to read file {}", path.display())
                })?;
                commands::tokenize::tokenize_document(
                    BufReader::new(file),
                    &mut writer,
                    options,
                )?
            } else {
                if io::stdin().is_terminal() {
                    // No piped input and no file specified
                    let mut cmd = Args::command();
                    return Ok(cmd.print_help()?);
                }
                info!("tokenizing STDIN");
                commands::tokenize::tokenize_document(
                    io::stdin().lock(),
                    &mut writer,
                    options,
                )?
            };

            if args.count {
                writeln!(writer, "Tokens: {}", summary.tokens)?;
                writeln!(writer, "Lines: {}", summary.lines)?;
            }
        }
    }

    Ok(())
}
