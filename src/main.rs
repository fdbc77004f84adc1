mod commands;
mod core;
mod release;
mod ui;

use clap::Parser;
use std::path::PathBuf;

use crate::core::error::{BumpError, print_error};

/// Bump the version literal in a build file and cut a git release
#[derive(Parser)]
#[command(name = "vbump")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Bump commands: major, minor, patch, +1.0.0, +0.1.0, +0.0.1, or an
  /// absolute version like 3.2.1. Applied in order, cumulatively.
  #[arg(value_name = "COMMAND", default_value = "patch")]
  command: Vec<String>,

  /// Input file name
  #[arg(short = 'i', long = "in", value_name = "FILE", default_value = "setup.py")]
  input: PathBuf,

  /// Force version change for new <= old
  #[arg(short, long)]
  force: bool,

  /// Assume yes on the final prompt
  #[arg(short, long)]
  yes: bool,

  /// Print the rewritten file and git commands instead of running them
  #[arg(short, long)]
  debug: bool,

  /// Print version transitions
  #[arg(short, long)]
  verbose: bool,

  /// With --debug, print the release plan as JSON
  #[arg(long)]
  json: bool,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let result = commands::run_release(
    cli.command,
    cli.input,
    cli.force,
    cli.yes,
    cli.debug,
    cli.verbose,
    cli.json,
  );

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: BumpError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
