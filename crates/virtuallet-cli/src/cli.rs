use clap::Parser;

use virtuallet_core::VERSION;

/// Virtuallet - your virtual wallet in the terminal
///
/// Books the configured regular income for every month since the last run,
/// then reads single-character commands from stdin.
#[derive(Parser)]
#[command(name = "virtuallet")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {}
