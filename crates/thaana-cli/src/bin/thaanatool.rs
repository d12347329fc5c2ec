use std::path::Path;

use clap::{Parser, Subcommand};

use thaana_cli::commands::convert_ops::{self, Format};
use thaana_cli::commands::table_ops;
use thaana_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "thaanatool", about = "Thaana text format conversion tool")]
struct Cli {
    /// Directory for JSON trace logs (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text between Thaana representations
    Convert {
        /// Source format
        #[arg(long, value_enum)]
        from: Format,
        /// Target format
        #[arg(long, value_enum)]
        to: Format,
        /// Text to convert (read from stdin when omitted)
        text: Option<String>,
        /// Custom conversion tables TOML
        #[arg(long)]
        tables: Option<String>,
    },
    /// Inspect conversion tables
    Tables {
        #[command(subcommand)]
        command: TablesCommand,
    },
}

#[derive(Subcommand)]
enum TablesCommand {
    /// Print the built-in tables TOML
    Export,
    /// Validate a tables TOML file
    Validate {
        /// Tables file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref dir) = cli.trace_log {
        init_tracing(Path::new(dir));
    }

    match cli.command {
        Command::Convert {
            from,
            to,
            text,
            tables,
        } => convert_ops::convert_cmd(from, to, text, tables.as_deref()),
        Command::Tables { command } => match command {
            TablesCommand::Export => table_ops::tables_export(),
            TablesCommand::Validate { file } => table_ops::tables_validate(&file),
        },
    }
}
