use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use json_gbnf_compiler::error::GbnfError;
use json_gbnf_compiler::{json_schema_to_gbnf, parse_schema, ScopeSettings};

#[derive(Parser)]
#[command(name = "json-gbnf")]
#[command(about = "Compile JSON schemas into GBNF grammars for constrained decoding", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a JSON schema file to a `.gbnf` grammar
    Compile {
        /// Input schema file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output `.gbnf` file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit a compact grammar without new-line alternatives
        #[arg(long)]
        compact: bool,

        /// Indentation width per nesting level in pretty-printed output
        #[arg(long, default_value_t = 4)]
        indent: u32,
    },

    /// Parse a JSON schema file and report whether it is understood
    Check {
        /// Input schema file (JSON)
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<(), GbnfError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Compile {
            input,
            output,
            compact,
            indent,
        } => {
            let text = fs::read_to_string(input).map_err(GbnfError::Io)?;
            let settings = ScopeSettings {
                allow_new_lines:  !*compact,
                scope_pad_spaces: *indent,
            };
            let grammar = json_schema_to_gbnf(&text, settings)?;
            if let Some(out_path) = output {
                fs::write(out_path, &grammar).map_err(GbnfError::Io)?;
                println!("Compiled {} → {}", input.display(), out_path.display());
            } else {
                println!("{}", grammar);
            }
            Ok(())
        }

        Commands::Check { input } => {
            let text = fs::read_to_string(input).map_err(GbnfError::Io)?;
            let _schema = parse_schema(&text)?;
            println!("{}: schema ok", input.display());
            Ok(())
        }
    }
}
