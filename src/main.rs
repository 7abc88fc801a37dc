use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use yamlgrab::compare::{compare_paths, list_paths};
use yamlgrab::document::loader::{load_file, parse_value};
use yamlgrab::document::render::{to_json_string, to_yaml_stream, to_yaml_string};
use yamlgrab::path::parse_path;

/// yamlgrab - query and edit YAML/JSON documents by path
#[derive(Parser)]
#[command(name = "yamlgrab")]
#[command(version)]
#[command(about = "Query and edit YAML/JSON documents by path", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value at a path
    Get {
        /// Input file, or `-` for stdin
        file: String,

        /// Path in go-patch (`/yaml/structure/somekey`) or dot-style
        /// (`yaml.structure.somekey`) notation
        path: String,

        /// Print the result as JSON instead of YAML
        #[arg(long)]
        json: bool,
    },

    /// Create or update the value at a path and print the result
    Set {
        /// Input file, or `-` for stdin
        file: String,

        /// Path in go-patch or dot-style notation
        path: String,

        /// New value, parsed as YAML (`42` is an int, `[a, b]` a list)
        value: String,
    },

    /// Remove the entry at a path and print the result
    Delete {
        /// Input file, or `-` for stdin
        file: String,

        /// Path in go-patch or dot-style notation
        path: String,
    },

    /// List all paths in the input documents
    Paths {
        /// Input file, or `-` for stdin
        file: String,
    },

    /// List paths that two files have in common
    Compare {
        /// First input file
        from: String,

        /// Second input file
        to: String,

        /// Only report paths whose values match as well
        #[arg(long)]
        by_value: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Get { file, path, json } => {
            let input = load_file(&file)?;
            let path = parse_path(&path)?;
            let node = input.get(&path)?.into_node();
            if json {
                println!("{}", to_json_string(&node)?);
            } else {
                print!("{}", to_yaml_string(&node)?);
            }
        }

        Command::Set { file, path, value } => {
            let mut input = load_file(&file)?;
            let path = parse_path(&path)?;
            let value = parse_value(&value)
                .with_context(|| format!("failed to parse value '{}'", value))?;
            input.set(&path, value)?;
            print!("{}", to_yaml_stream(&input.documents)?);
        }

        Command::Delete { file, path } => {
            let mut input = load_file(&file)?;
            let path = parse_path(&path)?;
            input.del(&path)?;
            print!("{}", to_yaml_stream(&input.documents)?);
        }

        Command::Paths { file } => {
            for path in list_paths(&file)? {
                println!("{}", path);
            }
        }

        Command::Compare { from, to, by_value } => {
            for path in compare_paths(&from, &to, by_value)? {
                println!("{}", path);
            }
        }
    }

    Ok(())
}
