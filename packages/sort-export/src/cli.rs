//! Command-line interface for sort-export.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{
    combined_output_path, converted_output_path, validate_directory, validate_input_file,
};
use crate::convert::{concatenate_dir, convert_file};
use crate::error::Result;
use crate::json::save_document;
use crate::types::Document;

/// sort-export - Convert card-sort text exports to JSON and merge sorted documents.
#[derive(Parser)]
#[command(name = "sort-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a "Save Text" export into a sorted JSON file.
    Convert {
        /// Text export to convert (e.g., ring1.txt)
        input: PathBuf,

        /// Output file (default: input path with a .json extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Concatenate all sorted JSON files in a directory into one file.
    Cat {
        /// Directory holding the per-ring .json files
        dir: PathBuf,

        /// Output file (default: cattedJSON.json inside the directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            pretty,
        } => convert_command(&input, output.as_deref(), pretty),
        Commands::Cat {
            dir,
            output,
            pretty,
        } => cat_command(&dir, output.as_deref(), pretty),
    }
}

/// Execute the convert command.
fn convert_command(input: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
    validate_input_file(input)?;

    let output_path = output.map_or_else(|| converted_output_path(input), Path::to_path_buf);

    println!(
        "{} {} -> {}",
        style("Converting").bold(),
        style(input.display()).cyan(),
        style(output_path.display()).green()
    );

    let doc = convert_file(input)?;
    print_summary(&doc);

    save_document(&doc, &output_path, pretty)?;

    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_path.display()
    );

    Ok(())
}

/// Execute the cat command.
fn cat_command(dir: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
    validate_directory(dir)?;

    let output_path = output.map_or_else(|| combined_output_path(dir), Path::to_path_buf);

    println!(
        "{} {}",
        style("Concatenating").bold(),
        style(dir.display()).cyan()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Loading sorted documents...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let (files, doc) = match concatenate_dir(dir) {
        Ok(result) => result,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Saving JSON...");
    if let Err(e) = save_document(&doc, &output_path, pretty) {
        pb.finish_and_clear();
        return Err(e);
    }
    pb.finish_and_clear();

    println!("  Files: {}", files.len());
    print_summary(&doc);

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_path.display()
    );

    Ok(())
}

fn print_summary(doc: &Document) {
    println!("  Groups: {}", doc.len());
    println!("  Items: {}", doc.item_count());

    let duplicates = doc.duplicate_titles();
    if !duplicates.is_empty() {
        println!(
            "  Repeated titles: {}",
            style(duplicates.join(", ")).yellow().bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_convert() {
        let cli = Cli::parse_from(["sort-export", "convert", "ring1.txt"]);

        let Commands::Convert {
            input,
            output,
            pretty,
        } = cli.command
        else {
            panic!("expected convert command");
        };
        assert_eq!(input, PathBuf::from("ring1.txt"));
        assert!(output.is_none());
        assert!(!pretty);
    }

    #[test]
    fn test_cli_parse_cat_with_options() {
        let cli = Cli::parse_from([
            "sort-export",
            "cat",
            "rings",
            "--output",
            "all.json",
            "--pretty",
        ]);

        let Commands::Cat {
            dir,
            output,
            pretty,
        } = cli.command
        else {
            panic!("expected cat command");
        };
        assert_eq!(dir, PathBuf::from("rings"));
        assert_eq!(output, Some(PathBuf::from("all.json")));
        assert!(pretty);
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["sort-export"]).is_err());
    }
}
