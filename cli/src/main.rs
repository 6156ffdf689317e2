//! blockdown CLI - block document conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

#[derive(Parser)]
#[command(name = "blockdown")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert block-editor documents to HTML and Markdown", long_about = None)]
struct Cli {
    /// Input document JSON file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to both HTML and Markdown
    Convert {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Convert a document to HTML
    Html {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert a document to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input document JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert { input, output }) => cmd_convert(&input, output.as_deref()),
        Some(Commands::Html { input, output }) => cmd_html(&input, output.as_deref()),
        Some(Commands::Markdown { input, output }) => cmd_markdown(&input, output.as_deref()),
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: blockdown <FILE> [OUTPUT]".yellow());
                println!("       blockdown --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let text = fs::read_to_string(input)?;
    log::debug!("read {} bytes from {}", text.len(), input.display());

    let html = blockdown::to_html(&text)?;
    fs::write(output_dir.join("document.html"), &html)?;

    let markdown = blockdown::to_markdown(&text)?;
    fs::write(output_dir.join("document.md"), &markdown)?;

    println!("{}", "Output files:".green().bold());
    println!("  {} document.html", "├─".dimmed());
    println!("  {} document.md", "└─".dimmed());

    Ok(())
}

fn cmd_html(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;
    let html = blockdown::to_html(&text)?;
    write_output(output, &html)
}

fn cmd_markdown(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;
    let markdown = blockdown::to_markdown(&text)?;
    write_output(output, &markdown)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, content)?,
        None => println!("{}", content),
    }
    Ok(())
}
