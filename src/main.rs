use anyhow::Result;
use cdx::index::{Backend, BuildSummary, build_index};
use cdx::output::{self, ColorMode};
use cdx::query::{Command, parse_command, run_query};
use cdx::text::LineStore;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cdx")]
#[command(about = "In-memory concordance index over a text file")]
struct Cli {
    /// Text file to index
    file: PathBuf,

    /// Index storage backend
    #[arg(short, long, value_enum, default_value_t = Backend::List)]
    backend: Backend,

    /// Emit the build summary and query reports as JSON lines
    #[arg(long)]
    json: bool,

    /// When to use colored output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = LineStore::load(&cli.file)?;
    let (index, comparisons) = build_index(&store, cli.backend);
    let summary = BuildSummary::new(cli.file.clone(), &index, &store, comparisons);

    if cli.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        output::print_summary(&summary, cli.color.choice())?;
    }

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        if !cli.json {
            print!("> ");
            io::stdout().flush()?;
        }
        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // EOF ends the session like quit
        }

        match parse_command(&input) {
            Command::Quit => break,
            Command::Empty => continue,
            Command::Invalid => {
                println!("Invalid command. Try: find <word>, quit");
            }
            Command::Find(word) => {
                let report = run_query(&index, &store, &word);
                if cli.json {
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    output::print_report(&report, cli.color.choice())?;
                }
            }
        }
    }

    Ok(())
}
