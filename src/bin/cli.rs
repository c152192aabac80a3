//! node-query command line tool
//!
//! Parses an HTML document and prints the elements matching a query.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use node_query::{Attribute, Document, Node, NodeSummary, ParseOptions, Query};
use std::io::{Write, stdin, stdout};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Rendered markup, one match per block (default)
    Text,
    /// JSON array of node summaries
    Json,
}

#[derive(Parser)]
#[command(name = "node-query")]
#[command(version)]
#[command(about = "Find elements in an HTML document by tag, class, id and attributes", long_about = None)]
struct Cli {
    /// HTML file to search (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Required tag name
    #[arg(long, short = 't')]
    tag: Option<String>,

    /// Required class token
    #[arg(long, short = 'c')]
    class: Option<String>,

    /// Required id
    #[arg(long)]
    id: Option<String>,

    /// Required attribute value, as key=value (repeatable)
    #[arg(long = "attr", short = 'a', value_name = "KEY=VALUE")]
    attributes: Vec<Attribute>,

    /// Full query descriptor as JSON; other flags extend it
    #[arg(long, short = 'q', value_name = "JSON")]
    query: Option<String>,

    /// Print every match instead of the first one
    #[arg(long)]
    all: bool,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "text")]
    format: Format,

    /// Parse as if scripting were disabled (affects <noscript>)
    #[arg(long)]
    no_scripting: bool,
}

impl Cli {
    fn build_query(&self) -> anyhow::Result<Query> {
        let mut query = match &self.query {
            Some(json) => Query::from_json(json).context("Failed to parse --query")?,
            None => Query::new(),
        };

        if let Some(tag) = &self.tag {
            query = query.tag(tag);
        }
        if let Some(class) = &self.class {
            query = query.class(class);
        }
        if let Some(id) = &self.id {
            query = query.id(id);
        }

        Ok(query.with_attributes(self.attributes.iter().cloned()))
    }

    fn load_document(&self) -> anyhow::Result<Document> {
        let options = ParseOptions::new().scripting_enabled(!self.no_scripting);

        let document = match &self.file {
            Some(path) => Document::from_path(path, &options)?,
            None => Document::from_reader(stdin().lock(), &options).context("Failed to read stdin")?,
        };

        Ok(document)
    }
}

fn print_matches(matches: &[Node], format: Format) -> anyhow::Result<()> {
    let mut out = stdout().lock();

    match format {
        Format::Text => {
            for (i, node) in matches.iter().enumerate() {
                if i > 0 {
                    writeln!(out, "-----------------------------------")?;
                }
                writeln!(out, "{}", node)?;
            }
        }
        Format::Json => {
            let summaries: Vec<NodeSummary> = matches.iter().map(NodeSummary::from).collect();
            serde_json::to_writer_pretty(&mut out, &summaries)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let query = cli.build_query()?;
    let document = cli.load_document()?;

    log::info!("Searching {} elements for {}", document.count_elements(), query);

    let matches = if cli.all {
        document.query_selector_all(&query)
    } else {
        document.query_selector(&query).into_iter().collect()
    };

    if matches.is_empty() && cli.format == Format::Text {
        eprintln!("No element matches {}", query);
        return Ok(false);
    }

    print_matches(&matches, cli.format)?;
    Ok(!matches.is_empty())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
