//! tagpull command-line front end
//!
//! Parses a markup file or string and prints the resulting tree.
//!
//! Output modes:
//! - default: re-rendered markup, one tab per nesting level
//! - `--tree`: debug tree with visible whitespace
//! - `--json`: JSON dump of the parsed roots

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use tagpull_common::report_issue;
use tagpull_parser::{CharInput, ReaderInput, TagStream, parse_fragment, str_input};
use tagpull_tree::{Element, print_tree};

/// tagpull: pull-based parser for XML-like markup
#[derive(Parser, Debug)]
#[command(name = "tagpull")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Parse a file and re-render it
    tagpull ./doc.xml

    # Parse an inline string
    tagpull --xml '<a x="1"><b/>text</a>'

    # Print the debug tree
    tagpull --tree ./doc.xml

    # Dump JSON
    tagpull --json ./doc.xml

    # Reject junk inside closing tags
    tagpull --strict --xml '<a></a junk>'
"#)]
struct Cli {
    /// Path to the markup file to parse
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Parse a markup string directly instead of a file
    #[arg(long, value_name = "STRING", conflicts_with = "path")]
    xml: Option<String>,

    /// Fail on content inside closing tags instead of ignoring it
    #[arg(long)]
    strict: bool,

    /// Print the debug tree instead of re-rendered markup
    #[arg(long, conflicts_with = "json")]
    tree: bool,

    /// Print the parsed roots as JSON
    #[arg(long)]
    json: bool,

    /// Do not report parse issues
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let roots = if let Some(ref markup) = cli.xml {
        parse_input(str_input(markup), &cli)?
    } else if let Some(ref path) = cli.path {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let mut reader = ReaderInput::new(BufReader::new(file));
        let parsed = parse_input(&mut reader, &cli);
        if let Some(e) = reader.take_error() {
            return Err(e).with_context(|| format!("failed to read {}", path.display()));
        }
        parsed?
    } else {
        anyhow::bail!("nothing to parse: pass a file path or --xml")
    };

    print_roots(&roots, &cli)
}

/// Parse every root in `input`, reporting issues unless `--quiet` was given.
fn parse_input<I: CharInput>(input: I, cli: &Cli) -> Result<Vec<Element>> {
    let mut stream = TagStream::new(input)?;
    if cli.strict {
        stream = stream.with_strict_mode();
    }

    let result = parse_fragment(&mut stream);
    if !cli.quiet {
        for issue in stream.take_issues() {
            report_issue("Tag Stream", &issue);
        }
    }
    result.map_err(|e| anyhow::anyhow!("{}", e.red()))
}

/// Print the parsed roots in the requested format.
fn print_roots(roots: &[Element], cli: &Cli) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(roots)?);
        return Ok(());
    }

    if cli.tree {
        println!("{}", "=== Tree ===".bold());
        for root in roots {
            print_tree(root, 0);
        }
        return Ok(());
    }

    for root in roots {
        println!("{}", root.render(0).trim_start());
    }
    Ok(())
}
