//! quire CLI
//!
//! Parses markup and prints the resulting node tree, for debugging what the
//! layout stage will receive.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use quire_dom::{Document, NodeRef};
use quire_markup::{DEFAULT_MAX_DEPTH, EntityMode, MarkupParser, ParseIssue, ParseOptions};

/// Parse quire markup and print the node tree
#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the tree of a file
    quire chapter.qm

    # Parse markup given inline
    quire --markup '<p>Hello <b>world</b></p>'

    # Dump JSON for the layout stage, decoding entities
    quire --json --entities named chapter.qm

    # Show what was recovered from
    quire --issues broken.qm
"#)]
struct Cli {
    /// Path to a markup file
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Parse this markup string instead of a file
    #[arg(long, value_name = "MARKUP", conflicts_with = "path")]
    markup: Option<String>,

    /// Print the tree as JSON
    #[arg(long)]
    json: bool,

    /// Print the problems recovered from during the parse
    #[arg(long)]
    issues: bool,

    /// Entity strategy: drop or named
    #[arg(long, default_value = "drop", value_name = "MODE")]
    entities: EntityMode,

    /// Maximum nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Skip <!...> and <?...> instead of treating them as nameless tags
    #[arg(long)]
    skip_declarations: bool,

    /// Do not print warnings to stderr
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> ParseOptions {
        ParseOptions::default()
            .with_entities(self.entities)
            .with_max_depth(self.max_depth)
            .with_skip_declarations(self.skip_declarations)
            .with_warnings(!self.quiet)
    }

    fn source(&self) -> Result<Vec<u8>> {
        if let Some(markup) = &self.markup {
            return Ok(markup.clone().into_bytes());
        }
        let Some(path) = &self.path else {
            bail!("no input: pass a FILE or --markup");
        };
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let source = cli.source()?;

    let parser = MarkupParser::new(cli.options());
    let (doc, issues) = parser
        .parse_with_issues(source)
        .context("failed to parse markup")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print_document(&doc);
    }

    if cli.issues {
        print_issues(&issues);
    }

    Ok(())
}

/// Print every top-level node as an indented outline.
fn print_document(doc: &Document) {
    if doc.roots().is_empty() {
        println!("{}", "(empty document)".dimmed());
    }
    for node in doc.nodes() {
        print_tree(node, 0);
    }
}

/// Print a node tree for debugging.
fn print_tree(node: NodeRef<'_>, indent: usize) {
    let prefix = "  ".repeat(indent);
    if let Some(text) = node.text() {
        let display = text.replace('\n', "\\n").replace(' ', "\u{00B7}");
        println!("{prefix}{}", format!("\"{display}\"").green());
        return;
    }

    let mut line = format!("<{}", node.kind());
    if let Some(attrs) = node.attributes() {
        let mut attrs: Vec<_> = attrs.iter().collect();
        attrs.sort();
        for (name, value) in attrs {
            line.push_str(&format!(" {name}=\"{value}\""));
        }
    }
    line.push('>');

    let flag = if node.inline() { " inline" } else { "" };
    println!("{prefix}{}{}", line.cyan(), flag.dimmed());
    for child in node.children() {
        print_tree(child, indent + 1);
    }
}

fn print_issues(issues: &[ParseIssue]) {
    if issues.is_empty() {
        println!("{}", "no issues".dimmed());
        return;
    }
    println!("{}", format!("{} issue(s)", issues.len()).yellow());
    for issue in issues {
        println!("  {issue}");
    }
}
