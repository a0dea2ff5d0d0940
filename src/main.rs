//! shellexplain: explain a parsed shell command.
//!
//! Reads a JSON request `{"source": "...", "ast": {...}}` from stdin, where
//! `ast` is the command tree produced by the shell parser. Writes the command
//! line with every part highlighted, then one line per part with what it does.
//!
//! Flags:
//!   --no-color       print without styling
//!   --validate-only  decode and validate the request, print nothing
//!   --leaves         also print each leaf's kind and range

use std::io::Read;

use shellexplain::config::Config;
use shellexplain::render::{Plain, StyleTable};
use shellexplain::{Document, explain, logging};

#[derive(Debug, Default)]
struct Flags {
    no_color: bool,
    validate_only: bool,
    leaves: bool,
}

fn parse_flags() -> Flags {
    let mut flags = Flags::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--no-color" => flags.no_color = true,
            "--validate-only" => flags.validate_only = true,
            "--leaves" => flags.leaves = true,
            other => {
                eprintln!("shellexplain: unknown argument: {other}");
                std::process::exit(2);
            }
        }
    }
    flags
}

fn main() {
    let flags = parse_flags();
    let config = Config::load();
    logging::init(config.log_level());

    let mut input = String::new();
    if std::io::stdin().read_to_string(&mut input).is_err() {
        eprintln!("failed to read stdin");
        std::process::exit(1);
    }

    let doc = match Document::from_json(&input) {
        Ok(doc) => doc,
        Err(e) => {
            log::error!("{e}");
            eprintln!("shellexplain: {e}");
            std::process::exit(1);
        }
    };
    if flags.validate_only {
        return;
    }

    let table: Box<dyn StyleTable> = if flags.no_color {
        Box::new(Plain)
    } else {
        match config.style_table() {
            Ok(table) => table,
            Err(e) => {
                eprintln!("shellexplain: {e}");
                std::process::exit(1);
            }
        }
    };

    let explanation = match explain(&doc, table.as_ref()) {
        Ok(v) => v,
        Err(e) => {
            log::error!("{e}");
            eprintln!("shellexplain: {e}");
            std::process::exit(1);
        }
    };

    println!("{}", explanation.highlighted);
    println!();
    for line in &explanation.leaves {
        match &line.summary {
            Some(summary) => println!("  {}  {summary}", line.text),
            None => println!("  {}", line.text),
        }
        if flags.leaves {
            println!("      {} {}", line.kind, line.position);
        }
    }
}
