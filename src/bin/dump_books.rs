//! Debug tool to dump the effective book table for a language.
//!
//! Usage:
//!   `cargo run --bin dump_books [-- de|en] [--json]`
//!
//! Shows display ids, spellings and standalone phrases after customizations
//! from the environment are applied, plus the size of the generated pattern.

// Development/debug binary - allow expect/unwrap for simpler error handling
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::env;

use versetag::bible::{locale, AliasResolver, WorkingTable};
use versetag::{Config, Language};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    });
    if let Some(code) = args.iter().skip(1).find(|a| !a.starts_with("--")) {
        let language: Language = code.parse().unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        });
        config.language = language;
    }

    let base = locale::table(config.language).expect("every language has a table");
    let table = WorkingTable::build(base, &config.customizations).unwrap_or_else(|e| {
        eprintln!("Invalid customizations: {e}");
        std::process::exit(1);
    });

    if args.contains(&"--json".to_string()) {
        let rows: Vec<_> = table
            .books
            .iter()
            .map(|b| {
                serde_json::json!({
                    "book": b.book,
                    "display": b.display_id(),
                    "aliases": b.aliases,
                    "standalone": b.standalone,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows).unwrap());
        return;
    }

    let resolver = AliasResolver::build(&table).expect("book pattern compiles");
    println!("{} ({})", config.language.name(), config.language.code());
    println!(
        "{} spellings, {} standalone phrases, pattern source {} bytes",
        resolver.len(),
        resolver.standalone().len(),
        resolver.pattern().source().map_or(0, str::len)
    );
    if resolver.pattern().is_disabled() {
        println!("No spellings survive customization; reference matching is disabled");
    }
    println!();

    for book in &table.books {
        let pinned = if book.pinned.is_some() { " (pinned)" } else { "" };
        println!("{:<6} {:<8}{pinned} {}", book.book.as_str(), book.display_id(), book.name);
        println!("       ├─ aliases: {}", book.aliases.join(", "));
        println!("       └─ standalone: {}", book.standalone.join(", "));
    }
}
