//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `quill_core` linkage and schema bootstrap without a host app.
//! - Keep output deterministic for quick local sanity checks.

use quill_core::db::migrations::current_user_version;
use quill_core::db::open_db_in_memory;
use quill_core::{Category, PostRules};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("quill_core version={}", quill_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("quill_core db_open=error error={err}");
            return ExitCode::FAILURE;
        }
    };
    match current_user_version(&conn) {
        Ok(version) => println!("quill_core schema_version={version}"),
        Err(err) => {
            eprintln!("quill_core schema_version=error error={err}");
            return ExitCode::FAILURE;
        }
    }

    let categories: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    println!("quill_core categories={}", categories.join(","));

    let rules = PostRules::default();
    println!(
        "quill_core content_min_chars={} summary_max_chars={} clickbait_phrases={}",
        rules.content_min_chars,
        rules.summary_max_chars,
        rules.clickbait_phrases.len()
    );
    ExitCode::SUCCESS
}
