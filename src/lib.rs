pub mod config;
pub mod dedupe;
pub mod emit;
pub mod parse;
pub mod write;

use config::Config;
use std::fs;
use std::io;
use std::path::Path;

pub struct RunSummary {
    pub total: usize,
    pub unique: usize,
}

pub fn run(dir: &Path, config: &Config) -> io::Result<RunSummary> {
    let base = config.base_name.as_str();

    let raw = fs::read_to_string(dir.join(write::file_name(base, ".txt")))?;
    let fortunes = parse::parse(&raw);

    // The .txt rewrite keeps duplicates; only the derived formats dedupe.
    write::write_artifact(dir, base, ".txt", &emit::to_text(&fortunes))?;

    let unique = dedupe::dedupe(&fortunes);
    write::write_artifact(dir, base, ".md", &emit::to_markdown(&unique))?;
    write::write_artifact(dir, base, ".json", &emit::to_json(&unique))?;
    write::write_artifact(dir, base, ".mjs", &emit::to_module(&unique))?;

    Ok(RunSummary {
        total: fortunes.len(),
        unique: unique.len(),
    })
}
