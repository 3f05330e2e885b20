use clap::Parser;
use fortunegen::config::Config;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(
    name = "fortunegen",
    about = "Generate Markdown, JSON and ES module siblings from a plain-text fortune list"
)]
struct Cli {
    /// Directory containing the source text file (default: current directory)
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Base file name shared by the source and the generated files
    #[arg(long)]
    base_name: Option<String>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &PathBuf) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let mut config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let defaults = ["fortunegen.config.json", "config/fortunegen.config.json"];
        let mut loaded = None;
        for p in &defaults {
            let path = PathBuf::from(p);
            if path.is_file() {
                loaded = Some(load_config(&path));
                break;
            }
        }
        loaded.unwrap_or_default()
    };

    // CLI overrides
    if let Some(name) = cli.base_name {
        config.base_name = name;
    }

    let summary = fortunegen::run(&cli.dir, &config).unwrap_or_else(|e| {
        die(&format!(
            "cannot regenerate {} files in {}: {}",
            config.base_name,
            cli.dir.display(),
            e
        ))
    });

    eprintln!(
        "rewrote {}.txt and 3 derived file(s) ({} fortunes, {} unique)",
        config.base_name, summary.total, summary.unique
    );
}
