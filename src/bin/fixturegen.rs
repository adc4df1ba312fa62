use clap::{Parser, Subcommand};
use fixturegen::cli::{self as prog_cli, Command};
use fixturegen::config::AppConfig;
use fixturegen::manifest::ManifestOptions;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fixturegen", version, about = "Test fixture generators for the k-d tree and trie assignments", long_about=None)]
struct Cli {
    /// Path to a config file (TOML)
    #[arg(long, help = "Path to a config file (TOML). If omitted, the standard locations are searched.")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Summary format: human|plain|json")]
    format: Option<String>,
    #[arg(long, global = true, help = "Log level: off|error|warn|info|debug|trace (overrides config/env)")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Generate point datasets (data/) and NN/RS query scripts (in/) for every size tier")]
    Points {
        #[arg(long, help = "Output root; data/ and in/ are created under it")]
        root: Option<PathBuf>,
        #[arg(long, help = "Seed for reproducible output; OS entropy when omitted")]
        seed: Option<u64>,
        #[arg(long, help = "Generate a single tier (0-9) instead of all")]
        tier: Option<usize>,
    },
    #[command(name = "verify-points", about = "Check generated point fixtures against their tier")]
    VerifyPoints {
        #[arg(long, help = "Root holding data/ and in/")]
        root: Option<PathBuf>,
    },
    #[command(about = "Generate INSERT/AUTOCOMPLETE/AUTOCORRECT/REMOVE scripts (in/NN-mk.in)")]
    Lexicon {
        #[arg(long, help = "Output root; in/ is created under it")]
        root: Option<PathBuf>,
        #[arg(long, help = "Random seed (default 69420)")]
        seed: Option<u64>,
        #[arg(long, help = "Dictionary word list, relative to the root")]
        dictionary: Option<PathBuf>,
        #[arg(long, help = "Directory of book texts, relative to the root")]
        books: Option<PathBuf>,
    },
    #[command(name = "reformat-books", about = "Lowercase book texts in place, keeping only letters and whitespace")]
    ReformatBooks {
        #[arg(long, help = "Directory of book texts, relative to the lexicon root")]
        books: Option<PathBuf>,
    },
    #[command(about = "Write a JSON test manifest with one entry per file in <suite>/in")]
    Manifest {
        #[arg(long, help = "Suite directory holding in/")]
        suite: Option<PathBuf>,
        #[arg(long, help = "Score split evenly across tests (default 45)")]
        total: Option<u64>,
        #[arg(long, help = "Per-test timeout (default 30)")]
        timeout: Option<u64>,
        #[arg(long, help = "Display name prefix (default kNN)")]
        name: Option<String>,
        #[arg(long, help = "Order tests by file name instead of directory listing order")]
        sorted: bool,
        #[arg(long, help = "Output file (default tests.json)")]
        out: Option<PathBuf>,
    },
}

fn to_command(cmd: Commands, cfg: &mut AppConfig) -> Command {
    match cmd {
        Commands::Points { root, seed, tier } => {
            if root.is_some() { cfg.points_root = root; }
            if seed.is_some() { cfg.points_seed = seed; }
            Command::Points { root: cfg.points_root(), seed: cfg.points_seed, tier }
        }
        Commands::VerifyPoints { root } => {
            if root.is_some() { cfg.points_root = root; }
            Command::VerifyPoints { root: cfg.points_root() }
        }
        Commands::Lexicon { root, seed, dictionary, books } => {
            if root.is_some() { cfg.lexicon_root = root; }
            if seed.is_some() { cfg.lexicon_seed = seed; }
            if dictionary.is_some() { cfg.dictionary = dictionary; }
            if books.is_some() { cfg.books_dir = books; }
            Command::Lexicon {
                root: cfg.lexicon_root(),
                seed: cfg.lexicon_seed(),
                dictionary: cfg.dictionary(),
                books: cfg.books_dir(),
            }
        }
        Commands::ReformatBooks { books } => {
            if books.is_some() { cfg.books_dir = books; }
            Command::ReformatBooks { books: cfg.books_dir() }
        }
        Commands::Manifest { suite, total, timeout, name, sorted, out } => {
            if suite.is_some() { cfg.manifest_suite = suite; }
            let mut opts = ManifestOptions::default();
            if let Some(t) = total { opts.total_score = t; }
            if let Some(t) = timeout { opts.timeout = t; }
            if let Some(n) = name { opts.name_prefix = n; }
            if let Some(o) = out { opts.out = o; }
            opts.sorted = sorted;
            Command::Manifest { suite: cfg.manifest_suite(), opts }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let mut cfg = match AppConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => { eprintln!("error: {}", e); std::process::exit(1); }
    };
    if cli.log_level.is_some() { cfg.log_level = cli.log_level.clone(); }
    if let Err(e) = fixturegen::init(&cfg) {
        eprintln!("warning: logging not initialized: {}", e);
    }
    let mode = prog_cli::parse_output_mode(cli.format.as_deref());
    let cmd = to_command(cli.command, &mut cfg);
    if let Err(e) = prog_cli::run_with_format(cmd, mode) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
