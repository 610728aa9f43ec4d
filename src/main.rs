use chrono::Local;
use clap::Parser;
use spelllib::menu::Menu;
use spelllib::trie::{MAX_SUGGESTIONS, Trie};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Interactive spellchecker and autocompleter over a word list
#[derive(Parser)]
struct Cli {
    /// Path to a dictionary with one `word [frequency]` entry per line
    #[arg(
        short,
        long,
        env = "SPELLCHECK_DICTIONARY",
        default_value = "frequency.txt"
    )]
    dictionary: PathBuf,
    /// Number of suggestions shown per prefix search
    #[arg(short, long, default_value_t = MAX_SUGGESTIONS)]
    limit: usize,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    env_logger::builder()
        .format(|buf, record| {
            let level_style = buf.default_level_style(record.level()).bold();
            writeln!(
                buf,
                "{}|{level_style}{:7}{level_style:#}|{:10}| {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
    log::info!("Load dictionary: {:?}", args.dictionary);
    let trie = match Trie::from_file(&args.dictionary) {
        Ok(trie) => trie,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Loaded {} words into {} nodes", trie.len(), trie.node_count());
    if let Some(usage) = memory_stats::memory_stats() {
        log::info!("Physical memory: {} KiB", usage.physical_mem / 1024);
    }

    let stdin = io::stdin();
    let mut menu = Menu::new(trie, stdin.lock(), io::stdout()).with_limit(args.limit);
    match menu.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Terminal I/O failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
