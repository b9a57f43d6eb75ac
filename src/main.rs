use clap::Parser;
use std::io;
use strhunt::{Alphabet, ParallelConfig, SessionOptions, run_session};
use tracing_subscriber::EnvFilter;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "strhunt")]
#[command(about = "strhunt - generate a random string in parallel and hunt for words in it")]
#[command(version)]
struct Args {
    /// Size of the string to generate (prompted for when omitted)
    #[arg(long, short = 'n')]
    size: Option<usize>,

    /// Number of worker threads (defaults to the number of logical CPUs)
    #[arg(long, short = 'j')]
    workers: Option<usize>,

    /// Random seed for reproducible strings (worker i uses seed + i)
    #[arg(long)]
    seed: Option<u64>,

    /// Symbols the string is drawn from
    #[arg(long, default_value = "abcdefghijklmnopqrstuvwxyz")]
    alphabet: Alphabet,

    /// Print the generated string before prompting for words
    #[arg(long)]
    print: bool,

    /// Also time a single-threaded scan for every word
    #[arg(long)]
    compare: bool,

    /// Enable verbose (debug) logging on stderr
    #[arg(long, short)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "strhunt=debug" } else { "strhunt=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// --- Main Function ---
fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = ParallelConfig::default()
        .with_workers_option(args.workers)
        .with_seed_option(args.seed)
        .with_alphabet(args.alphabet);

    let options = SessionOptions {
        size: args.size,
        print: args.print,
        compare: args.compare,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_session(stdin.lock(), stdout.lock(), &config, &options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
