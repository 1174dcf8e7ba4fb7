use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use structopt::StructOpt;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use lexicon::alphabet::{normalize, validate_word};
use lexicon::{FileFormat, Lexicon, Pattern, Result};

/// Query a word list loaded into a prefix tree.
#[derive(StructOpt, Debug)]
struct Cli {
    /// The word list to read, one word per line
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Lines starting with this character are ignored
    #[structopt(long)]
    comment: Option<char>,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt, Debug)]
enum Command {
    /// Is the word in the list?
    Contains { word: String },
    /// Does any word start with this prefix?
    Prefix { prefix: String },
    /// List words starting with a prefix
    Complete { prefix: String },
    /// Words of the same length within a number of letter substitutions
    Suggest {
        #[structopt(required = true)]
        words: Vec<String>,
        #[structopt(short, long, default_value = "1")]
        distance: usize,
    },
    /// Words matching patterns of letters, '?' or '_' (one letter) and '*' (any run)
    Match {
        #[structopt(required = true)]
        patterns: Vec<String>,
    },
    /// Every word, in order
    List,
    /// Number of words
    Count,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::from_args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match std::error::Error::source(&e) {
                Some(cause) => error!(cause = %cause, "{}", e),
                None => error!("{}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<()> {
    let format = match args.comment {
        Some(c) => FileFormat::builder().comment_prefix(c).build(),
        None => FileFormat::builder().build(),
    };
    let lexicon = Lexicon::from_file(&args.path, &format)?;

    let start = Instant::now();
    match args.command {
        Command::Contains { word } => println!("{}", lexicon.contains(&checked(&word)?)),
        Command::Prefix { prefix } => println!("{}", lexicon.has_prefix(&checked(&prefix)?)),
        Command::Complete { prefix } => {
            lexicon.words_with_prefix(&checked(&prefix)?).for_each(|x| println!("{}", x))
        }
        Command::Suggest { words, distance } => {
            let words = words.iter().map(|x| checked(x)).collect::<Result<Vec<_>>>()?;
            let targets: Vec<&str> = words.iter().map(String::as_str).collect();
            print_batch(&targets, lexicon.suggest_batch(&targets, distance));
        }
        Command::Match { patterns } => {
            let patterns = patterns.iter()
                .map(|x| Pattern::parse(x).map(|p| p.to_string()))
                .collect::<Result<Vec<_>>>()?;
            let patterns: Vec<&str> = patterns.iter().map(String::as_str).collect();
            print_batch(&patterns, lexicon.match_batch(&patterns));
        }
        Command::List => lexicon.words().for_each(|x| println!("{}", x)),
        Command::Count => println!("{}", lexicon.count()),
    }
    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "query finished");
    Ok(())
}

fn checked(word: &str) -> Result<String> {
    let word = normalize(word).into_owned();
    validate_word(&word)?;
    Ok(word)
}

fn print_batch<I>(queries: &[&str], results: Vec<I>)
    where I: IntoIterator<Item=String> {
    for (query, result) in queries.iter().zip(results) {
        let words: Vec<String> = result.into_iter().collect();
        println!("{}: {}", query, words.join(" "));
    }
}
