use clap::{ArgAction, Parser, Subcommand};
use smartver::{ParseError, Scheme, Version};
use std::cmp::Ordering;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    LibraryError(#[from] ParseError),
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parses a version and prints its scheme and canonical form, separated by a tab
    Parse {
        /// The version string to parse
        version: String,

        /// The scheme to parse with (`semver` or `maven`). Omit to auto-detect.
        #[arg(short, long)]
        scheme: Option<Scheme>,
    },

    /// Compares two versions and prints `<`, `=` or `>`
    Compare {
        /// The left-hand version string
        a: String,

        /// The right-hand version string
        b: String,

        /// The scheme to parse both versions with. Omit to auto-detect each one.
        #[arg(short, long)]
        scheme: Option<Scheme>,
    },

    /// Sorts versions and prints them, one per line, as they were given
    ///
    /// The sort is stable: versions of equal precedence (e.g. differing only in build metadata)
    /// keep their input order, in both directions.
    Sort {
        /// The version strings to sort
        #[arg(required = true)]
        versions: Vec<String>,

        /// The scheme to parse all versions with. Omit to auto-detect each one.
        #[arg(short, long)]
        scheme: Option<Scheme>,

        /// Sort in descending order
        #[arg(short, long)]
        reverse: bool,
    },

    /// Validates that a version is well-formed in a scheme
    ///
    /// Prints `true` and exits with 0 if it is, or prints `false` and exits with 1 if it is not.
    /// Every string is a valid Maven version.
    Valid {
        /// The version string to validate
        version: String,

        /// The scheme to validate against
        #[arg(short, long)]
        scheme: Scheme,
    },
}

type Output = (String, i32);

fn main() {
    let cli = Cli::parse();

    init_logger(cli.verbose);
    log::debug!("{cli:?}");

    match do_work(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

fn do_work(cli: Cli) -> Result<Output, CliError> {
    match cli.command {
        Commands::Parse { version, scheme } => {
            let parsed = Version::parse(&version, scheme)?;
            log::info!("parsed `{version}` as {}", parsed.scheme());
            Ok((format!("{}\t{parsed}", parsed.scheme()), 0))
        }
        Commands::Compare { a, b, scheme } => {
            let left = Version::parse(&a, scheme)?;
            let right = Version::parse(&b, scheme)?;
            if left.scheme() != right.scheme() {
                log::warn!(
                    "comparing a {} version with a {} version, ordering is by scheme only",
                    left.scheme(),
                    right.scheme()
                );
            }
            Ok((symbol(smartver::compare(&left, &right)).to_string(), 0))
        }
        Commands::Sort {
            versions,
            scheme,
            reverse,
        } => {
            let mut pairs = versions
                .into_iter()
                .map(|version_str| {
                    let version = Version::parse(&version_str, scheme)?;
                    Ok((version_str, version))
                })
                .collect::<Result<Vec<_>, ParseError>>()?;

            if reverse {
                // flipped comparator rather than reversing afterwards, so ties keep input order
                pairs.sort_by(|(_, a), (_, b)| smartver::compare(b, a));
            } else {
                smartver::sort_by_version(&mut pairs, |(_, version)| version);
            }
            log::debug!("sorted {} versions", pairs.len());

            let lines: Vec<String> = pairs.into_iter().map(|(version_str, _)| version_str).collect();
            Ok((lines.join("\n"), 0))
        }
        Commands::Valid { version, scheme } => {
            Ok(match Version::parse(&version, Some(scheme)) {
                Ok(_) => ("true".to_string(), 0),
                Err(e) => {
                    log::info!("`{version}` is not a valid {scheme} version: {e}");
                    ("false".to_string(), 1)
                }
            })
        }
    }
}
