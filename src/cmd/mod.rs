mod runtime_error;

pub use runtime_error::RuntimeError;

use clap::Parser;
use log::{debug, info, LevelFilter};

use crate::corpus::{self, Corpus, CORPUS};
use crate::logger::CONSOLE_LOGGER;
use crate::strategy::Strategy;

/// Address every strategy has to accept for the smoke check to pass.
pub const SMOKE_ADDRESS: &str = "191.168.0.1";

#[derive(Parser, Debug)]
#[command(
    name = "quadCheck",
    about = "validate IPv4 dotted-quad addresses and cross-check the validators",
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Cmd {
    #[arg(short, action = clap::ArgAction::Count, help = "Set verbosity level")]
    debug: u8,
    #[arg(short, long, help = "Don't log anything, only the exit code tells the outcome")]
    quiet: bool,
    #[arg(
        short,
        long,
        value_enum,
        help = "Validator(s) to use, may be repeated. Defaults to single-pass for addresses, all for corpora"
    )]
    strategy: Vec<Strategy>,
    #[arg(long, help = "Check the validators against a corpus file (json, yaml or toml)")]
    corpus: Option<String>,
    #[arg(long, conflicts_with = "corpus", help = "Check the validators against the embedded corpus")]
    builtin_corpus: bool,
    #[arg(help = "Address(es) to validate. Without any, a smoke check is run")]
    addresses: Vec<String>,
}

impl Cmd {
    pub fn main(&self) -> Result<(), RuntimeError> {
        // a logger may already be installed when driven from tests
        let _ = log::set_logger(&CONSOLE_LOGGER);
        log::set_max_level(if self.quiet {
            LevelFilter::Off
        } else {
            match self.debug {
                v if v >= 2 => LevelFilter::Debug,
                1 => LevelFilter::Info,
                _ => LevelFilter::Warn,
            }
        });

        if let Some(path) = &self.corpus {
            info!("loading corpus from {}", path);
            let corpus = Corpus::try_from(path.as_str())?;
            if corpus.cases.is_empty() {
                return Err(RuntimeError::EmptyCorpus(path.clone()));
            }
            self.check_corpus(&corpus)
        } else if self.builtin_corpus {
            self.check_corpus(&Corpus::from(CORPUS))
        } else if !self.addresses.is_empty() {
            self.validate_addresses()
        } else {
            self.smoke_check()
        }
    }

    fn selected(&self, fallback: &[Strategy]) -> Vec<Strategy> {
        if self.strategy.is_empty() {
            fallback.to_vec()
        } else {
            self.strategy.clone()
        }
    }

    pub fn smoke_check(&self) -> Result<(), RuntimeError> {
        for s in Strategy::ALL {
            debug!("smoke check: {} on {}", s, SMOKE_ADDRESS);
            if !s.validate(SMOKE_ADDRESS) {
                return Err(RuntimeError::SmokeCheckFailed(s, SMOKE_ADDRESS.to_owned()));
            }
        }
        if !self.quiet {
            println!("All passed, for more tests run `cargo test`");
        }
        Ok(())
    }

    pub fn validate_addresses(&self) -> Result<(), RuntimeError> {
        let strategies = self.selected(&[Strategy::default()]);
        let mut invalid = vec![];
        for a in &self.addresses {
            for s in &strategies {
                let valid = s.validate(a);
                if !self.quiet {
                    let verdict = if valid { "valid" } else { "invalid" };
                    if strategies.len() > 1 {
                        println!("{}: {} ({})", a, verdict, s);
                    } else {
                        println!("{}: {}", a, verdict);
                    }
                }
                if !valid && !invalid.contains(a) {
                    invalid.push(a.clone());
                }
            }
        }

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(RuntimeError::InvalidAddresses(invalid))
        }
    }

    pub fn check_corpus(&self, corpus: &Corpus) -> Result<(), RuntimeError> {
        let cases = corpus.as_cases();
        let mut mismatches = vec![];
        for s in self.selected(&Strategy::ALL) {
            let found = corpus::run(s, &cases);
            info!("{}: {}/{} cases agree", s, cases.len() - found.len(), cases.len());
            mismatches.extend(found);
        }

        if mismatches.is_empty() {
            if !self.quiet {
                println!("All {} cases passed", cases.len());
            }
            Ok(())
        } else {
            Err(RuntimeError::Mismatches(mismatches))
        }
    }
}
