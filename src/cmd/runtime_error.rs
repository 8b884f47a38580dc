use std::error::Error;
use std::fmt::{Display, Formatter};
use log::error;

use crate::corpus::Mismatch;
use crate::parse::ParseError;
use crate::strategy::Strategy;

#[derive(Debug)]
pub enum RuntimeError {
    NoSuchFile(String),
    PathIsDirectory(String),
    IOError(String),
    ParseError(String),
    EmptyCorpus(String),
    SmokeCheckFailed(Strategy, String),
    InvalidAddresses(Vec<String>),
    Mismatches(Vec<Mismatch>),
}

impl RuntimeError {
    pub fn print_error(&self) {
        match self {
            RuntimeError::NoSuchFile(p) => error!("no such file or directory: {}", p),
            RuntimeError::PathIsDirectory(p) => error!("specified path is a directory: {}", p),
            RuntimeError::IOError(e) => error!("error opening/reading file: {}", e),
            RuntimeError::ParseError(e) => error!("parse error: {}", e),
            RuntimeError::EmptyCorpus(p) => error!("corpus has no cases: {}", p),
            RuntimeError::SmokeCheckFailed(s, ip) => error!("Failed: {} rejected {}", s, ip),
            RuntimeError::InvalidAddresses(a) => error!("invalid address(es): {}", a.join(" ")),
            RuntimeError::Mismatches(m) => {
                error!("{} mismatch(es) against the corpus:", m.len());
                for i in m {
                    error!(
                        "\t{}: {:?} should be {}",
                        i.strategy,
                        i.address,
                        if i.expected { "valid" } else { "invalid" }
                    );
                }
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            RuntimeError::InvalidAddresses(..) => 1,
            RuntimeError::NoSuchFile(..) => 2,
            RuntimeError::IOError(..) => 3,
            RuntimeError::ParseError(..) => 4,
            RuntimeError::EmptyCorpus(..) => 5,
            RuntimeError::Mismatches(..) => 6,
            RuntimeError::SmokeCheckFailed(..) => 7,
            RuntimeError::PathIsDirectory(..) => 8,
        }
    }
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for RuntimeError {}

impl From<ParseError> for RuntimeError {
    fn from(value: ParseError) -> Self {
        match value {
            ParseError::IOError(e) => RuntimeError::IOError(e.to_string()),
            ParseError::SerdeJsonError(e) => RuntimeError::ParseError(e.to_string()),
            ParseError::SerdeTomlError(e) => RuntimeError::ParseError(e.to_string()),
            ParseError::SerdeYamlError(e) => RuntimeError::ParseError(e.to_string()),
            ParseError::FileNotFound(p) => RuntimeError::NoSuchFile(p.to_string()),
            ParseError::PathIsDirectory(p) => RuntimeError::PathIsDirectory(p.to_string()),
        }
    }
}
