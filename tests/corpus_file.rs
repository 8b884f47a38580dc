#![cfg(feature = "serde")]

use std::path::PathBuf;

use quad_check::corpus::{self, Corpus, Sample, CORPUS};
use quad_check::parse::ParseError;

const CORPUS_JSON: &str = r#"
{
    "cases": [
        { "address": "192.168.0.1", "valid": true },
        { "address": "192.168.01.1", "valid": false },
        { "address": "not.an.ip", "valid": false }
    ]
}
"#;

const CORPUS_BARE_JSON: &str = r#"
[
    { "address": "0.0.0.0", "valid": true },
    { "address": "0.0.0.", "valid": false }
]
"#;

const CORPUS_YAML: &str = r#"
cases:
  - address: 255.255.255.255
    valid: true
  - address: 256.256.256.256
    valid: false
"#;

const CORPUS_BARE_YAML: &str = r#"
- address: 8.8.8.8
  valid: true
"#;

const CORPUS_TOML: &str = r#"
[[cases]]
address = "10.0.0.1"
valid = true

[[cases]]
address = "192.168.0.0/24"
valid = false
"#;

fn write_tmp(name: &str, content: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!("quad_check_{}_{}", std::process::id(), name));
    std::fs::write(&p, content).unwrap();
    p
}

fn load(name: &str, content: &str) -> Corpus {
    let p = write_tmp(name, content);
    let c = Corpus::try_from(p.to_str().unwrap()).unwrap();
    std::fs::remove_file(p).unwrap();
    c
}

#[test]
fn json_corpus() {
    let c = load("corpus.json", CORPUS_JSON);
    assert_eq!(c.cases.len(), 3);
    assert_eq!(
        c.cases[0],
        Sample { address: "192.168.0.1".to_string(), valid: true }
    );
    assert!(corpus::run_all(&c.as_cases()).is_empty());
}

#[test]
fn bare_json_list() {
    let c = load("bare.json", CORPUS_BARE_JSON);
    assert_eq!(c.cases.len(), 2);
    assert!(corpus::run_all(&c.as_cases()).is_empty());
}

#[test]
fn yaml_corpus() {
    let c = load("corpus.yaml", CORPUS_YAML);
    assert_eq!(c.cases.len(), 2);
    assert!(c.cases[0].valid);
    assert!(corpus::run_all(&c.as_cases()).is_empty());

    let c = load("bare.yml", CORPUS_BARE_YAML);
    assert_eq!(c.cases.len(), 1);
    assert_eq!(c.cases[0].address, "8.8.8.8");
}

#[test]
fn toml_corpus() {
    let c = load("corpus.toml", CORPUS_TOML);
    assert_eq!(c.cases.len(), 2);
    assert!(corpus::run_all(&c.as_cases()).is_empty());
}

#[test]
fn embedded_corpus_survives_serialization() {
    let c = Corpus::from(CORPUS);
    let json = serde_json::to_string(&c).unwrap();
    let back: Corpus = serde_json::from_str(&json).unwrap();
    assert_eq!(back.as_cases(), CORPUS.to_vec());
}

#[test]
fn missing_file() {
    let p = std::env::temp_dir().join("quad_check_does_not_exist.json");
    match Corpus::try_from(p.to_str().unwrap()) {
        Err(ParseError::FileNotFound(f)) => assert_eq!(f.to_string(), p.to_str().unwrap()),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn directory_is_rejected() {
    let p = std::env::temp_dir();
    assert!(matches!(
        Corpus::try_from(p.to_str().unwrap()),
        Err(ParseError::PathIsDirectory(_))
    ));
}

#[test]
fn malformed_json() {
    let p = write_tmp("broken.json", "{ \"cases\": [ { \"address\": 1 } ] }");
    let r = Corpus::try_from(p.to_str().unwrap());
    std::fs::remove_file(&p).unwrap();
    assert!(matches!(r, Err(ParseError::SerdeJsonError(_))));
}
