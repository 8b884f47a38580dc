use crate::strategy::Strategy;
#[cfg(not(feature = "log"))]
use crate::debug;
#[cfg(feature = "log")]
use log::debug;
#[cfg(feature = "serde")]
use {
    crate::parse::{DirPath, NotFoundPath, ParseError},
    serde::{Deserialize, Serialize},
    std::fs::read_to_string,
    std::path::Path,
};

/// One address and the verdict every strategy must reach on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case<'a> {
    pub address: &'a str,
    pub valid: bool,
}

const fn case(address: &'static str, valid: bool) -> Case<'static> {
    Case { address, valid }
}

/// Shared corpus every strategy is checked against.
pub static CORPUS: &[Case<'static>] = &[
    // well-formed
    case("192.168.0.1", true),
    case("10.0.0.1", true),
    case("172.16.0.1", true),
    case("8.8.8.8", true),
    case("1.1.1.1", true),
    case("255.255.255.255", true),
    case("127.0.0.1", true),
    case("192.168.1.255", true),
    case("203.0.113.0", true),
    case("198.51.100.14", true),
    case("192.0.2.0", true),
    case("203.0.113.255", true),
    case("0.0.0.0", true),
    case("192.168.100.100", true),
    case("10.10.10.10", true),
    // malformed numbers and separators
    case("256.256.256.256", false),
    case("123.456.789.0", false),
    case("192.168.1.256", false),
    case("999.999.999.999", false),
    case("300.1.1.1", false),
    case("192.168.1", false),
    case("192.168.0.0.1", false),
    case("192.168.-1.1", false),
    case("123..123.123", false),
    case("123.123.123", false),
    case("0.0.0.256", false),
    case("255.255.255.2555", false),
    case("192.168.1.1 extra", false),
    case("192.168.0.-5", false),
    case("10.0.0.0.0", false),
    case("8.8.8", false),
    case("192.168.0.0/24", false),
    case("123.123..123", false),
    case("999.888.777.666", false),
    case("300.300.300.300", false),
    case("1111.222.333.444", false),
    case("10.0.0.256", false),
    case("255.255.255.256", false),
    case("127.0.0.256", false),
    case("192.0.2.999", false),
    case("192.168.1.1.1", false),
    case("1234.567.89.0", false),
    case("1.1.1.-1", false),
    case("192.168.0.", false),
    case("0.0.0.", false),
    case("192.168.1000.1000", false),
    // not an address at all
    case("not.an.ip", false),
    case("abcd", false),
    case("192.168.one.one", false),
    case("IP_ADDRESS", false),
    case("localhost", false),
    case("abc.def.ghi.jkl", false),
    case("123.456.78.ab", false),
    case("abc.def.ghi", false),
    case("example.com", false),
    case("some_random_string", false),
    case("192_168_1_1", false),
    case("abc@xyz.com", false),
    case("192-168-1-1", false),
    case("255:255:255:255", false),
    case("192,168,1,1", false),
    case("just_a_string", false),
    case("another_bad_input", false),
    case("string.with.dots", false),
    case("123...456", false),
    case("1.2.3.four", false),
    case("123.123.123.1234", false),
    case("0.0.0.0.0", false),
    case("255-255-255-255", false),
    case("no-ip-here", false),
    case("192.168", false),
    case("some.invalid.ip", false),
    case("this.is.not.ip", false),
    case("more.random.text", false),
    case("not_a_valid_ip", false),
    case("plain-text", false),
    case("some string", false),
    case("yet_another_string", false),
    case("localhost.localdomain", false),
    case("example.ip", false),
    case("fake-ip-123", false),
    case("string@domain", false),
    case("not-really-an-ip", false),
    case("192168011", false),
    case("192.168.1.1.1.1", false),
    case("127.0.0.1 extra", false),
    case("0..0.0", false),
    case("1..1.1.1", false),
    case(".123.123.123", false),
    case("192.168.000.001", false),
];

/// Inputs the benchmarks time each strategy on.
pub static BENCH_INPUTS: [(&str, &str); 4] = [
    ("default_gateway", "192.168.0.1"),
    (
        "big_string",
        "aslduasodusadiusoaiudowaiuoiuasdlsakjdlsakhdaklsjhdajsdkajsgdkasdk",
    ),
    ("valid_length_number", "000000000"),
    ("max_valid", "255.255.255.255"),
];

/// A corpus entry on which a strategy disagreed with the expected verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub strategy: Strategy,
    pub address: String,
    pub expected: bool,
}

/// Runs `strategy` over `cases`, collecting every disagreement.
pub fn run(strategy: Strategy, cases: &[Case<'_>]) -> Vec<Mismatch> {
    let validate = strategy.validator();
    cases
        .iter()
        .filter(|c| validate(c.address) != c.valid)
        .map(|c| {
            debug!(
                "{}: expected {:?} to be {}",
                strategy,
                c.address,
                if c.valid { "valid" } else { "invalid" }
            );
            Mismatch {
                strategy,
                address: c.address.to_owned(),
                expected: c.valid,
            }
        })
        .collect()
}

pub fn run_all(cases: &[Case<'_>]) -> Vec<Mismatch> {
    Strategy::ALL
        .iter()
        .flat_map(|s| run(*s, cases))
        .collect()
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub address: String,
    pub valid: bool,
}

impl Sample {
    pub fn as_case(&self) -> Case<'_> {
        Case {
            address: &self.address,
            valid: self.valid,
        }
    }
}

/// Owned corpus, usually read from a file.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    #[cfg_attr(feature = "serde", serde(default))]
    pub cases: Vec<Sample>,
}

impl Corpus {
    pub fn as_cases(&self) -> Vec<Case<'_>> {
        self.cases.iter().map(Sample::as_case).collect()
    }
}

impl From<&[Case<'_>]> for Corpus {
    fn from(value: &[Case<'_>]) -> Self {
        Corpus {
            cases: value
                .iter()
                .map(|c| Sample {
                    address: c.address.to_owned(),
                    valid: c.valid,
                })
                .collect(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'a> TryFrom<&'a str> for Corpus {
    type Error = ParseError;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        let path = Path::new(value);
        if !path.exists() {
            return Err(NotFoundPath::from(value.to_owned()).into());
        }
        if path.is_dir() {
            return Err(DirPath::from(value.to_owned()).into());
        }

        let content = read_to_string(path)?;
        if value.ends_with(".yml") || value.ends_with(".yaml") {
            match serde_yml::from_str(&content) {
                Ok(c) => Ok(c),
                Err(e) => match serde_yml::from_str::<Vec<Sample>>(&content) {
                    Ok(cases) => Ok(Corpus { cases }),
                    Err(_) => Err(e.into()),
                },
            }
        } else if value.ends_with(".toml") {
            Ok(toml::from_str(&content)?)
        } else {
            match serde_json::from_str(&content) {
                Ok(c) => Ok(c),
                // a bare list of samples is accepted as well
                Err(e) => match serde_json::from_str::<Vec<Sample>>(&content) {
                    Ok(cases) => Ok(Corpus { cases }),
                    Err(_) => Err(e.into()),
                },
            }
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<String> for Corpus {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}
