use regex::Regex;

/// Four octets, each `25x`, `2[0-4]x`, `1xx`, `[1-9]x` or `x`, each followed
/// by an optional dot and a word boundary.
///
/// Digits are spelled `[0-9]` since `\d` also takes non-ASCII digits.
pub const PATTERN: &str = r"^((25[0-5]|(2[0-4]|1[0-9]|[1-9]|)[0-9])\.?\b){4}$";

lazy_static::lazy_static! {
    static ref IPV4_REGEX: Regex = Regex::new(PATTERN).expect("IPv4 pattern is a valid regex");
}

/// The compiled [`PATTERN`], built on first use and shared afterwards.
pub fn regex() -> &'static Regex {
    &IPV4_REGEX
}

pub fn validate(candidate: &str) -> bool {
    IPV4_REGEX.is_match(candidate)
}
