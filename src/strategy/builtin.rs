use std::net::Ipv4Addr;

/// Defers to the standard library's [`Ipv4Addr`] parser.
pub fn validate(candidate: &str) -> bool {
    candidate.parse::<Ipv4Addr>().is_ok()
}
