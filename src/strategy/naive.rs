use crate::ip::{MAX_LEN, MIN_LEN};

/// Split-based reference parser.
///
/// Cuts the address on every dot and checks each piece on its own. It reaches
/// the same verdicts as [`crate::ip::validate`] but collects the pieces into a
/// vector first, which is exactly the overhead the single-pass scan avoids.
pub fn validate(candidate: &str) -> bool {
    if candidate.len() < MIN_LEN || candidate.len() > MAX_LEN {
        return false;
    }

    let octets: Vec<&str> = candidate.split('.').collect();
    if octets.len() != 4 {
        return false;
    }

    octets.iter().all(|octet| valid_octet(octet))
}

fn valid_octet(octet: &str) -> bool {
    if octet.is_empty() || octet.len() > 3 {
        return false;
    }
    // `str::parse` takes a leading `+`, so digits are checked up front
    if !octet.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if octet.len() > 1 && octet.starts_with('0') {
        return false;
    }
    match octet.parse::<u16>() {
        Ok(n) => n <= 255,
        Err(_) => false,
    }
}
