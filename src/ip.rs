use std::error::Error;
use std::fmt::{Display, Formatter};

/// Length of the shortest valid address, `0.0.0.0`.
pub const MIN_LEN: usize = 7;
/// Length of the longest valid address, `255.255.255.255`.
pub const MAX_LEN: usize = 15;

const OCTETS: u8 = 4;
const MAX_DIGITS: u8 = 3;

/// The only way an address can fail: no reason is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidIp;

impl Display for InvalidIp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid IP")
    }
}

impl Error for InvalidIp {}

/// Returns whether `candidate` is an IPv4 dotted-quad address.
///
/// Every octet is one to three decimal digits in `0..=255`, a leading zero is
/// only allowed for the octet `0` itself, and nothing but digits and the
/// three separating dots may appear.
///
/// ```
/// assert!(quad_check::validate("192.168.0.1"));
/// assert!(!quad_check::validate("192.168.01.1"));
/// ```
#[inline]
pub fn validate(candidate: &str) -> bool {
    check(candidate).is_ok()
}

/// Same decision as [`validate`], in `Result` form.
///
/// The input is scanned once, front to back, without allocating and without
/// splitting it into substrings; the first violation ends the scan.
pub fn check(candidate: &str) -> Result<(), InvalidIp> {
    let bytes = candidate.as_bytes();
    let end = bytes.len();
    if !(MIN_LEN..=MAX_LEN).contains(&end) {
        return Err(InvalidIp);
    }

    let mut octets: u8 = 0;
    let mut octet: u16 = 0;
    let mut digits: u8 = 0;

    for i in 0..=end {
        if i == end || bytes[i] == b'.' {
            if !(1..=MAX_DIGITS).contains(&digits) || octet > 255 {
                return Err(InvalidIp);
            }
            octets += 1;
            if i == end {
                break;
            }
            // a dot after the fourth octet opens a fifth one
            if octets == OCTETS {
                return Err(InvalidIp);
            }
            octet = 0;
            digits = 0;
            continue;
        }

        let b = bytes[i];
        if !b.is_ascii_digit() {
            return Err(InvalidIp);
        }

        // `0` is an octet on its own, `01` and `007` are not
        if digits == 0 && b == b'0' && i + 1 < end && bytes[i + 1] != b'.' {
            return Err(InvalidIp);
        }

        octet = octet * 10 + u16::from(b - b'0');
        digits += 1;
        if digits > MAX_DIGITS {
            return Err(InvalidIp);
        }
    }

    if octets != OCTETS {
        return Err(InvalidIp);
    }
    Ok(())
}
