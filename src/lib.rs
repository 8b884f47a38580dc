//! IPv4 dotted-quad validation.
//!
//! [`validate`] decides in a single forward scan, without allocating, whether a
//! string is an IPv4 address. The [`strategy`] module holds three reference
//! validators (split based, `std::net` and a regular expression) that reach the
//! same verdicts, and [`corpus`] the shared cases they are all checked against.

pub mod corpus;
pub mod ip;
pub mod logger;
pub mod strategy;
#[cfg(feature = "serde")]
pub mod parse;
#[cfg(feature = "cmd")]
pub mod cmd;

pub use ip::{check, validate, InvalidIp};
pub use strategy::{Strategy, Validator};
