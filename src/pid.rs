//! Human-order PID sort key.
//!
//! Lexicographic ordering puts "P10" before "P2". [`pid_key`] extracts the
//! first run of decimal digits (any script) and compares it as an integer
//! instead:
//!
//! 1. PIDs containing digits sort first, ascending by that number.
//! 2. PIDs without digits sort after them, alphabetically.
//!
//! The key is the last tie-breaker in every algorithm and the ordering of
//! per-process output rows.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("static digit pattern"));

/// Sort key derived from a PID string.
///
/// Variant order matters: every `Numeric` key sorts before every `Named` key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PidKey {
    /// PID with a digit run; ordered by value.
    Numeric(Digits),
    /// PID without digits; ordered alphabetically.
    Named(String),
}

/// Arbitrary-length non-negative integer written in decimal.
///
/// Stored without leading zeros so that ordering by `(len, text)` equals
/// numeric ordering, with no overflow for long digit runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digits(String);

impl Digits {
    fn new(raw: &str) -> Self {
        let ascii: String = raw
            .chars()
            .filter_map(|c| char::from_digit(digit_value(c), 10))
            .collect();
        let trimmed = ascii.trim_start_matches('0');
        if trimmed.is_empty() {
            Self("0".to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Decimal text without leading zeros.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Numeric value of a Unicode decimal digit.
///
/// Unicode encodes each script's digits as a contiguous 0..9 run, and every
/// maximal run of decimal digits starts at a zero, so the value is the
/// offset from the start of the run modulo 10.
fn digit_value(c: char) -> u32 {
    if let Some(d) = c.to_digit(10) {
        return d;
    }
    let mut zero = u32::from(c);
    while let Some(prev) = zero.checked_sub(1).and_then(char::from_u32) {
        if !is_digit(prev) {
            break;
        }
        zero -= 1;
    }
    (u32::from(c) - zero) % 10
}

fn is_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DIGITS.is_match(c.encode_utf8(&mut buf))
}

/// Computes the sort key for `pid`.
pub fn pid_key(pid: &str) -> PidKey {
    match DIGITS.find(pid) {
        Some(m) => PidKey::Numeric(Digits::new(m.as_str())),
        None => PidKey::Named(pid.to_string()),
    }
}

/// Compares two PIDs in human order.
pub fn compare_pids(a: &str, b: &str) -> Ordering {
    pid_key(a).cmp(&pid_key(b))
}
