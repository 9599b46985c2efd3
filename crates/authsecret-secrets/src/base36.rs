//! Base-36 rendering of integers (`0-9a-z`, lowercase).

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Render `n` in base 36.
pub fn encode_u64(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    // u64::MAX needs 13 base-36 digits
    let mut buf = [0u8; 13];
    let mut pos = buf.len();
    while n > 0 {
        pos -= 1;
        buf[pos] = DIGITS[(n % 36) as usize];
        n /= 36;
    }

    buf[pos..].iter().map(|&b| b as char).collect()
}

/// Parse a base-36 string. Case-insensitive; `None` on bad digits or overflow.
pub fn decode(s: &str) -> Option<u64> {
    if s.is_empty() {
        return None;
    }

    s.chars().try_fold(0u64, |acc, c| {
        let digit = c.to_digit(36)?;
        acc.checked_mul(36)?.checked_add(u64::from(digit))
    })
}
