use crate::DomainError;

/// Text fields count as supplied only when non-empty.
pub fn is_present(value: &str) -> bool {
    !value.is_empty()
}

/// Lenient port parsing: skips leading whitespace, accepts a sign, then
/// takes the longest run of leading decimal digits. Trailing garbage is
/// ignored (`"25575abc"` parses as 25575).
pub fn parse_port_text(raw: &str) -> Result<u16, DomainError> {
    let invalid = || DomainError::InvalidPort(raw.to_string());

    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'+') => (false, &trimmed[1..]),
        Some(b'-') => (true, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 || negative {
        return Err(invalid());
    }

    let value: u64 = unsigned[..digits_len].parse().map_err(|_| invalid())?;
    port_in_range(value).ok_or_else(invalid)
}

pub fn parse_port_number(raw: f64) -> Result<u16, DomainError> {
    let invalid = || DomainError::InvalidPort(raw.to_string());

    if !raw.is_finite() || raw < 0.0 {
        return Err(invalid());
    }
    port_in_range(raw.trunc() as u64).ok_or_else(invalid)
}

fn port_in_range(value: u64) -> Option<u16> {
    match u16::try_from(value) {
        Ok(0) | Err(_) => None,
        Ok(port) => Some(port),
    }
}
