//! Fixed-point amount math on wei-denominated decimal strings.
//!
//! Amounts cross the relay boundary as decimal strings. Internally all
//! arithmetic is u128 to avoid floating-point errors; the smallest unit is
//! 1 wei and the token's `decimals` defines the human-readable scale.

use crate::error::DripError;

/// Scale a human-readable decimal string by `10^decimals` into a raw
/// (wei-denominated) decimal string.
///
/// Accepts an optional fraction part with at most `decimals` digits;
/// deeper precision is rejected rather than rounded.
///
/// `scale_to_raw("5", 18)` → `"5000000000000000000"`.
pub fn scale_to_raw(claimable: &str, decimals: u8) -> Result<String, DripError> {
    let (int_part, frac_part) = split_decimal(claimable)?;

    if frac_part.len() > decimals as usize {
        return Err(DripError::PrecisionExceeded {
            digits: frac_part.len(),
            decimals,
        });
    }

    let int_val: u128 = if int_part.is_empty() {
        0
    } else {
        int_part
            .parse()
            .map_err(|_| DripError::AmountOverflow)?
    };
    let frac_val: u128 = if frac_part.is_empty() {
        0
    } else {
        frac_part
            .parse()
            .map_err(|_| DripError::AmountOverflow)?
    };

    let scale = pow10(decimals as u32).ok_or(DripError::AmountOverflow)?;
    // frac digits occupy the high end of the fraction field
    let frac_scale =
        pow10(decimals as u32 - frac_part.len() as u32).ok_or(DripError::AmountOverflow)?;

    let raw = int_val
        .checked_mul(scale)
        .and_then(|v| frac_val.checked_mul(frac_scale).and_then(|f| v.checked_add(f)))
        .ok_or(DripError::AmountOverflow)?;

    Ok(raw.to_string())
}

/// Render a raw (wei) amount as a human-readable decimal string.
///
/// Keeps at most `significant` fraction digits (truncated, not rounded)
/// and trims trailing zeros, so `format_balance(1_230_000, 6, 6)` is
/// `"1.23"` and whole amounts render without a fraction.
pub fn format_balance(raw: u128, decimals: u8, significant: u8) -> String {
    let digits = raw.to_string();
    let d = decimals as usize;

    let padded = if digits.len() <= d {
        format!("{}{}", "0".repeat(d + 1 - digits.len()), digits)
    } else {
        digits
    };
    let split = padded.len() - d;
    let int_part = &padded[..split];
    let frac_part = &padded[split..];

    let kept = &frac_part[..frac_part.len().min(significant as usize)];
    let trimmed = kept.trim_end_matches('0');
    if trimmed.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{trimmed}")
    }
}

/// Two-decimal-place display of a human-readable decimal string, truncated.
///
/// Malformed input falls back to `"0.00"` — the card never surfaces a
/// parse failure to the user.
pub fn format_fixed2(claimable: &str) -> String {
    let Ok((int_part, frac_part)) = split_decimal(claimable) else {
        return "0.00".to_string();
    };

    let int_trimmed = int_part.trim_start_matches('0');
    let int_display = if int_trimmed.is_empty() { "0" } else { int_trimmed };

    let mut frac2 = String::with_capacity(2);
    frac2.push_str(&frac_part[..frac_part.len().min(2)]);
    while frac2.len() < 2 {
        frac2.push('0');
    }

    format!("{int_display}.{frac2}")
}

/// Split a decimal string into (integer digits, fraction digits),
/// validating that both halves are pure ASCII digits and that at least
/// one digit is present.
fn split_decimal(s: &str) -> Result<(&str, &str), DripError> {
    let s = s.trim();
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) || (int_part.is_empty() && frac_part.is_empty())
    {
        return Err(DripError::InvalidAmount(s.to_string()));
    }
    Ok((int_part, frac_part))
}

fn pow10(exp: u32) -> Option<u128> {
    10u128.checked_pow(exp)
}
