//! Numeric pattern matchers: `INT_NUM` and `FLOAT_NUM` (§4.C).
//!
//! Both patterns forbid leading zeros (except the literal `0`); `FLOAT_NUM`
//! additionally forbids a trailing zero in the fraction (except the literal
//! `0`). Neither quirk is "fixed" here: `SPEC_FULL.md` §9 calls out `0`
//! alone matching as a length-1 `INT_NUM` and `00` scanning as two of them,
//! and that is exactly what falling through to a shorter match gives us.

/// `(nonZero digit* | 0)` — also the building block for a float's
/// exponent digits.
fn match_digits_no_leading_zero(s: &[u8]) -> usize {
    match s.first() {
        Some(b'0') => 1,
        Some(c) if c.is_ascii_digit() => {
            let mut n = 1;
            while s.get(n).is_some_and(u8::is_ascii_digit) {
                n += 1;
            }
            n
        }
        _ => 0,
    }
}

/// Prefix-anchored match for `INT_NUM`: `[1-9][0-9]*` or the single digit
/// `0`. Returns 0 if the slice does not start with a digit at all.
pub fn match_int(s: &[u8]) -> usize {
    match_digits_no_leading_zero(s)
}

/// Prefix-anchored match for `FLOAT_NUM`:
/// `(nonZero digit* | 0) . (digit* nonZero | 0) (e (+|-)? (nonZero digit* | 0))?`
pub fn match_float(s: &[u8]) -> usize {
    let int_len = match_digits_no_leading_zero(s);
    if int_len == 0 || s.get(int_len) != Some(&b'.') {
        return 0;
    }
    let frac_start = int_len + 1;
    let mut frac_end = frac_start;
    while s.get(frac_end).is_some_and(u8::is_ascii_digit) {
        frac_end += 1;
    }
    let frac = &s[frac_start..frac_end];
    if frac.is_empty() || !(frac == b"0" || *frac.last().unwrap() != b'0') {
        return 0;
    }

    let mut end = frac_end;
    if s.get(end) == Some(&b'e') {
        let mut exp_digits_start = end + 1;
        if matches!(s.get(exp_digits_start), Some(b'+') | Some(b'-')) {
            exp_digits_start += 1;
        }
        let exp_len = match_digits_no_leading_zero(&s[exp_digits_start..]);
        if exp_len > 0 {
            end = exp_digits_start + exp_len;
        }
        // A malformed exponent (no digits after `e`/sign) is not consumed;
        // the match simply ends before the `e`.
    }
    end
}
