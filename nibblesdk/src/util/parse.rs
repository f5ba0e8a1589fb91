// Copyright (C) The Nibble Authors
// This file is part of Nibble.
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.


/// Best effort decimal parse. Every character other than `.` is treated as a
/// digit (its byte value minus `'0'`), and the last `.` decides how many of
/// them are fractional. Never fails: garbage in gives a deterministic number out.
pub fn str_to_float(s: &str) -> f64 {
  let bytes = s.as_bytes();
  let mut result = 0.0f64;
  let mut frac_digits = 0;

  for (i, &c) in bytes.iter().enumerate() {
    if c == b'.' {
      frac_digits = bytes.len() - i - 1;
    } else {
      result = result * 10.0 + (c as f64 - b'0' as f64);
    }
  }

  for _ in 0..frac_digits {
    result /= 10.0;
  }
  result
}

/// Parses the leading integer of `s` in `base`, `strtoul` style.
///
/// Leading whitespace and a single sign are accepted. Base 0 picks 16 for a
/// `0x` prefix, 8 for a leading `0` and 10 otherwise; base 16 also accepts
/// the `0x` prefix. Parsing stops at the first character that is not a digit
/// of the base. Returns `None` if no digit was consumed, the base is not 0 or
/// 2..=36, or the value overflows.
pub fn str_to_int(s: &str, base: u32) -> Option<i64> {
  if base == 1 || base > 36 {
    return None;
  }

  let s = s.trim_start_matches(|c: char| matches!(c, ' ' | '\t'..='\r'));
  let (negative, s) = match s.as_bytes().first() {
    Some(b'-') => (true, &s[1..]),
    Some(b'+') => (false, &s[1..]),
    _ => (false, s),
  };

  let has_hex_prefix = |s: &str| {
    let b = s.as_bytes();
    b.len() > 2 && b[0] == b'0' && (b[1] == b'x' || b[1] == b'X') && b[2].is_ascii_hexdigit()
  };
  let (base, digits) = match base {
    0 if has_hex_prefix(s) => (16, &s[2..]),
    0 if s.starts_with('0') => (8, s),
    0 => (10, s),
    16 if has_hex_prefix(s) => (16, &s[2..]),
    b => (b, s),
  };

  let mut value: i64 = 0;
  let mut consumed = 0;
  for c in digits.chars() {
    let d = match c.to_digit(base) {
      Some(d) => d,
      None => break,
    };
    value = value.checked_mul(base as i64)?.checked_add(d as i64)?;
    consumed += 1;
  }

  if consumed == 0 {
    return None;
  }
  Some(if negative { -value } else { value })
}

/// `str_to_int`, additionally requiring `min <= value <= max`.
pub fn str_to_int_range(s: &str, base: u32, min: i64, max: i64) -> Option<i64> {
  str_to_int(s, base).filter(|v| *v >= min && *v <= max)
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn float_plain_and_fractional() {
    assert_eq!(str_to_float("12"), 12.0);
    assert_eq!(str_to_float("3.25"), 3.25);
    assert_eq!(str_to_float("0.5"), 0.5);
    assert_eq!(str_to_float(""), 0.0);
  }

  #[test]
  fn float_last_dot_wins() {
    assert_eq!(str_to_float("1.2.5"), 12.5);
    assert_eq!(str_to_float("7."), 7.0);
  }

  #[test]
  fn float_garbage_is_deterministic() {
    // 'a' is 49 past '0'.
    assert_eq!(str_to_float("a"), 49.0);
    assert_eq!(str_to_float("1a"), str_to_float("1a"));
  }

  #[test]
  fn int_decimal() {
    assert_eq!(str_to_int("42", 10), Some(42));
    assert_eq!(str_to_int("  -17", 10), Some(-17));
    assert_eq!(str_to_int("+8", 10), Some(8));
    assert_eq!(str_to_int("12abc", 10), Some(12));
    assert_eq!(str_to_int("\x0b\x0c\r\n 7", 10), Some(7));
  }

  #[test]
  fn int_hex_and_octal() {
    assert_eq!(str_to_int("0x1f", 16), Some(31));
    assert_eq!(str_to_int("1F", 16), Some(31));
    assert_eq!(str_to_int("0x1f", 0), Some(31));
    assert_eq!(str_to_int("017", 0), Some(15));
    assert_eq!(str_to_int("0", 0), Some(0));
    assert_eq!(str_to_int("101", 2), Some(5));
    assert_eq!(str_to_int("zz", 36), Some(1295));
  }

  #[test]
  fn int_bare_hex_prefix_parses_zero() {
    assert_eq!(str_to_int("0x", 16), Some(0));
    assert_eq!(str_to_int("0xg", 0), Some(0));
  }

  #[test]
  fn int_failures() {
    assert_eq!(str_to_int("zz", 10), None);
    assert_eq!(str_to_int("", 10), None);
    assert_eq!(str_to_int("-", 10), None);
    assert_eq!(str_to_int("10", 1), None);
    assert_eq!(str_to_int("10", 37), None);
    assert_eq!(str_to_int("99999999999999999999", 10), None);
  }

  #[test]
  fn int_range() {
    assert_eq!(str_to_int_range("42", 10, 0, 10), None);
    assert_eq!(str_to_int_range("10", 10, 0, 10), Some(10));
    assert_eq!(str_to_int_range("0", 10, 0, 10), Some(0));
    assert_eq!(str_to_int_range("-1", 10, 0, 10), None);
    assert_eq!(str_to_int_range("x", 10, 0, 10), None);
  }
}
