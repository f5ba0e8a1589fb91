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

//! Hex string to byte buffer decoding.
//!
//! The decoder is deliberately permissive: any byte that is not an ASCII hex
//! digit decodes to the nibble `0x0`. Use [`is_hex`] first if rejection is
//! required.

use std::error::Error;
use std::fmt::{Display, Formatter, Write};


/// Maps every byte value to its nibble. Non hex digits map to `0x0`.
pub static NIBBLE_TABLE: [u8; 256] = {
  let mut table = [0u8; 256];
  let mut i = 0;
  while i < 256 {
    let c = i as u8;
    table[i] = match c {
      b'0'..=b'9' => c - b'0',
      b'a'..=b'f' => c - b'a' + 10,
      b'A'..=b'F' => c - b'A' + 10,
      _ => 0x0,
    };
    i += 1;
  }
  table
};

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
  /// The decoded output would not fit. Nothing was written.
  BufferTooSmall { needed: usize, capacity: usize },
}

impl Display for HexError {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      HexError::BufferTooSmall { needed, capacity } =>
        write!(f, "decoded size {} exceeds buffer capacity {}", needed, capacity),
    }
  }
}

impl Error for HexError {}


#[inline]
pub fn nibble(c: u8) -> u8 {
  NIBBLE_TABLE[c as usize]
}

/// Number of bytes `decode_hex` produces for an input of `input_len` characters.
#[inline]
pub const fn decoded_len(input_len: usize) -> usize {
  input_len / 2 + (input_len & 1)
}

/// Decodes `input` into the front of `output`, returning the number of bytes written.
///
/// The capacity is `output.len()`. If the decoded size does not fit,
/// `HexError::BufferTooSmall` is returned and `output` is left untouched.
///
/// An odd-length input is decoded as if it had one implicit leading `0`: the
/// first character alone forms the low nibble of the first byte, and the
/// remaining characters are decoded in pairs.
pub fn decode_hex<T: AsRef<[u8]> + ?Sized>(input: &T, output: &mut [u8]) -> Result<usize, HexError> {
  let input = input.as_ref();
  let needed = decoded_len(input.len());
  if needed > output.len() {
    return Err(HexError::BufferTooSmall { needed, capacity: output.len() });
  }

  let (head, pairs) = input.split_at(input.len() & 1);
  let (first, rest) = output[..needed].split_at_mut(head.len());
  if let (Some(&c), Some(b)) = (head.first(), first.first_mut()) {
    *b = nibble(c);
  }
  for (pair, b) in pairs.chunks_exact(2).zip(rest.iter_mut()) {
    *b = (nibble(pair[0]) << 4) | nibble(pair[1]);
  }

  Ok(needed)
}

/// Allocating variant of [`decode_hex`]. The buffer is always large enough.
pub fn decode_hex_to_vec<T: AsRef<[u8]> + ?Sized>(input: &T) -> Vec<u8> {
  let input = input.as_ref();
  let mut out = vec![0u8; decoded_len(input.len())];
  // sized by decoded_len, cannot fail.
  let _ = decode_hex(input, &mut out);
  out
}

/// Canonical lowercase hex encoding.
pub fn encode_hex(bytes: &[u8]) -> String {
  let mut s = String::with_capacity(bytes.len() * 2);
  for &b in bytes {
    s.push(HEX_CHARS[(b >> 4) as usize] as char);
    s.push(HEX_CHARS[(b & 0x0f) as usize] as char);
  }
  s
}

/// Appends the canonical encoding of `bytes` to `out`.
pub fn write_hex<W: Write>(out: &mut W, bytes: &[u8]) -> std::fmt::Result {
  for &b in bytes {
    write!(out, "{:02x}", b)?;
  }
  Ok(())
}

/// True if every character of `input` is an ASCII hex digit.
pub fn is_hex<T: AsRef<[u8]> + ?Sized>(input: &T) -> bool {
  input.as_ref().iter().all(|c| c.is_ascii_hexdigit())
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn table_covers_all_hex_digits() {
    for (i, c) in "0123456789abcdef".bytes().enumerate() {
      assert_eq!(nibble(c), i as u8);
    }
    for (i, c) in "ABCDEF".bytes().enumerate() {
      assert_eq!(nibble(c), 10 + i as u8);
    }
    let digits = NIBBLE_TABLE.iter().enumerate()
      .filter(|(i, _)| (*i as u8).is_ascii_hexdigit())
      .count();
    assert_eq!(digits, 22);
    assert!(NIBBLE_TABLE.iter().enumerate()
      .filter(|(i, _)| !(*i as u8).is_ascii_hexdigit())
      .all(|(_, v)| *v == 0));
  }

  #[test]
  fn decode_empty() {
    let mut out = [0u8; 0];
    assert_eq!(decode_hex("", &mut out), Ok(0));
  }

  #[test]
  fn decode_single_char() {
    let mut out = [0xffu8; 1];
    assert_eq!(decode_hex("A", &mut out), Ok(1));
    assert_eq!(out, [0x0a]);
  }

  #[test]
  fn decode_even_length() {
    let mut out = [0u8; 2];
    assert_eq!(decode_hex("1A2B", &mut out), Ok(2));
    assert_eq!(out, [0x1a, 0x2b]);
  }

  #[test]
  fn decode_odd_length_pads_first_character() {
    let mut out = [0u8; 2];
    assert_eq!(decode_hex("1A2", &mut out), Ok(2));
    assert_eq!(out, [0x01, 0xa2]);

    let mut out = [0u8; 3];
    assert_eq!(decode_hex("fACe0", &mut out), Ok(3));
    assert_eq!(out, [0x0f, 0xac, 0xe0]);
  }

  #[test]
  fn decode_capacity_boundary() {
    let mut out = [0x55u8; 1];
    assert_eq!(decode_hex("1A2", &mut out), Err(HexError::BufferTooSmall { needed: 2, capacity: 1 }));
    assert_eq!(out, [0x55]);

    let mut out = [0x55u8; 2];
    assert_eq!(decode_hex("1A2B", &mut out), Ok(2));
    let mut out = [0x55u8; 1];
    assert!(decode_hex("1A2B", &mut out).is_err());
    assert_eq!(out, [0x55]);
  }

  #[test]
  fn decode_leaves_tail_of_larger_buffer() {
    let mut out = [0xeeu8; 4];
    assert_eq!(decode_hex("beef", &mut out), Ok(2));
    assert_eq!(out, [0xbe, 0xef, 0xee, 0xee]);
  }

  #[test]
  fn decode_invalid_characters_as_zero() {
    let mut out = [0u8; 1];
    assert_eq!(decode_hex("G1", &mut out), Ok(1));
    assert_eq!(out, [0x01]);

    let mut out = [0u8; 2];
    assert_eq!(decode_hex("z9 x", &mut out), Ok(2));
    assert_eq!(out, [0x09, 0x00]);
  }

  #[test]
  fn decode_matches_nibble_formula() {
    let s = "0123456789abcdefABCDEF";
    let bytes = decode_hex_to_vec(s);
    assert_eq!(bytes.len(), s.len() / 2);
    let raw = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
      assert_eq!(*b, (nibble(raw[2 * i]) << 4) | nibble(raw[2 * i + 1]));
    }

    let s = "7deadbeef";
    let bytes = decode_hex_to_vec(s);
    assert_eq!(bytes.len(), 5);
    assert_eq!(bytes[0], 0x07);
    let raw = s.as_bytes();
    for i in 1..bytes.len() {
      assert_eq!(bytes[i], (nibble(raw[2 * i - 1]) << 4) | nibble(raw[2 * i]));
    }
  }

  #[test]
  fn decoded_len_rounds_up() {
    assert_eq!(decoded_len(0), 0);
    assert_eq!(decoded_len(1), 1);
    assert_eq!(decoded_len(2), 1);
    assert_eq!(decoded_len(7), 4);
  }

  #[test]
  fn canonical_round_trip() {
    let s = "00ff10a7c3";
    let bytes = decode_hex_to_vec(s);
    assert_eq!(bytes, vec![0x00, 0xff, 0x10, 0xa7, 0xc3]);
    assert_eq!(encode_hex(&bytes), s);
    assert_eq!(decode_hex_to_vec(&encode_hex(&bytes)), bytes);

    let mut w = String::new();
    write_hex(&mut w, &bytes).unwrap();
    assert_eq!(w, s);
  }

  #[test]
  fn strict_validation_is_separate() {
    assert!(is_hex("09afAF"));
    assert!(is_hex(""));
    assert!(!is_hex("G1"));
    assert!(!is_hex("0x10"));
  }

  #[test]
  fn error_display() {
    let e = HexError::BufferTooSmall { needed: 3, capacity: 2 };
    assert_eq!(e.to_string(), "decoded size 3 exceeds buffer capacity 2");
  }
}
