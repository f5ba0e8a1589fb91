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

//! Human readable bit and byte dumps.
//!
//! A space is written before every `group`-th unit and a newline before every
//! `line`-th unit (the very first unit included), and the dump always ends
//! with a newline.

use std::fmt::Write;
use serde::Serialize;

use super::bits::get_bit_r;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DumpLayout {
  pub group: usize,
  pub line: usize
}

impl DumpLayout {
  pub const BITS: DumpLayout = DumpLayout { group: 8, line: 64 };
  pub const BYTES: DumpLayout = DumpLayout { group: 4, line: 32 };

  fn separators<W: Write>(&self, out: &mut W, i: usize) -> std::fmt::Result {
    if self.group != 0 && i % self.group == 0 {
      out.write_char(' ')?;
    }
    if self.line != 0 && i % self.line == 0 {
      out.write_char('\n')?;
    }
    Ok(())
  }
}


/// Writes `count` bits starting at bit `start_pos`, MSB first within each byte.
///
/// # Panics
///
/// If any of the bits lies past the end of `buf`.
pub fn write_bits<W: Write>(out: &mut W, buf: &[u8], count: usize, start_pos: usize, layout: DumpLayout) -> std::fmt::Result {
  for i in 0..count {
    layout.separators(out, i)?;
    out.write_char(if get_bit_r(buf, start_pos + i) == 1 { '1' } else { '0' })?;
  }
  out.write_char('\n')
}

/// Writes `count` bytes starting at byte `start_pos` as two lowercase hex digits each.
///
/// # Panics
///
/// If `start_pos..start_pos + count` is not within `buf`, like slice indexing.
pub fn write_bytes<W: Write>(out: &mut W, buf: &[u8], count: usize, start_pos: usize, layout: DumpLayout) -> std::fmt::Result {
  for (i, b) in buf[start_pos..start_pos + count].iter().enumerate() {
    layout.separators(out, i)?;
    write!(out, "{:02x}", b)?;
  }
  out.write_char('\n')
}

pub fn format_bits(buf: &[u8], count: usize, start_pos: usize) -> String {
  let mut s = String::with_capacity(count + count / 8 + 2);
  let _ = write_bits(&mut s, buf, count, start_pos, DumpLayout::BITS);
  s
}

pub fn format_bytes(buf: &[u8], count: usize, start_pos: usize) -> String {
  let mut s = String::with_capacity(count * 2 + count / 4 + 2);
  let _ = write_bytes(&mut s, buf, count, start_pos, DumpLayout::BYTES);
  s
}

pub fn print_bits(buf: &[u8], count: usize, start_pos: usize) {
  print!("{}", format_bits(buf, count, start_pos));
}

pub fn print_bytes(buf: &[u8], count: usize, start_pos: usize) {
  print!("{}", format_bytes(buf, count, start_pos));
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bits_grouped_by_byte() {
    assert_eq!(format_bits(&[0xa5, 0x0f], 16, 0), " \n10100101 00001111\n");
  }

  #[test]
  fn bits_from_offset() {
    assert_eq!(format_bits(&[0xa5, 0x0f], 8, 4), " \n01010000\n");
    assert_eq!(format_bits(&[0x80], 3, 0), " \n100\n");
  }

  #[test]
  fn bits_wrap_every_64() {
    let buf = [0xffu8; 9];
    let s = format_bits(&buf, 72, 0);
    let expected = format!(" \n{} \n{}\n", ["11111111"; 8].join(" "), "11111111");
    assert_eq!(s, expected);
  }

  #[test]
  fn bytes_grouped_by_four() {
    assert_eq!(format_bytes(&[0xde, 0xad, 0xbe, 0xef, 0x01], 5, 0), " \ndeadbeef 01\n");
    assert_eq!(format_bytes(&[0x00, 0x0a, 0xff], 2, 1), " \n0aff\n");
  }

  #[test]
  fn empty_dump_is_a_newline() {
    assert_eq!(format_bits(&[], 0, 0), "\n");
    assert_eq!(format_bytes(&[], 0, 0), "\n");
  }

  #[test]
  #[should_panic]
  fn bytes_past_end_panics() {
    format_bytes(&[0x01, 0x02], 2, 1);
  }

  #[test]
  fn custom_layout() {
    let mut s = String::new();
    write_bytes(&mut s, &[1, 2, 3, 4], 4, 0, DumpLayout { group: 2, line: 0 }).unwrap();
    assert_eq!(s, " 0102 0304\n");
  }
}
