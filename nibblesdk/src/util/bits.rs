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

// Bit n of a buffer lives in byte n >> 3. All accessors panic if that byte is
// out of bounds.


/// Returns the n-th bit of `buf`, counting from the LSB of each byte.
#[inline]
pub const fn get_bit(buf: &[u8], n: usize) -> u8 {
  (buf[n >> 3] >> (n & 7)) & 1
}

/// Returns the n-th bit of `buf`, counting from the MSB of each byte.
#[inline]
pub const fn get_bit_r(buf: &[u8], n: usize) -> u8 {
  (buf[n >> 3] >> (7 - (n & 7))) & 1
}

#[inline]
pub fn set_bit(buf: &mut [u8], n: usize) {
  buf[n >> 3] |= 1 << (n & 7);
}

#[inline]
pub fn clr_bit(buf: &mut [u8], n: usize) {
  buf[n >> 3] &= !(1 << (n & 7));
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lsb_and_msb_ordering() {
    let buf = [0b0000_0001, 0b1000_0000];
    assert_eq!(get_bit(&buf, 0), 1);
    assert_eq!(get_bit(&buf, 7), 0);
    assert_eq!(get_bit(&buf, 15), 1);

    assert_eq!(get_bit_r(&buf, 0), 0);
    assert_eq!(get_bit_r(&buf, 7), 1);
    assert_eq!(get_bit_r(&buf, 8), 1);
    assert_eq!(get_bit_r(&buf, 15), 0);
  }

  #[test]
  fn get_bit_r_mirrors_get_bit_within_byte() {
    let buf = [0xa5, 0x3c];
    for n in 0..16 {
      let mirrored = (n & !7) | (7 - (n & 7));
      assert_eq!(get_bit_r(&buf, n), get_bit(&buf, mirrored));
    }
  }

  #[test]
  fn set_then_clear_restores() {
    let mut buf = [0x00, 0xff];
    set_bit(&mut buf, 3);
    assert_eq!(buf, [0x08, 0xff]);
    clr_bit(&mut buf, 3);
    assert_eq!(buf, [0x00, 0xff]);

    clr_bit(&mut buf, 8);
    assert_eq!(buf, [0x00, 0xfe]);
    set_bit(&mut buf, 8);
    assert_eq!(buf, [0x00, 0xff]);
  }

  #[test]
  fn set_is_idempotent() {
    let mut buf = [0u8; 1];
    set_bit(&mut buf, 5);
    set_bit(&mut buf, 5);
    assert_eq!(buf, [0x20]);
    assert_eq!(get_bit(&buf, 5), 1);
  }

  #[test]
  #[should_panic]
  fn out_of_range_panics() {
    get_bit(&[0u8; 2], 16);
  }
}
