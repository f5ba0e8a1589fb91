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


/// Integer power by squaring. Overflow wraps.
pub const fn ipow(mut base: i64, mut exp: u32) -> i64 {
  let mut result: i64 = 1;
  loop {
    if exp & 1 == 1 {
      result = result.wrapping_mul(base);
    }
    exp >>= 1;
    if exp == 0 {
      break;
    }
    base = base.wrapping_mul(base);
  }
  result
}

/// Linearly rescales `val` from `[in_min, in_max]` to `[out_min, out_max]`,
/// truncating the whole sum toward zero. A degenerate input range maps everything
/// to `out_min`. Results outside the i64 range saturate.
pub fn map_range(val: i64, in_min: i64, in_max: i64, out_min: i64, out_max: i64) -> i64 {
  if in_min == in_max {
    return out_min;
  }
  let slope = (out_max as f64 - out_min as f64) / (in_max as f64 - in_min as f64);
  (out_min as f64 + slope * (val as f64 - in_min as f64)) as i64
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn ipow_basics() {
    assert_eq!(ipow(3, 4), 81);
    assert_eq!(ipow(-2, 3), -8);
    assert_eq!(ipow(7, 0), 1);
    assert_eq!(ipow(0, 0), 1);
    assert_eq!(ipow(2, 62), 1 << 62);
  }

  #[test]
  fn ipow_matches_std() {
    for b in -5i64..=5 {
      for e in 0..10 {
        assert_eq!(ipow(b, e), b.pow(e));
      }
    }
  }

  #[test]
  fn ipow_wraps() {
    assert_eq!(ipow(2, 64), 0);
  }

  #[test]
  fn map_range_scales() {
    assert_eq!(map_range(5, 0, 10, 0, 100), 50);
    assert_eq!(map_range(512, 0, 1023, 0, 255), 127);
    assert_eq!(map_range(0, 0, 10, 100, 0), 100);
    assert_eq!(map_range(10, 0, 10, 100, 0), 0);
    assert_eq!(map_range(-5, -10, 10, 0, 20), 5);
  }

  #[test]
  fn map_range_extrapolates_and_truncates() {
    assert_eq!(map_range(20, 0, 10, 0, 100), 200);
    assert_eq!(map_range(1, 0, 3, 0, 1), 0);
  }

  #[test]
  fn map_range_truncates_whole_sum() {
    // 10 - 1/3
    assert_eq!(map_range(1, 0, 3, 10, 9), 9);
    // -10 + 1/2
    assert_eq!(map_range(1, 0, 2, -10, -9), -9);
    // 10 + 1/3
    assert_eq!(map_range(1, 0, 3, 10, 11), 10);
    // -10 - 1/2
    assert_eq!(map_range(1, 0, 2, -10, -11), -10);
  }

  #[test]
  fn map_range_extreme_bounds() {
    assert_eq!(map_range(0, i64::MIN, i64::MAX, 0, 1), 0);
    assert_eq!(map_range(i64::MIN, i64::MIN, i64::MAX, 0, 1), 0);
    assert_eq!(map_range(1, 0, 2, i64::MIN, i64::MAX), 0);
    assert_eq!(map_range(i64::MAX, 0, 1, 0, i64::MAX), i64::MAX);
  }

  #[test]
  fn map_range_degenerate_input() {
    assert_eq!(map_range(4, 3, 3, 7, 9), 7);
  }
}
