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


/// Iterates over the non-empty runs of `s` between any of the `delimiters` characters.
pub fn tokens<'a>(s: &'a str, delimiters: &'a str) -> impl Iterator<Item = &'a str> + 'a {
  s.split(move |c: char| delimiters.contains(c)).filter(|t| !t.is_empty())
}

/// Splits `s` on any of the `delimiters` characters, returning at most `max_parts` tokens.
/// Adjacent delimiters never produce empty tokens.
pub fn split<'a>(s: &'a str, delimiters: &'a str, max_parts: usize) -> Vec<&'a str> {
  tokens(s, delimiters).take(max_parts).collect()
}

/// Fills `out` with the leading tokens of `s`, returning how many were written.
pub fn split_into<'a>(s: &'a str, delimiters: &'a str, out: &mut [&'a str]) -> usize {
  let mut n = 0;
  for (slot, token) in out.iter_mut().zip(tokens(s, delimiters)) {
    *slot = token;
    n += 1;
  }
  n
}
