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

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::{ParseFloatError, ParseIntError};

use super::hex::HexError;


pub type NibbleResult<T> = Result<T, NibbleError>;


#[derive(Debug)]
pub struct NibbleError {
  message: String
}

impl NibbleError {
  pub fn new(message: &str) -> NibbleError {
    NibbleError { message: message.to_string() }
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

impl Display for NibbleError {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
    write!(f, "{}", self.message)
  }
}

impl Error for NibbleError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    None
  }
}


impl From<HexError> for NibbleError {
  fn from(err: HexError) -> Self { Self::new(&err.to_string()) }
}

impl From<serde_json::Error> for NibbleError {
  fn from(err: serde_json::Error) -> Self { Self::new(&err.to_string()) }
}

impl From<std::io::Error> for NibbleError {
  fn from(err: std::io::Error) -> Self { Self::new(&err.to_string()) }
}

impl From<std::fmt::Error> for NibbleError {
  fn from(err: std::fmt::Error) -> Self { Self::new(&err.to_string()) }
}

impl From<String> for NibbleError {
  fn from(err: String) -> Self { Self::new(&err) }
}

impl From<&str> for NibbleError {
  fn from(err: &str) -> Self { Self::new(err) }
}

impl From<ParseIntError> for NibbleError {
  fn from(err: ParseIntError) -> Self { Self::new(&err.to_string()) }
}

impl From<ParseFloatError> for NibbleError {
  fn from(err: ParseFloatError) -> Self { Self::new(&err.to_string()) }
}


#[cfg(test)]
mod tests {
  use super::{NibbleError, NibbleResult};
  use crate::util::hex::HexError;

  fn fails_with_hex_error() -> NibbleResult<usize> {
    Err(HexError::BufferTooSmall { needed: 2, capacity: 1 })?
  }

  #[test]
  fn hex_error_converts_with_message() {
    let e = fails_with_hex_error().unwrap_err();
    assert_eq!(e.message(), "decoded size 2 exceeds buffer capacity 1");
  }

  #[test]
  fn parse_int_error_converts() {
    let e: NibbleError = "x1".parse::<i64>().unwrap_err().into();
    assert_eq!(e.to_string(), "invalid digit found in string");
  }
}
