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

use clap::{Arg, ArgMatches, Command, value_parser};
use log::{debug, warn};
use nibblesdk::util::dump::write_bytes;
use nibblesdk::util::error::NibbleResult;
use nibblesdk::util::hex::{decode_hex, decoded_len, encode_hex, is_hex};

use crate::cli::settings_arg;
use crate::setup::{bytes_layout, get_config};


pub fn make_clap_subcommand() -> Command {
  Command::new("decode")
    .about("Decode a hex string into a byte buffer. Characters that are not hex digits decode as 0.")
    .arg(Arg::new("hex")
      .help("The hex string. If it has an odd length, the first character forms the first byte alone.")
      .num_args(1)
      .required(true))
    .arg(Arg::new("capacity")
      .short('c')
      .long("capacity")
      .help("Capacity of the output buffer in bytes. If not specified, exactly enough to hold the result.")
      .num_args(1)
      .value_parser(value_parser!(usize))
      .required(false))
    .arg(settings_arg())
}

pub fn execute(sub_matches: &ArgMatches) -> NibbleResult<()> {
  let config = get_config(sub_matches.get_one::<String>("settings_path"))?;
  let layout = bytes_layout(&config)?;

  let hex = sub_matches.get_one::<String>("hex").ok_or("no hex string")?;
  if !is_hex(hex) {
    warn!("'{}' contains characters that are not hex digits, these decode as 0.", hex);
  }

  let capacity = match sub_matches.get_one::<usize>("capacity") {
    Some(c) => *c,
    None => decoded_len(hex.len())
  };
  // bytes past the decoded length are never written, so they need not exist.
  let mut buf = vec![0u8; capacity.min(decoded_len(hex.len()))];
  let num_written = decode_hex(hex, &mut buf)?;
  debug!("Decoded {} bytes into a buffer of capacity {}.", num_written, capacity);

  let mut dump = String::new();
  write_bytes(&mut dump, &buf, num_written, 0, layout)?;
  print!("{}", dump);
  println!("{}", encode_hex(&buf[..num_written]));

  Ok(())
}
