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

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use log::debug;
use nibblesdk::util::bits::{clr_bit, set_bit};
use nibblesdk::util::dump::write_bits;
use nibblesdk::util::error::NibbleResult;
use nibblesdk::util::hex::{decode_hex_to_vec, encode_hex};

use crate::cli::settings_arg;
use crate::setup::{bits_layout, get_config};


pub fn make_clap_subcommand() -> Command {
  Command::new("bits")
    .about("Decode a hex string, optionally set or clear bits (LSB first), and print the bits MSB first.")
    .arg(Arg::new("hex")
      .help("The hex string to decode.")
      .num_args(1)
      .required(true))
    .arg(Arg::new("set")
      .long("set")
      .help("Index of a bit to set, counting from the LSB of each byte. May be repeated.")
      .num_args(1)
      .action(ArgAction::Append)
      .value_parser(value_parser!(usize)))
    .arg(Arg::new("clear")
      .long("clear")
      .help("Index of a bit to clear, counting from the LSB of each byte. May be repeated. Applied after --set.")
      .num_args(1)
      .action(ArgAction::Append)
      .value_parser(value_parser!(usize)))
    .arg(Arg::new("start")
      .long("start")
      .help("First bit to print.")
      .num_args(1)
      .default_value("0")
      .value_parser(value_parser!(usize)))
    .arg(Arg::new("count")
      .long("count")
      .help("Number of bits to print. If not specified, up to the end of the buffer.")
      .num_args(1)
      .value_parser(value_parser!(usize)))
    .arg(settings_arg())
}

pub fn execute(sub_matches: &ArgMatches) -> NibbleResult<()> {
  let config = get_config(sub_matches.get_one::<String>("settings_path"))?;
  let layout = bits_layout(&config)?;

  let hex = sub_matches.get_one::<String>("hex").ok_or("no hex string")?;
  let mut buf = decode_hex_to_vec(hex);
  let num_bits = buf.len() * 8;

  let check = |n: usize| -> NibbleResult<usize> {
    if n >= num_bits {
      return Err(format!("Bit index {} is out of range for a {} bit buffer.", n, num_bits).into());
    }
    Ok(n)
  };
  if let Some(ns) = sub_matches.get_many::<usize>("set") {
    for n in ns {
      set_bit(&mut buf, check(*n)?);
    }
  }
  if let Some(ns) = sub_matches.get_many::<usize>("clear") {
    for n in ns {
      clr_bit(&mut buf, check(*n)?);
    }
  }

  let start = *sub_matches.get_one::<usize>("start").ok_or("no start")?;
  if start > num_bits {
    return Err(format!("Start bit {} is past the end of a {} bit buffer.", start, num_bits).into());
  }
  let count = match sub_matches.get_one::<usize>("count") {
    Some(c) => {
      if start.checked_add(*c).filter(|end| *end <= num_bits).is_none() {
        return Err(format!("Cannot print {} bits from bit {} of a {} bit buffer.", c, start, num_bits).into());
      }
      *c
    },
    None => num_bits - start
  };
  debug!("Printing {} bits from bit {}.", count, start);

  let mut dump = String::new();
  write_bits(&mut dump, &buf, count, start, layout)?;
  print!("{}", dump);
  println!("{}", encode_hex(&buf));

  Ok(())
}
