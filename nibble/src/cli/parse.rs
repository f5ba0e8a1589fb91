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
use nibblesdk::util::error::NibbleResult;
use nibblesdk::util::parse::{str_to_float, str_to_int, str_to_int_range};


pub fn make_clap_subcommand() -> Command {
  Command::new("parse")
    .about("Parse a number the way the nibblesdk parsers do.")
    .arg(Arg::new("value")
      .help("The string to parse.")
      .num_args(1)
      .allow_hyphen_values(true)
      .required(true))
    .arg(Arg::new("float")
      .short('f')
      .long("float")
      .help("Use the best effort decimal float parser. It never fails.")
      .action(ArgAction::SetTrue)
      .conflicts_with_all(["base", "min", "max"]))
    .arg(Arg::new("base")
      .short('b')
      .long("base")
      .help("Integer base, 2 to 36, or 0 to detect it from a 0x or 0 prefix.")
      .num_args(1)
      .default_value("10")
      .value_parser(value_parser!(u32)))
    .arg(Arg::new("min")
      .long("min")
      .help("Smallest accepted integer value.")
      .num_args(1)
      .allow_negative_numbers(true)
      .value_parser(value_parser!(i64)))
    .arg(Arg::new("max")
      .long("max")
      .help("Largest accepted integer value.")
      .num_args(1)
      .allow_negative_numbers(true)
      .value_parser(value_parser!(i64)))
}

pub fn execute(sub_matches: &ArgMatches) -> NibbleResult<()> {
  let value = sub_matches.get_one::<String>("value").ok_or("no value")?;

  if sub_matches.get_flag("float") {
    println!("{}", str_to_float(value));
    return Ok(());
  }

  let base = *sub_matches.get_one::<u32>("base").ok_or("no base")?;
  let min = sub_matches.get_one::<i64>("min").copied();
  let max = sub_matches.get_one::<i64>("max").copied();

  let parsed = if min.is_some() || max.is_some() {
    let min = min.unwrap_or(i64::MIN);
    let max = max.unwrap_or(i64::MAX);
    str_to_int_range(value, base, min, max)
      .ok_or(format!("'{}' is not a base {} integer in the range [{}, {}].", value, base, min, max))?
  } else {
    str_to_int(value, base)
      .ok_or(format!("'{}' is not a base {} integer.", value, base))?
  };
  println!("{}", parsed);

  Ok(())
}
