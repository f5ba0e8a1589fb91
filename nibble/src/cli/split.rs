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
use nibblesdk::util::error::NibbleResult;
use nibblesdk::util::split::split;


pub fn make_clap_subcommand() -> Command {
  Command::new("split")
    .about("Split text on any of a set of delimiter characters and print one token per line. Empty tokens are skipped.")
    .arg(Arg::new("text")
      .help("The text to split.")
      .num_args(1)
      .allow_hyphen_values(true)
      .required(true))
    .arg(Arg::new("delimiters")
      .short('d')
      .long("delims")
      .help("Delimiter characters. Any one of them separates tokens.")
      .num_args(1)
      .default_value(" "))
    .arg(Arg::new("max_parts")
      .short('m')
      .long("max")
      .help("Maximum number of tokens to print.")
      .num_args(1)
      .default_value("64")
      .value_parser(value_parser!(usize)))
}

pub fn execute(sub_matches: &ArgMatches) -> NibbleResult<()> {
  let text = sub_matches.get_one::<String>("text").ok_or("no text")?;
  let delimiters = sub_matches.get_one::<String>("delimiters").ok_or("no delimiters")?;
  let max_parts = *sub_matches.get_one::<usize>("max_parts").ok_or("no max")?;

  for token in split(text, delimiters, max_parts) {
    println!("{}", token);
  }
  Ok(())
}
