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
use nibblesdk::util::math::ipow;


pub fn make_clap_subcommand() -> Command {
  Command::new("pow")
    .about("Integer power by squaring. Overflow wraps.")
    .allow_negative_numbers(true)
    .arg(Arg::new("base")
      .num_args(1)
      .value_parser(value_parser!(i64))
      .required(true))
    .arg(Arg::new("exp")
      .num_args(1)
      .value_parser(value_parser!(u32))
      .required(true))
}

pub fn execute(sub_matches: &ArgMatches) -> NibbleResult<()> {
  let base = *sub_matches.get_one::<i64>("base").ok_or("no base")?;
  let exp = *sub_matches.get_one::<u32>("exp").ok_or("no exp")?;
  println!("{}", ipow(base, exp));
  Ok(())
}
