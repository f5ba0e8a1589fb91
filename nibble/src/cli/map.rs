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
use nibblesdk::util::math::map_range;


const ARGS: [&'static str; 5] = ["value", "in_min", "in_max", "out_min", "out_max"];

pub fn make_clap_subcommand() -> Command {
  let mut cmd = Command::new("map")
    .about("Linearly rescale an integer from one range to another, truncating toward zero.")
    .allow_negative_numbers(true);
  for name in ARGS {
    cmd = cmd.arg(Arg::new(name)
      .num_args(1)
      .value_parser(value_parser!(i64))
      .required(true));
  }
  cmd
}

pub fn execute(sub_matches: &ArgMatches) -> NibbleResult<()> {
  let mut v = [0i64; 5];
  for (slot, name) in v.iter_mut().zip(ARGS) {
    *slot = *sub_matches.get_one::<i64>(name).ok_or(format!("no {}", name))?;
  }
  println!("{}", map_range(v[0], v[1], v[2], v[3], v[4]));
  Ok(())
}
