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

use clap::{Arg, ArgMatches, Command};
use nibblesdk::util::error::NibbleResult;
use nibblesdk::util::hex::encode_hex;


pub fn make_clap_subcommand() -> Command {
  Command::new("encode")
    .about("Print the canonical lowercase hex encoding of the UTF-8 bytes of some text.")
    .arg(Arg::new("text")
      .help("The text to encode.")
      .num_args(1)
      .allow_hyphen_values(true)
      .required(true))
}

pub fn execute(sub_matches: &ArgMatches) -> NibbleResult<()> {
  let text = sub_matches.get_one::<String>("text").ok_or("no text")?;
  println!("{}", encode_hex(text.as_bytes()));
  Ok(())
}
