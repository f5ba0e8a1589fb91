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

use clap::Arg;

pub mod bench;
pub mod bits;
pub mod decode;
pub mod encode;
pub mod map;
pub mod parse;
pub mod pow;
pub mod split;


pub fn settings_arg() -> Arg {
  Arg::new("settings_path")
    .short('s')
    .long("settings")
    .help(concat!("Path to a toml settings configuration file. If not specified, ~/.nibble/settings.toml ",
                  "is used if it exists, with NIBBLE_* env vars overriding either."))
    .num_args(1)
    .required(false)
}
