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

mod cli;
mod config;
mod setup;
use std::str::FromStr;

use clap::{Arg, Command};
use nibblesdk::util::error::NibbleResult;
use std::env;


fn main() {
  let arg_matches = Command::new("Nibble")
    .version("0.1.0")
    .arg(Arg::new("log_level")
      .long("log-level")
      .help(concat!("Log level (off, error, warn, info, debug, trace). If not specified, ",
                    "the NIBBLE_LOG_LEVEL env var is used, else warn."))
      .num_args(1)
      .global(true)
      .required(false))
    .subcommand(cli::bench::make_clap_subcommand())
    .subcommand(cli::bits::make_clap_subcommand())
    .subcommand(cli::decode::make_clap_subcommand())
    .subcommand(cli::encode::make_clap_subcommand())
    .subcommand(cli::map::make_clap_subcommand())
    .subcommand(cli::parse::make_clap_subcommand())
    .subcommand(cli::pow::make_clap_subcommand())
    .subcommand(cli::split::make_clap_subcommand())
    .about("Nibble: hex decoding, bit twiddling and parsing helpers.")
    .get_matches();

  let command_result = match arg_matches.subcommand() {
    Some((command, arg_sub_matches)) => {
      match init_logger(arg_sub_matches.get_one::<String>("log_level").cloned()) {
        Err(e) => Err(e),
        Ok(()) => {
          match command {
            "bench" => cli::bench::execute(arg_sub_matches),
            "bits" => cli::bits::execute(arg_sub_matches),
            "decode" => cli::decode::execute(arg_sub_matches),
            "encode" => cli::encode::execute(arg_sub_matches),
            "map" => cli::map::execute(arg_sub_matches),
            "parse" => cli::parse::execute(arg_sub_matches),
            "pow" => cli::pow::execute(arg_sub_matches),
            "split" => cli::split::execute(arg_sub_matches),
            _ => {
              println!(".. --help for help.");
              Ok(())
            }
          }
        }
      }
    },
    _ => {
      println!(".. --help for help.");
      Ok(())
    }
  };

  if let Err(e) = command_result {
    // Not using logger here, as the error may have been in initializing the logger.
    eprintln!("{}", e);
    std::process::exit(1);
  }
}


fn init_logger(level: Option<String>) -> NibbleResult<()> {
  let level = if let Some(level) = level {
    log::LevelFilter::from_str(&level).map_err(|e| format!("Could not parse log level: {}", e))?
  } else {
    let log_level_str = match env::var(config::LOG_LEVEL_ENV_VAR) {
      Err(_) => config::LOG_LEVEL_DEFAULT.to_owned(),
      Ok(v) => v
    };
    log::LevelFilter::from_str(&log_level_str).map_err(|e| format!("Could not parse log level: {}", e))?
  };
  pretty_env_logger::formatted_timed_builder()
    .format_timestamp_secs()
    .filter_module("nibble", level)
    .filter_module("nibblesdk", level)
    .init();
  Ok(())
}
