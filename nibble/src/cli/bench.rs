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

use std::hint::black_box;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use nibblesdk::util::error::NibbleResult;
use nibblesdk::util::timing::TimingReport;

use crate::cli::settings_arg;
use crate::config::{get_usize, CONFIG_BENCH_ITERATIONS};
use crate::setup::get_config;


pub fn make_clap_subcommand() -> Command {
  Command::new("bench")
    .about("Time the fact_count(11) sample workload and print the average time per call.")
    .arg(Arg::new("iterations")
      .short('n')
      .long("iterations")
      .help("Number of calls to average over. If not specified, the bench_iterations setting is used.")
      .num_args(1)
      .value_parser(value_parser!(usize)))
    .arg(Arg::new("json")
      .long("json")
      .help("Print the timing report as JSON.")
      .action(ArgAction::SetTrue))
    .arg(settings_arg())
}

pub fn execute(sub_matches: &ArgMatches) -> NibbleResult<()> {
  let config = get_config(sub_matches.get_one::<String>("settings_path"))?;
  let iterations = match sub_matches.get_one::<usize>("iterations") {
    Some(n) => *n,
    None => get_usize(&config, CONFIG_BENCH_ITERATIONS)?
  };

  let report = TimingReport::measure("fact_count", iterations, || {
    black_box(fact_count(black_box(11)));
  });

  if sub_matches.get_flag("json") {
    println!("{}", serde_json::to_string_pretty(&report)?);
  } else {
    println!("{}: {:?} average over {} calls", report.label, report.average, report.iterations);
  }
  Ok(())
}

/// Counts `a` down by (a - 1)!, one step at a time.
fn fact_count(mut a: i64) -> i64 {
  let mut res: i64 = 1;
  for i in 1..a {
    res *= i;
  }
  for _ in 0..res {
    a -= 1;
  }
  a
}
