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

use std::time::{Duration, Instant};
use log::debug;
use serde::{Serialize, Serializer};


/// Calls `f` `N` times and returns the average elapsed time per call.
pub fn measure_time<const N: usize, F: FnMut()>(mut f: F) -> Duration {
  if N == 0 {
    return Duration::ZERO;
  }
  let start = Instant::now();
  for _ in 0..N {
    f();
  }
  average(start.elapsed(), N)
}

/// Like [`measure_time`], for a call bound to a receiver.
pub fn measure_time_with<const N: usize, T, F: FnMut(&mut T)>(receiver: &mut T, mut f: F) -> Duration {
  measure_time::<N, _>(|| f(receiver))
}

fn average(total: Duration, iterations: usize) -> Duration {
  match u32::try_from(iterations) {
    Ok(n) => total / n,
    Err(_) => Duration::from_secs_f64(total.as_secs_f64() / iterations as f64),
  }
}


#[derive(Debug, Clone, Serialize)]
pub struct TimingReport {
  pub label: String,
  pub iterations: usize,
  #[serde(rename = "total_ns", serialize_with = "as_nanos")]
  pub total: Duration,
  #[serde(rename = "average_ns", serialize_with = "as_nanos")]
  pub average: Duration
}

impl TimingReport {
  /// Runtime iteration count counterpart of [`measure_time`].
  pub fn measure<F: FnMut()>(label: &str, iterations: usize, mut f: F) -> TimingReport {
    let start = Instant::now();
    for _ in 0..iterations {
      f();
    }
    let total = start.elapsed();
    let average = if iterations == 0 { Duration::ZERO } else { average(total, iterations) };
    debug!("{}: {} iterations, total {:?}, average {:?}.", label, iterations, total, average);
    TimingReport { label: label.to_owned(), iterations, total, average }
  }
}

fn as_nanos<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
  s.serialize_u128(d.as_nanos())
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn calls_exactly_n_times() {
    let mut calls = 0;
    measure_time::<5, _>(|| calls += 1);
    assert_eq!(calls, 5);
  }

  #[test]
  fn zero_iterations_skip_the_call() {
    let mut calls = 0;
    assert_eq!(measure_time::<0, _>(|| calls += 1), Duration::ZERO);
    assert_eq!(calls, 0);
  }

  #[test]
  fn average_is_at_least_the_sleep() {
    let avg = measure_time::<2, _>(|| std::thread::sleep(Duration::from_millis(2)));
    assert!(avg >= Duration::from_millis(2));
  }

  #[test]
  fn bound_receiver() {
    let mut v: Vec<u32> = vec![];
    measure_time_with::<3, _, _>(&mut v, |v| v.push(1));
    assert_eq!(v, vec![1, 1, 1]);
  }

  #[test]
  fn report_serializes_nanos() {
    let mut calls = 0;
    let report = TimingReport::measure("noop", 4, || calls += 1);
    assert_eq!(calls, 4);
    assert_eq!(report.iterations, 4);
    assert!(report.average <= report.total);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["label"], "noop");
    assert_eq!(json["iterations"], 4);
    assert_eq!(json["total_ns"].as_u64().map(|v| v as u128), Some(report.total.as_nanos()));
  }

  #[test]
  fn report_with_no_iterations() {
    let report = TimingReport::measure("empty", 0, || {});
    assert_eq!(report.average, Duration::ZERO);
  }
}
