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

use config::Config;


pub const ENV_CONFIG_PREFIX: &'static str = "NIBBLE";

pub const CONFIG_BENCH_ITERATIONS: &'static str = "bench_iterations";
pub const CONFIG_BENCH_ITERATIONS_DEFAULT: u64 = 10;

pub const CONFIG_BITS_GROUP: &'static str = "bits_group";
pub const CONFIG_BITS_GROUP_DEFAULT: u64 = 8;

pub const CONFIG_BITS_LINE: &'static str = "bits_line";
pub const CONFIG_BITS_LINE_DEFAULT: u64 = 64;

pub const CONFIG_BYTES_GROUP: &'static str = "bytes_group";
pub const CONFIG_BYTES_GROUP_DEFAULT: u64 = 4;

pub const CONFIG_BYTES_LINE: &'static str = "bytes_line";
pub const CONFIG_BYTES_LINE_DEFAULT: u64 = 32;

pub const DEFAULT_SETTINGS_DIR: &'static str = ".nibble";
pub const DEFAULT_SETTINGS_FILE: &'static str = "settings.toml";

pub const LOG_LEVEL_ENV_VAR: &'static str = "NIBBLE_LOG_LEVEL";
pub const LOG_LEVEL_DEFAULT: &'static str = "warn";


pub fn get_usize(config: &Config, key: &str) -> Result<usize, String> {
  let v = config.get_int(key).map_err(|e| format!("Could not read config value '{}': {}", key, e))?;
  usize::try_from(v).map_err(|_| format!("Config value '{}' must not be negative, got {}.", key, v))
}
