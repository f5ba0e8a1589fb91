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

use std::path::PathBuf;
use config::{Config, FileFormat};
use log::{debug, info};
use nibblesdk::util::dump::DumpLayout;
use nibblesdk::util::error::NibbleResult;
use crate::config::*;


fn default_settings_path() -> Option<PathBuf> {
  let mut pb = dirs::home_dir()?;
  pb.push(DEFAULT_SETTINGS_DIR);
  pb.push(DEFAULT_SETTINGS_FILE);
  if pb.as_path().exists() { Some(pb) } else { None }
}


/// Builds the effective configuration: settings file (explicit, or the default
/// one if present), overridden by NIBBLE_* env vars, falling back to defaults.
pub fn get_config(settings_path_maybe: Option<&String>) -> NibbleResult<Config> {
  let settings_path_maybe = match settings_path_maybe {
    Some(path) => {
      if !std::path::Path::new(path.as_str()).exists() {
        return Err(format!("The specified settings file path '{path}' does not exist.").into());
      }
      Some(PathBuf::from(path))
    },
    None => default_settings_path()
  };

  let config_builder =
    if let Some(path) = &settings_path_maybe {
      info!("Reading config from: {} + overriding with env vars where set.", path.display());
      Config::builder()
        .add_source(config::File::from(path.as_path()).format(FileFormat::Toml))
    } else {
      debug!("No settings file - taking settings from env vars and defaults.");
      Config::builder()
    }
    .add_source(config::Environment::with_prefix(ENV_CONFIG_PREFIX))
    .set_default(CONFIG_BENCH_ITERATIONS, CONFIG_BENCH_ITERATIONS_DEFAULT).map_err(|e| e.to_string())?
    .set_default(CONFIG_BITS_GROUP, CONFIG_BITS_GROUP_DEFAULT).map_err(|e| e.to_string())?
    .set_default(CONFIG_BITS_LINE, CONFIG_BITS_LINE_DEFAULT).map_err(|e| e.to_string())?
    .set_default(CONFIG_BYTES_GROUP, CONFIG_BYTES_GROUP_DEFAULT).map_err(|e| e.to_string())?
    .set_default(CONFIG_BYTES_LINE, CONFIG_BYTES_LINE_DEFAULT).map_err(|e| e.to_string())?;

  let config = match config_builder.build() {
    Ok(c) => c,
    Err(e) => {
      return Err(format!("An error occurred loading configuration: '{e}'").into());
    }
  };

  info!("Config:");
  info!(" {} = {}", CONFIG_BENCH_ITERATIONS, get_usize(&config, CONFIG_BENCH_ITERATIONS)?);
  info!(" {} = {}", CONFIG_BITS_GROUP, get_usize(&config, CONFIG_BITS_GROUP)?);
  info!(" {} = {}", CONFIG_BITS_LINE, get_usize(&config, CONFIG_BITS_LINE)?);
  info!(" {} = {}", CONFIG_BYTES_GROUP, get_usize(&config, CONFIG_BYTES_GROUP)?);
  info!(" {} = {}", CONFIG_BYTES_LINE, get_usize(&config, CONFIG_BYTES_LINE)?);

  Ok(config)
}

pub fn bits_layout(config: &Config) -> NibbleResult<DumpLayout> {
  Ok(DumpLayout {
    group: get_usize(config, CONFIG_BITS_GROUP)?,
    line: get_usize(config, CONFIG_BITS_LINE)?
  })
}

pub fn bytes_layout(config: &Config) -> NibbleResult<DumpLayout> {
  Ok(DumpLayout {
    group: get_usize(config, CONFIG_BYTES_GROUP)?,
    line: get_usize(config, CONFIG_BYTES_LINE)?
  })
}
