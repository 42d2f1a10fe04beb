// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file and turns its
//! loosely typed entries (column labels, percentages) into the options the
//! views expect.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    components::TrackListConfig,
    model::{Column, DEFAULT_COLUMNS, ListVariant},
};

const CONFIG_NAME: &str = "trackdeck";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    /// Artist snapshot shown when none is given on the command line.
    pub(crate) library: Option<PathBuf>,
    /// Track table columns by label, e.g. `["#", "Title", "Time"]`.
    pub(crate) columns: Vec<String>,
    /// `"generic"` or `"album"`; unset derives it from the `#` column.
    pub(crate) variant: Option<ListVariant>,
    /// Track table height as a percentage of the space available to it.
    pub(crate) max_height: u16,
    pub(crate) tick_rate_ms: u64,
    pub(crate) log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            library: None,
            columns: DEFAULT_COLUMNS.iter().map(|c| c.label().to_string()).collect(),
            variant: None,
            max_height: 75,
            tick_rate_ms: 250,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Parses the configured column labels.
    ///
    /// Unknown labels are skipped; if nothing usable remains the default
    /// column set is used.
    pub(crate) fn columns(&self) -> Vec<Column> {
        let columns: Vec<Column> = self
            .columns
            .iter()
            .filter_map(|label| {
                let column = Column::from_label(label);
                if column.is_none() {
                    log::warn!("Ignoring unknown column {:?} in configuration", label);
                }
                column
            })
            .collect();

        if columns.is_empty() {
            DEFAULT_COLUMNS.to_vec()
        } else {
            columns
        }
    }

    pub(crate) fn track_list_config(&self) -> TrackListConfig {
        let config = TrackListConfig::default()
            .with_columns(self.columns())
            .with_max_height(self.max_height);

        match self.variant {
            Some(variant) => config.with_variant(variant),
            None => config,
        }
    }

    /// Where log output goes: the configured file, or `trackdeck.log` beside
    /// the configuration file.
    pub(crate) fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            confy::get_configuration_file_path(CONFIG_NAME, None)
                .ok()
                .and_then(|path| path.parent().map(|dir| dir.join("trackdeck.log")))
                .unwrap_or_else(|| PathBuf::from("trackdeck.log"))
        })
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_columns_round_trip_through_labels() {
        let config = AppConfig::default();
        assert_eq!(config.columns(), DEFAULT_COLUMNS.to_vec());
        assert_eq!(config.track_list_config().variant, ListVariant::Generic);
    }

    #[test]
    fn row_number_column_selects_album_variant() {
        let config = AppConfig {
            columns: vec!["#".into(), "title".into(), "TIME".into()],
            ..AppConfig::default()
        };
        let list = config.track_list_config();
        assert_eq!(list.columns, vec![Column::RowNumber, Column::Title, Column::Duration]);
        assert_eq!(list.variant, ListVariant::Album);
    }

    #[test]
    fn explicit_variant_overrides_columns() {
        let config = AppConfig {
            columns: vec!["#".into(), "Title".into()],
            variant: Some(ListVariant::Generic),
            ..AppConfig::default()
        };
        assert_eq!(config.track_list_config().variant, ListVariant::Generic);

        let config = AppConfig {
            variant: Some(ListVariant::Album),
            ..AppConfig::default()
        };
        assert_eq!(config.track_list_config().variant, ListVariant::Album);
    }

    #[test]
    fn variant_is_read_from_toml() {
        let config: AppConfig = toml::from_str("columns = [\"Title\"]\nvariant = \"album\"\n").unwrap();
        assert_eq!(config.variant, Some(ListVariant::Album));
        assert_eq!(config.max_height, 75);

        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.variant, None);
    }

    #[test]
    fn unknown_columns_fall_back_to_defaults() {
        let config = AppConfig {
            columns: vec!["genre".into(), "year".into()],
            ..AppConfig::default()
        };
        assert_eq!(config.columns(), DEFAULT_COLUMNS.to_vec());
    }

    #[test]
    fn max_height_is_clamped() {
        let config = AppConfig { max_height: 250, ..AppConfig::default() };
        assert_eq!(config.track_list_config().max_height, 100);
    }

    #[test]
    fn explicit_log_file_wins() {
        let config = AppConfig {
            log_file: Some(PathBuf::from("/tmp/deck.log")),
            ..AppConfig::default()
        };
        assert_eq!(config.log_path(), PathBuf::from("/tmp/deck.log"));
    }
}
