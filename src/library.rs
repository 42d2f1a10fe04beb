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

//! Artist snapshot loading.
//!
//! The views never fetch data themselves; the binary hands them one artist
//! read from a TOML snapshot:
//!
//! ```toml
//! [artist]
//! name = "Red Hot Chili Peppers"
//!
//! [[artist.tracks]]
//! id = "t1"
//! title = "Otherside"
//! artist = "Red Hot Chili Peppers"
//! album = "Californication"
//! duration = 255
//!
//! [[artist.albums]]
//! id = "a1"
//! title = "Californication"
//! cover = "covers/californication.jpg"
//!
//! [playback]
//! id = "t1"
//! playing = false
//! ```
//!
//! A track without a `position` takes its index in the list. The optional
//! `[playback]` table restores the pointer by `id` or `position`.

use std::{collections::HashSet, fs, path::{Path, PathBuf}};

use serde::Deserialize;
use thiserror::Error;

use crate::model::{Album, Artist, PlaybackPointer, Track};

#[derive(Debug, Error)]
pub(crate) enum LibraryError {
    #[error("failed to read library snapshot {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse library snapshot {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("track id {0:?} appears more than once")]
    DuplicateTrackId(String),

    #[error("playback entry needs an `id` or a `position`")]
    PlaybackTarget,
}

#[derive(Debug, Deserialize)]
struct Snapshot {
    artist: ArtistRecord,
    playback: Option<PlaybackRecord>,
}

#[derive(Debug, Deserialize)]
struct ArtistRecord {
    #[serde(default)]
    id: String,
    name: String,
    #[serde(default)]
    tracks: Vec<TrackRecord>,
    #[serde(default)]
    albums: Vec<Album>,
}

#[derive(Debug, Deserialize)]
struct TrackRecord {
    id: String,
    title: String,
    #[serde(default)]
    artist: String,
    album: Option<String>,
    duration: Option<u64>,
    position: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct PlaybackRecord {
    id: Option<String>,
    position: Option<usize>,
    #[serde(default = "playing_by_default")]
    playing: bool,
}

fn playing_by_default() -> bool {
    true
}

/// An artist together with the playback pointer saved beside it.
#[derive(Debug)]
pub(crate) struct Library {
    pub(crate) artist: Artist,
    pub(crate) pointer: Option<PlaybackPointer>,
}

pub(crate) fn load_library(path: &Path) -> Result<Library, LibraryError> {
    let text = fs::read_to_string(path).map_err(|source| LibraryError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let snapshot: Snapshot = toml::from_str(&text).map_err(|source| LibraryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let artist = normalise(snapshot.artist)?;
    let pointer = snapshot.playback.map(PlaybackRecord::into_pointer).transpose()?;
    log::info!(
        "Loaded {} with {} tracks and {} albums from {}",
        artist.name,
        artist.tracks.len(),
        artist.albums.len(),
        path.display()
    );
    if let Some(pointer) = &pointer {
        log::debug!("Restored playback pointer {:?}", pointer);
    }

    Ok(Library { artist, pointer })
}

impl PlaybackRecord {
    /// An `id` wins over a `position` when both are given.
    fn into_pointer(self) -> Result<PlaybackPointer, LibraryError> {
        match (self.id, self.position) {
            (Some(id), _) => Ok(PlaybackPointer::id(id, self.playing)),
            (None, Some(position)) => Ok(PlaybackPointer::position(position, self.playing)),
            (None, None) => Err(LibraryError::PlaybackTarget),
        }
    }
}

/// Fills in positions and artists the snapshot left out and rejects
/// duplicate track identifiers.
fn normalise(record: ArtistRecord) -> Result<Artist, LibraryError> {
    let mut seen = HashSet::new();
    let mut tracks = Vec::with_capacity(record.tracks.len());
    for (index, track) in record.tracks.into_iter().enumerate() {
        if !seen.insert(track.id.clone()) {
            return Err(LibraryError::DuplicateTrackId(track.id));
        }
        let artist = if track.artist.is_empty() { record.name.clone() } else { track.artist };
        tracks.push(Track {
            id: track.id,
            title: track.title,
            artist,
            album: track.album,
            duration: track.duration,
            position: track.position.unwrap_or(index),
        });
    }

    let mut albums = record.albums;
    for album in albums.iter_mut() {
        if album.artist.is_empty() {
            album.artist = record.name.clone();
        }
    }

    let id = if record.id.is_empty() {
        record.name.to_lowercase().replace(' ', "-")
    } else {
        record.id
    };

    Ok(Artist { id, name: record.name, tracks, albums })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_snapshot(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_artist_and_fills_defaults() {
        let file = write_snapshot(
            r#"
            [artist]
            name = "Red Hot Chili Peppers"

            [[artist.tracks]]
            id = "t1"
            title = "Otherside"
            album = "Californication"
            duration = 255

            [[artist.tracks]]
            id = "t2"
            title = "Scar Tissue"

            [[artist.albums]]
            id = "a1"
            title = "Californication"
            cover = "covers/californication.jpg"
            "#,
        );

        let artist = load_library(file.path()).unwrap().artist;
        assert_eq!(artist.id, "red-hot-chili-peppers");
        assert_eq!(artist.tracks.len(), 2);
        assert_eq!(artist.tracks[1].position, 1);
        assert_eq!(artist.tracks[1].artist, "Red Hot Chili Peppers");
        assert_eq!(artist.tracks[1].album, None);
        assert_eq!(artist.tracks[0].duration, Some(255));
        assert_eq!(artist.albums[0].artist, "Red Hot Chili Peppers");
    }

    #[test]
    fn rejects_duplicate_track_ids() {
        let file = write_snapshot(
            r#"
            [artist]
            name = "Echo"

            [[artist.tracks]]
            id = "t1"
            title = "One"

            [[artist.tracks]]
            id = "t1"
            title = "Two"
            "#,
        );

        let err = load_library(file.path()).unwrap_err();
        assert!(matches!(err, LibraryError::DuplicateTrackId(id) if id == "t1"));
    }

    #[test]
    fn reports_parse_and_read_errors() {
        let file = write_snapshot("[artist]\ntracks = 3\n");
        assert!(matches!(load_library(file.path()), Err(LibraryError::Parse { .. })));

        let missing = Path::new("/nonexistent/trackdeck/library.toml");
        assert!(matches!(load_library(missing), Err(LibraryError::Read { .. })));
    }

    #[test]
    fn explicit_positions_are_kept() {
        let file = write_snapshot(
            r#"
            [artist]
            name = "Echo"

            [[artist.tracks]]
            id = "t1"
            title = "One"
            position = 1

            [[artist.tracks]]
            id = "t2"
            title = "Two"
            position = 0

            [[artist.tracks]]
            id = "t3"
            title = "Three"
            "#,
        );

        let library = load_library(file.path()).unwrap();
        let positions: Vec<usize> = library.artist.tracks.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![1, 0, 2]);

        let pointer = PlaybackPointer::position(0, true);
        let current: Vec<&str> = library
            .artist
            .tracks
            .iter()
            .filter(|track| pointer.targets(track))
            .map(|track| track.id.as_str())
            .collect();
        assert_eq!(current, vec!["t2"]);
    }

    #[test]
    fn restores_playback_pointer() {
        let file = write_snapshot(
            r#"
            [artist]
            name = "Echo"

            [[artist.tracks]]
            id = "t1"
            title = "One"

            [playback]
            position = 0
            "#,
        );
        let library = load_library(file.path()).unwrap();
        assert_eq!(library.pointer, Some(PlaybackPointer::position(0, true)));

        let file = write_snapshot(
            r#"
            [artist]
            name = "Echo"

            [playback]
            id = "t1"
            position = 3
            playing = false
            "#,
        );
        let library = load_library(file.path()).unwrap();
        assert_eq!(library.pointer, Some(PlaybackPointer::id("t1", false)));
    }

    #[test]
    fn playback_without_target_is_rejected() {
        let file = write_snapshot("[artist]\nname = \"Echo\"\n\n[playback]\nplaying = true\n");
        assert!(matches!(load_library(file.path()), Err(LibraryError::PlaybackTarget)));
    }

    #[test]
    fn missing_playback_leaves_player_stopped() {
        let file = write_snapshot("[artist]\nname = \"Echo\"\n");
        assert_eq!(load_library(file.path()).unwrap().pointer, None);
    }
}
