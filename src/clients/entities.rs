use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The kinds of resources the backend serves, one per path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// `/playlist/{id}`
    Playlist,
    /// `/artist/{id}`
    Artist,
    /// `/album/{id}`
    Album,
    /// `/track/{id}`
    Track,
}

impl ResourceKind {
    /// Path segment used by the backend for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Playlist => "playlist",
            ResourceKind::Artist => "artist",
            ResourceKind::Album => "album",
            ResourceKind::Track => "track",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Entities only require the fields this crate relies on. Everything else the
// backend sends is kept in `extra`, so serializing an entity gives back the
// object the server returned.

/// Artist reference embedded in albums and tracks
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArtistRef {
    /// Backend identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Every other member of the JSON object, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A playlist as returned by `/playlist/{id}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Playlist {
    /// Backend identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Every other member of the JSON object, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Album entry of an artist's discography, as returned by `/artist/{id}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimplifiedAlbum {
    /// Backend identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Credited artists, when the backend sends them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artists: Option<Vec<ArtistRef>>,
    /// Every other member of the JSON object, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A full album as returned by `/album/{id}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Album {
    /// Backend identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Credited artists, when the backend sends them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artists: Option<Vec<ArtistRef>>,
    /// Every other member of the JSON object, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A track as returned by `/track/{id}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Track {
    /// Backend identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Credited artists, when the backend sends them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artists: Option<Vec<ArtistRef>>,
    /// Every other member of the JSON object, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Track {
    /// First credited artist, the one a bingo card shows as a hint
    pub fn main_artist(&self) -> Option<&ArtistRef> {
        self.artists.as_ref().and_then(|artists| artists.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_renders_as_path_segment() {
        assert_eq!(ResourceKind::Playlist.to_string(), "playlist");
        assert_eq!(ResourceKind::Artist.to_string(), "artist");
        assert_eq!(ResourceKind::Album.to_string(), "album");
        assert_eq!(ResourceKind::Track.to_string(), "track");
    }

    #[test]
    fn track_keeps_unknown_members() {
        let body = json!({
            "id": "abc123",
            "name": "Song",
            "artists": [{"id": "a1", "name": "Band", "type": "artist"}],
            "duration_ms": 201_000,
            "album": {"name": "Record", "release_date": "1999-01-01"}
        });

        let track: Track = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(track.main_artist().map(|a| a.name.as_str()), Some("Band"));
        assert_eq!(serde_json::to_value(&track).unwrap(), body);
    }

    #[test]
    fn track_without_name_is_rejected() {
        let result = serde_json::from_value::<Track>(json!({"id": "abc123"}));
        assert!(result.is_err());
    }

    #[test]
    fn album_list_parses() {
        let body = json!([
            {"id": "al1", "name": "First", "album_type": "album"},
            {"id": "al2", "name": "Second", "album_type": "single"}
        ]);

        let albums: Vec<SimplifiedAlbum> = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(albums.len(), 2);
        assert_eq!(serde_json::to_value(&albums).unwrap(), body);
    }
}
