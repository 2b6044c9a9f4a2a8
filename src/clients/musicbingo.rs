use std::env::VarError;

use hyper::ext::ReasonPhrase;
use log::debug;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::clients::entities::{Album, Playlist, ResourceKind, SimplifiedAlbum, Track};
use crate::errors::{Error, Result};

/// Backend origin and path prefix every card resource hangs off
pub const BASE_URL: &str = "https://musicbingo-backend.gewoonjaap.workers.dev/api/card";

/// Environment variable that overrides [`BASE_URL`]
pub const BASE_URL_ENV: &str = "MUSICBINGO_API_URL";

/// Read-only client for the MusicBingo backend
#[derive(Debug, Clone)]
pub struct MusicBingoClient {
    http: reqwest::Client,
    base_url: Url,
}

impl MusicBingoClient {
    /// Create a client on top of an existing HTTP client
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        MusicBingoClient { http, base_url }
    }

    /// Create a client against `base_url` with a fresh HTTP client
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| Error::ConfigurationError(format!("Invalid base URL {base_url:?}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(Error::ConfigurationError(format!(
                "Base URL {base_url:?} cannot carry path segments"
            )));
        }
        Ok(Self::new(reqwest::Client::new(), url))
    }

    /// Create a client from the environment, falling back to the public backend
    pub fn try_default() -> Result<Self> {
        let base_url = base_url_from_env(std::env::var(BASE_URL_ENV))?;
        Self::with_base_url(&base_url)
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch a playlist by its id
    pub async fn get_playlist(&self, playlist_id: &str) -> Result<Playlist> {
        self.fetch(ResourceKind::Playlist, playlist_id).await
    }

    /// Fetch the albums of an artist by the artist's id
    pub async fn get_artist(&self, artist_id: &str) -> Result<Vec<SimplifiedAlbum>> {
        self.fetch(ResourceKind::Artist, artist_id).await
    }

    /// Fetch an album by its id
    pub async fn get_album(&self, album_id: &str) -> Result<Album> {
        self.fetch(ResourceKind::Album, album_id).await
    }

    /// Fetch a track by its id
    pub async fn get_track(&self, track_id: &str) -> Result<Track> {
        self.fetch(ResourceKind::Track, track_id).await
    }

    /// Build `{base_url}/{kind}/{id}`, percent-encoding the id as a single segment
    pub fn resource_url(&self, kind: ResourceKind, id: &str) -> Result<Url> {
        // Dot segments would be collapsed by the URL and drop the id
        if id.is_empty() || id == "." || id == ".." {
            return Err(Error::InvalidInput(kind));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::ConfigurationError(format!(
                    "Base URL {} cannot carry path segments",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push(kind.as_str())
            .push(id);
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, kind: ResourceKind, id: &str) -> Result<T> {
        // Validation happens here, before any request is sent
        let url = self.resource_url(kind, id)?;
        debug!("Fetching {kind} from {url}");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch {
                kind,
                status,
                status_text: status_text(&response),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| Error::Parse { kind, source })
    }
}

// Value of `MUSICBINGO_API_URL`, or the public backend when it is unset
fn base_url_from_env(value: std::result::Result<String, VarError>) -> Result<String> {
    match value {
        Ok(url) => Ok(url),
        Err(VarError::NotPresent) => Ok(BASE_URL.to_string()),
        Err(e) => Err(e.into()),
    }
}

// Reason phrase the server sent, else the canonical one for the status code
fn status_text(response: &reqwest::Response) -> String {
    let status = response.status();
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => status
            .canonical_reason()
            .map_or_else(|| status.as_str().to_string(), str::to_string),
    }
}
