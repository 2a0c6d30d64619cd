use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};
use log::debug;
use reqwest::{Response, header::AUTHORIZATION};
use serde::de::DeserializeOwned;

use crate::clients::{
    entities::{
        ArtistSearchResponse, RelatedArtist, RelatedArtistsResponse, SearchOutcome,
        TokenResponse, TopTracksResponse, Track,
    },
    errors::{Error, Result},
};

/// Token endpoint used for the client-credentials grant.
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/api/token";
/// Root of the Web API.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Application client ID and secret issued by the Spotify developer dashboard.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    /// Nothing is validated locally; bad pairs surface as a rejected token request.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Credentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Read `CLIENT_ID` and `CLIENT_SECRET` from the environment.
    pub fn from_env() -> Result<Self> {
        Credentials::from_vars(env_var)
    }

    /// Same as [`Credentials::from_env`] with variables resolved by `var`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let client_id = require(&var, "CLIENT_ID")?;
        let client_secret = require(&var, "CLIENT_SECRET")?;
        Ok(Credentials::new(client_id, client_secret))
    }

    /// `Basic` authorization value: base64 of `id:secret`.
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Where the client sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub auth_url: String,
    // no trailing slash
    pub api_base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Endpoints {
    pub fn new(auth_url: impl Into<String>, api_base_url: impl Into<String>) -> Self {
        Endpoints {
            auth_url: auth_url.into(),
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Defaults, overridden by `SPOTIFY_AUTH_URL` / `SPOTIFY_API_URL` when set.
    pub fn from_env() -> Self {
        Endpoints::from_vars(env_var)
    }

    /// Same as [`Endpoints::from_env`] with variables resolved by `var`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Endpoints::default();
        Endpoints::new(
            var("SPOTIFY_AUTH_URL").unwrap_or(defaults.auth_url),
            var("SPOTIFY_API_URL").unwrap_or(defaults.api_base_url),
        )
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn require(var: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    var(key).ok_or_else(|| Error::ConfigurationError(format!("{key} is not set")))
}

/// Bearer token from the client-credentials grant. Lives for the whole run and is never refreshed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        AccessToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// `Bearer` authorization value for a token.
pub fn auth_header(token: &AccessToken) -> String {
    format!("Bearer {}", token.as_str())
}

/// Thin client over the token endpoint and the artist endpoints of the Web API.
pub struct SpotifyClient {
    http: reqwest::Client,
    credentials: Credentials,
    endpoints: Endpoints,
}

impl SpotifyClient {
    pub fn new(credentials: Credentials, endpoints: Endpoints) -> Self {
        SpotifyClient {
            http: reqwest::Client::new(),
            credentials,
            endpoints,
        }
    }

    // Create a SpotifyClient from environment variables or raise a configuration error
    pub fn try_default() -> Result<Self> {
        SpotifyClient::from_vars(env_var)
    }

    /// Same as [`SpotifyClient::try_default`] with variables resolved by `var`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let credentials = Credentials::from_vars(&var).map_err(|e| {
            Error::ConfigurationError(format!(
                "Missing Spotify credentials in environment variables. {e}"
            ))
        })?;
        Ok(SpotifyClient::new(credentials, Endpoints::from_vars(&var)))
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Exchange the client credentials for an access token.
    pub async fn obtain_token(&self) -> Result<AccessToken> {
        debug!("Requesting access token from {}", self.endpoints.auth_url);
        let response = self
            .http
            .post(&self.endpoints.auth_url)
            .header(AUTHORIZATION, self.credentials.basic_auth_header())
            // Serializes to x-www-form-urlencoded and sets the content type
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let token: TokenResponse = read_json(response).await?;
        debug!("Obtained access token");
        Ok(AccessToken(token.access_token))
    }

    /// Search for an artist by name, keeping only the provider's best match.
    pub async fn artist_search(&self, token: &AccessToken, name: &str) -> Result<SearchOutcome> {
        let url = format!("{}/search", self.endpoints.api_base_url);
        debug!("Searching artist {name:?}");
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, auth_header(token))
            .query(&[("q", name), ("type", "artist"), ("limit", "1")])
            .send()
            .await?;

        let search: ArtistSearchResponse = read_json(response).await?;
        Ok(SearchOutcome::from(search))
    }

    /// Top tracks of an artist in provider order.
    ///
    /// Without a `market` the provider picks the country from the token's account context.
    pub async fn artist_top_tracks(
        &self,
        token: &AccessToken,
        artist_id: &str,
        market: Option<&str>,
    ) -> Result<Vec<Track>> {
        let url = format!(
            "{}/artists/{artist_id}/top-tracks",
            self.endpoints.api_base_url
        );
        let mut request = self.http.get(url).header(AUTHORIZATION, auth_header(token));
        if let Some(market) = market {
            request = request.query(&[("market", market)]);
        }
        let response = request.send().await?;

        let top: TopTracksResponse = read_json(response).await?;
        debug!("Fetched {} top tracks for {artist_id}", top.tracks.len());
        Ok(top.tracks.into_iter().map(Track::from).collect())
    }

    /// Artists the provider considers related, in provider order.
    pub async fn related_artists(
        &self,
        token: &AccessToken,
        artist_id: &str,
    ) -> Result<Vec<RelatedArtist>> {
        let url = format!(
            "{}/artists/{artist_id}/related-artists",
            self.endpoints.api_base_url
        );
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, auth_header(token))
            .send()
            .await?;

        let related: RelatedArtistsResponse = read_json(response).await?;
        debug!(
            "Fetched {} related artists for {artist_id}",
            related.artists.len()
        );
        Ok(related
            .artists
            .into_iter()
            .map(RelatedArtist::from)
            .collect())
    }
}

// Reject non-success statuses with the body attached, then parse the body as JSON.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(Error::UnexpectedResponse(format!("{status}: {body}")));
    }
    Ok(serde_json::from_str(&body)?)
}
