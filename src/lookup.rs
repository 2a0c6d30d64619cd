use log::{debug, info};

use crate::clients::{
    entities::SearchOutcome,
    errors::Result,
    spotify::SpotifyClient,
};
use crate::report::ArtistReport;

// Configuration for the Lookup run
pub struct Config {
    pub spotify: SpotifyClient,
    // ISO 3166-1 alpha-2 country for the top tracks
    pub market: Option<String>,
}

/// Builds a [`Config`], falling back to the environment for anything left unset.
#[derive(Default)]
pub struct ConfigBuilder {
    spotify: Option<SpotifyClient>,
    market: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this client instead of one built from the environment.
    #[must_use]
    pub fn spotify(mut self, spotify: SpotifyClient) -> Self {
        self.spotify = Some(spotify);
        self
    }

    /// Ask for top tracks in a specific market.
    #[must_use]
    pub fn market(mut self, market: Option<String>) -> Self {
        self.market = market;
        self
    }

    /// Finish the config. Fails when no client was given and the environment has no credentials.
    pub fn build(self) -> Result<Config> {
        let spotify = match self.spotify {
            Some(s) => s,
            None => SpotifyClient::try_default()?,
        };
        Ok(Config {
            spotify,
            market: self.market,
        })
    }
}

/// What a lookup produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Artist resolved and all data fetched
    Found(ArtistReport),
    /// Nothing matched the query
    NotFound,
}

/// One artist lookup: token, search, top tracks, related artists. Strictly in that order.
pub struct Lookup {
    config: Config,
}

impl Lookup {
    /// Wrap a finished config.
    pub fn new(config: Config) -> Self {
        Lookup { config }
    }

    /// Run the whole lookup for `name`. A fresh token is obtained on every call.
    pub async fn run(&self, name: &str) -> Result<LookupOutcome> {
        let spotify = &self.config.spotify;

        info!("Authorizing client ...");
        debug!("Using Web API at {}", spotify.endpoints().api_base_url);
        let token = spotify.obtain_token().await?;

        info!("Searching for {name:?} ...");
        let artist = match spotify.artist_search(&token, name).await? {
            SearchOutcome::Found(artist) => artist,
            SearchOutcome::NotFound => {
                info!("No artist matched {name:?}");
                return Ok(LookupOutcome::NotFound);
            }
        };
        debug!("Resolved {name:?} to {} ({})", artist.name, artist.id);

        let top_tracks = spotify
            .artist_top_tracks(&token, &artist.id, self.config.market.as_deref())
            .await?;
        let related = spotify.related_artists(&token, &artist.id).await?;

        info!(
            "Lookup completed: {} top tracks, {} related artists",
            top_tracks.len(),
            related.len()
        );
        Ok(LookupOutcome::Found(ArtistReport {
            artist,
            top_tracks,
            related,
        }))
    }
}
