use serde::{Deserialize, Deserializer, Serialize, de};

/// Artist as resolved by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub followers: u64,
    pub genres: Vec<String>,
}

/// One of an artist's top tracks, ranked by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub duration_ms: u64,
    // 0 to 100, checked when parsing
    pub popularity: u8,
}

impl Track {
    /// Whole seconds, truncated.
    pub fn duration_secs(&self) -> u64 {
        self.duration_ms / 1000
    }
}

/// Artist the provider considers similar. Only the name is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedArtist {
    pub name: String,
}

/// Result of an artist search. Callers must handle `NotFound` before using the artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Best match according to the provider's ranking
    Found(Artist),
    NotFound,
}

// Wire shapes of the Web API. Only the fields we print are mapped.

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct TokenResponse {
    pub access_token: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct Followers {
    pub total: u64,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct SpotifyAPIArtist {
    pub id: String,
    pub name: String,
    pub followers: Followers,
    pub genres: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct ArtistItems {
    pub items: Vec<SpotifyAPIArtist>,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct ArtistSearchResponse {
    pub artists: ArtistItems,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct SpotifyAPITrack {
    pub name: String,
    pub duration_ms: u64,
    #[serde(deserialize_with = "popularity_score")]
    pub popularity: u8,
}

const MAX_POPULARITY: u8 = 100;

fn popularity_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let score = u64::deserialize(deserializer)?;
    u8::try_from(score)
        .ok()
        .filter(|s| *s <= MAX_POPULARITY)
        .ok_or_else(|| {
            de::Error::custom(format!("popularity {score} is outside 0..={MAX_POPULARITY}"))
        })
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct TopTracksResponse {
    pub tracks: Vec<SpotifyAPITrack>,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct SpotifyAPIRelatedArtist {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct RelatedArtistsResponse {
    pub artists: Vec<SpotifyAPIRelatedArtist>,
}

impl From<SpotifyAPIArtist> for Artist {
    fn from(a: SpotifyAPIArtist) -> Artist {
        Artist {
            id: a.id,
            name: a.name,
            followers: a.followers.total,
            genres: a.genres,
        }
    }
}

impl From<SpotifyAPITrack> for Track {
    fn from(t: SpotifyAPITrack) -> Track {
        Track {
            name: t.name,
            duration_ms: t.duration_ms,
            popularity: t.popularity,
        }
    }
}

impl From<SpotifyAPIRelatedArtist> for RelatedArtist {
    fn from(a: SpotifyAPIRelatedArtist) -> RelatedArtist {
        RelatedArtist { name: a.name }
    }
}

impl From<ArtistSearchResponse> for SearchOutcome {
    fn from(response: ArtistSearchResponse) -> SearchOutcome {
        match response.artists.items.into_iter().next() {
            Some(artist) => SearchOutcome::Found(artist.into()),
            None => SearchOutcome::NotFound,
        }
    }
}
