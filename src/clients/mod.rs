/// Data entities for artists and tracks
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Spotify Web API client
pub mod spotify;

pub use entities::{Artist, RelatedArtist, SearchOutcome, Track};
pub use spotify::{AccessToken, Credentials, Endpoints, SpotifyClient};
