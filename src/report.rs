use std::fmt;

use crate::clients::entities::{Artist, RelatedArtist, Track};
use crate::lookup::LookupOutcome;

/// Printed once when the search comes back empty.
pub const NOT_FOUND_NOTICE: &str = "No artist with this name exists.";

/// Everything fetched for one artist, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistReport {
    pub artist: Artist,
    // both in provider order
    pub top_tracks: Vec<Track>,
    pub related: Vec<RelatedArtist>,
}

impl fmt::Display for ArtistReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.artist.name;

        writeln!(
            f,
            "{name} currently has {} followers. They cover genres such as: ",
            self.artist.followers
        )?;
        for genre in &self.artist.genres {
            writeln!(f, "{genre}")?;
        }
        writeln!(f)?;

        writeln!(f, "Here are some of {name}'s top tracks: ")?;
        for (idx, track) in self.top_tracks.iter().enumerate() {
            writeln!(
                f,
                "{}. {}: {} seconds | Popularity score: {}",
                idx + 1,
                track.name,
                track.duration_secs(),
                track.popularity
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Here are some similar artists: ")?;
        for artist in &self.related {
            writeln!(f, "{}", artist.name)?;
        }
        Ok(())
    }
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupOutcome::Found(report) => fmt::Display::fmt(report, f),
            LookupOutcome::NotFound => writeln!(f, "{NOT_FOUND_NOTICE}"),
        }
    }
}
