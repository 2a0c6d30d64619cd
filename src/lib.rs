//! Artistscope - look up an artist on Spotify from the command line
//!
//! This library resolves an artist name through the Spotify Web API and
//! collects the follower count, genres, top tracks and related artists for
//! printing. It also carries the small patient intake helper shipped with
//! the same binary.

/// Client modules for interacting with the Spotify Web API
pub mod clients;
/// Patient intake status table and record rendering
pub mod intake;
/// The token, search, top tracks, related artists sequence
pub mod lookup;
/// Console rendering of a finished lookup
pub mod report;
