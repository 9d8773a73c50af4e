//! Tests for the curve model
//!
//! Tests are organized by topic:
//! - `curve` - Sample domain and density values
//! - `statistics` - Mode/median/mean relationships
//! - `classification` - Skew categories and their display text
//! - `snapshot` - Bundled output and serialization

mod classification;
mod snapshot;
mod statistics;
