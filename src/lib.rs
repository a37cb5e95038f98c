//! Swiss-system tournament bookkeeping over SQLite: player registration,
//! match results, ranked standings and next-round pairings.
//!
//! # Examples
//!
//! ```
//! use swisspair::Tournament;
//!
//! let t = Tournament::open_in_memory().expect("open");
//! let ann = t.register_player("Ann").expect("register");
//! let bob = t.register_player("Bob").expect("register");
//! t.report_match(ann, bob).expect("report");
//!
//! let standings = t.player_standings().expect("standings");
//! assert_eq!(standings[0].id, ann);
//! assert_eq!((standings[0].wins, standings[0].matches), (1, 1));
//!
//! let pairs = t.swiss_pairings().expect("pairings");
//! assert_eq!(pairs[0].ids(), (ann, bob));
//! ```
//!
//! File-backed usage with configuration from the environment:
//! ```no_run
//! use swisspair::{persist::StoreConfig, Tournament};
//!
//! let config = StoreConfig::from_env().expect("config");
//! let t = Tournament::open(&config).expect("open");
//! for pairing in t.swiss_pairings().expect("pairings") {
//!     println!("{} vs {}", pairing.name1, pairing.name2);
//! }
//! ```

/// Registration, results, ranking and pairing operations.
pub mod core;
/// Error taxonomy.
pub mod error;
/// Store configuration and SQLite implementation.
pub mod persist;
/// Versioned standings export.
pub mod report;
/// Player name sanitization.
pub mod sanitize;
/// Public tournament facade.
pub mod tournament;
/// Shared primitive IDs and records.
pub mod types;

pub use error::{TournamentError, TournamentResult};
pub use tournament::Tournament;
pub use types::{MatchResult, Pairing, PlayerId, Standing};
