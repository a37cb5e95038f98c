//! Tournament operations over an explicit store handle.

/// Swiss pairing of ranked standings.
pub mod pairing;
/// Standings ranking.
pub mod ranking;
/// Player registration and counting.
pub mod registration;
/// Match result recording and clearing.
pub mod results;
