// Creator ⇄ campaign matching engine.
// Scoring, gating and ranking are pure functions over in-memory snapshots;
// handlers fetch the snapshots from the candidate store.

pub mod explain;
pub mod handlers;
pub mod models;
pub mod ranking;
pub mod scoring;
