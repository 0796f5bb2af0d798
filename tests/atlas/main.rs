//! Integration tests for `atlasplay-rs`: load pipeline, playback state
//! machine and stage adapter wired together the way a host application
//! would use them. Fixtures are synthesized in-memory; no binary test data
//! lives in the tree.

mod fixture;
mod load;
mod playback;
mod staging;
