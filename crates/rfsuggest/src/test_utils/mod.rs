//
// test_utils/mod.rs
//
// Shared fixtures for unit and integration tests
//

pub mod fixture_index;
pub mod scripted_repo;
