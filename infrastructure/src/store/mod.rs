//! Community datastore adapters.

pub mod rest;

pub use rest::RestCommunityStore;
