// src/lib.rs
//! Genealogy archive core: family aggregation, people search, relationship
//! resolution and force-directed tree layout over a read-only snapshot.

pub mod cli;
pub mod config;
pub mod dates;
pub mod error;
pub mod exit;
pub mod family;
pub mod layout;
pub mod logging;
pub mod model;
pub mod relations;
pub mod search;
pub mod snapshot;
