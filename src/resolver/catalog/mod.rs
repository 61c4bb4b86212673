//! Music catalog integration (Deezer public API)
//!
//! Search by artist/title, then album detail and track listing for the
//! first hit.
//!
//! API docs: https://developers.deezer.com/api

pub mod dto;
mod adapter;
mod client;

pub use client::{CatalogClient, search_query};
