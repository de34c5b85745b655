//! NutroTrack Library
//!
//! Core functionality for diet tracking and nutrition lookup.

pub mod build_info;
pub mod db;
pub mod exercise;
pub mod facts;
pub mod lookup;
pub mod mcp;
pub mod models;
pub mod stats;
pub mod tools;
