//! Graze - Backtracking HTTP Request Parser
//!
//! Core library: a generic backtracking engine, the URI and HTTP grammars
//! built on top of it, and the assembly layer that turns span events into a
//! request record.

pub mod config;
pub mod engine;
pub mod grammar;
pub mod http;
