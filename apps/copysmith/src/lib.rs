//! Copysmith — marketing copy generation over a hosted completion API.
//!
//! Two front ends (the `copysmith-api` web service and the `copysmith` CLI)
//! share the single generation pipeline in [`generation::generator`].

pub mod config;
pub mod errors;
pub mod generation;
pub mod llm_client;
pub mod routes;
pub mod state;
