//! CLI module for the Heroes API
//!
//! - `serve`: run the HTTP server
//! - `routes`: print the route table

pub mod routes;
pub mod serve;

use clap::{Parser, Subcommand};

/// Heroes API - teams and the heroes that belong to them
#[derive(Parser)]
#[command(name = "heroes-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Print every route the server exposes
    Routes,
}
