//! InnerTube API plumbing: profiles, HTTP client, session scraping and
//! the player endpoint

pub mod client;
pub mod player;
pub mod profile;
pub mod session;

pub use client::*;
pub use player::*;
pub use profile::*;
pub use session::*;
