//! # ytlinks - YouTube link resolver
//!
//! Resolves a YouTube video page URL into playable stream links and
//! subtitle tracks by calling the InnerTube player API.
//!
//! ## Features
//!
//! - Video ID extraction from every known URL shape, including
//!   percent-encoded and wrapped redirector forms
//! - WEB and ANDROID client profiles, plus host variants
//! - HLS multivariant playlist parsing with per-variant language tags
//! - Progressive format fallback when no manifest is offered
//! - Links and subtitles pushed to caller callbacks as they are found
//!
//! ## Example
//!
//! ```rust,no_run
//! use ytlinks::{ClientProfile, YoutubeResolver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resolver = YoutubeResolver::new(ClientProfile::web());
//!
//!     resolver
//!         .resolve(
//!             "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
//!             |sub| println!("subtitle [{}] {}", sub.language, sub.url),
//!             |link| println!("{} {}p {}", link.name, link.quality, link.url),
//!         )
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod hls;
pub mod links;
pub mod platform;
pub mod resolver;
pub mod utils;

// Re-export main types
pub use error::ResolveError;
pub use links::{ExtractorLink, LinkType, SubtitleTrack};
pub use platform::profile::ClientProfile;
pub use resolver::YoutubeResolver;

/// Result type alias for ytlinks operations
pub type Result<T> = std::result::Result<T, ResolveError>;
