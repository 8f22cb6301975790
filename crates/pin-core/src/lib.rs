//! pin core library
//!
//! Client-side pieces of `pin`, a command-line tool for managing the tags
//! of a Pinboard (pinboard.in) account.
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let client = PinboardClient::from_config(&config, "user:TOKEN")?;
//!
//! let mut tags = client.get_tags()?;
//! TagOrdering::from_flags(true, false).sort(&mut tags);
//! print!("{}", TagTable::new(&tags).render(&tags));
//! ```
//!
//! # Modules
//!
//! - `client`: API client and the HTTP transport it runs on
//! - `models`: The `Tag` type and listing parser
//! - `ordering`: The four sort orders of a listing
//! - `table`: Fixed-width text table layout
//! - `config`: Application configuration
//! - `error`: API error type

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod ordering;
pub mod table;

pub use client::{HttpResponse, HttpTransport, PinboardClient, Transport, Url};
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use models::{parse_tag_counts, Tag};
pub use ordering::{SortDirection, SortKey, TagOrdering};
pub use table::{digit_count, TagTable};
