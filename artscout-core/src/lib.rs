//! Artwork discovery engine.
//!
//! This crate provides:
//! - Attribute ban list with toggle semantics
//! - Random candidate selection with a bounded retry loop
//! - Session state: current record, bounded history, ban set
//! - A scripted `MockSource` for tests without network access
//!
//! # Quick Start
//!
//! ```ignore
//! use artscout_core::{CandidatePool, Session};
//! use met_client::MetClient;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut session = Session::new(CandidatePool::default());
//!     let source = MetClient::new();
//!     let mut rng = StdRng::from_entropy();
//!
//!     if session.discover(&source, &mut rng).await {
//!         println!("{}", session.current().unwrap().display_title());
//!     }
//! }
//! ```

pub mod ban;
pub mod engine;
pub mod pool;
pub mod session;
pub mod testing;

// Primary public API
pub use ban::{BanKind, BanList, BanPredicate};
pub use engine::{discover, DiscoverError, RecordSource};
pub use pool::CandidatePool;
pub use session::{Session, HISTORY_LIMIT};
pub use testing::MockSource;

// Record type comes from the client crate; re-export for convenience.
pub use met_client::ArtObject;
