//! Dynamic, optionally-paginated search queries over a two-entity schema.
//!
//! A `Member` optionally belongs to a `Team` (nullable foreign key); the
//! reverse "members of a team" view is derived through a join, never stored.
//! Callers build a [`SearchFilter`] from whatever optional criteria they
//! have, and the repository compiles the present fields into a single
//! conjunction — absent fields impose no constraint, so an empty filter
//! selects everything.
//!
//! Two read paths are exposed:
//! - [`repo::search`] — unpaged, left-joined projection rows;
//! - [`repo::search_page`] — a bounded slice plus the total count under the
//!   same condition, with the count query skipped when a short page already
//!   proves the total.
//!
//! The crate never opens or commits transactions. Every repository function
//! is generic over [`sea_orm::ConnectionTrait`], so the caller decides
//! whether a call runs on a plain connection or inside an open transaction.

pub mod db;
pub mod entity;
pub mod error;
pub mod filter;
pub mod page;
pub mod repo;
pub mod timing;

pub use error::{Result, SearchError};
pub use filter::SearchFilter;
pub use page::{OrderBy, Page, PageRequest, SortDir, SortField};
pub use repo::{MemberTeamRow, NewMember};
