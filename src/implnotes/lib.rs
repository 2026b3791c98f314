//! # implnotes
//!
//! Maintains a markdown knowledge base made of numbered entries plus one
//! summary index table. Appending an entry allocates the next ID, adds the
//! entry at the end of the file, adds a row to the index table and rewrites
//! every row's line range so the index keeps pointing at the right lines.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, prints messages, owns exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) -> Commands (commands/*.rs)                   │
//! │  - append, reindex, list                                    │
//! │  - Return `Result<CmdResult>`, never print                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Transforms (entry.rs, table.rs, document.rs)               │
//! │  - Pure functions over a `Document`                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - FileStore (atomic rewrite), InMemoryStore (tests)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Document Format
//!
//! Only two markers are relied upon:
//! - entry headings: `## 001 — Title`
//! - the index table header, starting with `| ID | Title |`
//!
//! Everything else in the file is free-form prose and is left alone.
//!
//! ## Module Overview
//!
//! - [`api`]: facade used by the binary
//! - [`commands`]: append / reindex / list
//! - [`entry`]: heading scan, ID allocation, entry blocks, line ranges
//! - [`table`]: index table locator, row parser and editor
//! - [`document`]: the line sequence being transformed
//! - [`model`]: `EntryId`, `LineRange`, `IndexRow`, `NewEntry`
//! - [`store`]: persistence
//! - [`config`]: notes file resolution
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod document;
pub mod entry;
pub mod error;
pub mod model;
pub mod store;
pub mod table;
