//! Release watching layer for the Go toolchain
//!
//! This module fetches the Go download page, works out the newest release,
//! and announces it to a chat webhook the first time it is seen.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Page     │────▶│  Extractor  │────▶│  Workflow   │
//! │  (fetch)    │     │ (version)   │     │ (orchestr.) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                           │   │   │
//!                     ┌─────────────────────┘   │   └──────────────┐
//!                     ▼                         ▼                  ▼
//!              ┌─────────────┐          ┌─────────────┐    ┌─────────────┐
//!              │    Store    │          │   Message   │    │  Notifier   │
//!              │  (records)  │          │  (format)   │    │  (webhook)  │
//!              └─────────────┘          └─────────────┘    └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`page`]: Fetches the download listing page
//! - [`extractor`]: Finds the latest release identifier in the listing
//! - [`semver`]: Version parsing and major/minor classification
//! - [`message`]: Builds the notification text and links
//! - [`store`]: SQLite-backed version records
//! - [`notifier`]: Posts messages to the chat webhook
//! - [`workflow`]: Sequences one release check
//! - [`error`]: Error types for every step

pub mod error;
pub mod extractor;
pub mod message;
pub mod notifier;
pub mod page;
pub mod semver;
pub mod store;
pub mod workflow;
