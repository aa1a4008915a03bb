//! # Facturier Architecture
//!
//! Facturier is a **UI-agnostic document ledger library** for a small service
//! company: a client directory plus the commercial documents issued against
//! it (quotes, invoices, maintenance contracts, warranty certificates,
//! intervention reports, receipts). It is not an application that happens to
//! have some library code — it is a library that a desktop or web shell wires
//! a form layer onto.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Facade owning the single in-memory aggregate             │
//! │  - Runs a pure command, persists, then commits              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the aggregate value             │
//! │  - Takes &AppState, returns a new AppState + the entity     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StateStore trait, whole-aggregate load/save     │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: The Aggregate Is a Value
//!
//! There is no shared mutable state. Commands never touch storage: each one
//! receives the current [`model::AppState`] by reference and returns a fresh
//! aggregate. The [`api::Facturier`] facade holds the only mutable reference,
//! saves the new aggregate first, and commits it in memory only after the
//! write succeeds — a failed operation leaves both the durable and in-memory
//! state exactly as they were. Cascade deletes are therefore atomic by
//! construction: one new aggregate, one save.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade — entry point for all operations
//! - [`commands`]: Business logic for clients, documents, settings, stats
//! - [`model`]: Core data types (`Client`, `Document`, `AppState`, ...)
//! - [`numbering`]: Sequential human-readable document numbers
//! - [`items`]: Line-item editing for a document being drafted
//! - [`projection`]: Read-only joins for the print layer
//! - [`store`]: Storage abstraction and implementations
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod items;
pub mod model;
pub mod numbering;
pub mod projection;
pub mod store;
