//! # NoteBoard Architecture
//!
//! NoteBoard is a **UI-agnostic note board client**. It keeps a local view of the notes
//! held by a REST-style server and turns user interactions (click a card, edit the form,
//! submit, cancel, delete) into state transitions and network calls.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders the board, handles terminal I/O│
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Board Layer (board.rs, state.rs)                           │
//! │  - Maps interactions to transitions and requests            │
//! │  - Merges server responses into the view state              │
//! │  - Pure state, no I/O assumptions                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Sync Layer (sync/)                                         │
//! │  - Abstract SyncClient trait                                │
//! │  - HttpSyncClient (production), InMemorySync (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Server Is Authoritative
//!
//! The client never invents an id. Created and updated notes are taken verbatim from the
//! server response. A delete is applied locally only once the server accepted it. A failed
//! request is logged and otherwise leaves the board exactly as it was.
//!
//! ## Testing Strategy
//!
//! 1. **State** (`state.rs`): plain unit tests of the list and draft transitions.
//! 2. **Board** (`board.rs`): interaction scenarios driven against [`sync::memory::InMemorySync`].
//! 3. **HTTP** (`tests/http_sync.rs`): the real client against an in-process HTTP server.
//! 4. **CLI** (`tests/cli.rs`): the binary, for argument handling and output.
//!
//! ## Module Overview
//!
//! - [`board`]: Event dispatch, requests and response merging
//! - [`state`]: The view state and its transitions
//! - [`sync`]: Sync client abstraction and implementations
//! - [`model`]: Core data types (`Note`, `NoteDraft`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, rendering and the interactive session for the binary (not part of the lib API)

pub mod board;
pub mod config;
pub mod error;
pub mod model;
pub mod state;
pub mod sync;
