//! Version resolution engine
//!
//! Resolves labeled versions from heterogeneous upstream sources and reduces
//! them to canonical `major.minor.patch` strings.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Orchestrator │────▶│  Providers  │────▶│  Normalize  │
//! │ (fail-fast)  │     │ (5 sources) │     │ (tag clean) │
//! └──────────────┘     └─────────────┘     └─────────────┘
//!                        │         │
//!                        ▼         ▼
//!                 ┌──────────┐ ┌───────────────┐
//!                 │ Registry │ │ CommandRunner │
//!                 │ (GitHub) │ │ (apt, pyenv)  │
//!                 └──────────┘ └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`orchestrator`]: Runs providers in a fixed order and merges results
//! - [`provider`]: Provider trait and kinds
//! - [`providers`]: Release list, latest release, package cache, version manager, vendor feed
//! - [`registry`]: Trait for source forge release queries
//! - [`registries`]: GitHub REST implementation
//! - [`command`]: Trait for running external programs
//! - [`normalize`]: Canonical version extraction
//! - [`error`]: Error types for resolution
//! - [`types`]: `ResolvedVersion` and `VersionMap`

pub mod command;
pub mod error;
pub mod normalize;
pub mod orchestrator;
pub mod provider;
pub mod providers;
pub mod registries;
pub mod registry;
pub mod types;
