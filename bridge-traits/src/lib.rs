//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the core library and
//! platform-specific implementations. Each trait represents a capability that
//! the core requires but that must be implemented differently per platform
//! (desktop, mobile, web).
//!
//! ## Traits
//!
//! ### Storage
//! - [`PersistentStore`](storage::PersistentStore) - Durable key-value document
//!   store holding favorites, settings and provider registrations
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate | Status |
//! |----------|---------------------|--------|
//! | Desktop  | `bridge-desktop`    | ✅ In Progress |
//! | Mobile   | TBD                 | 📋 Planned |
//! | Web      | TBD                 | 📋 Planned |
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type for
//! consistent error handling. Platform implementations should:
//!
//! - Convert platform-specific errors to `BridgeError`
//! - Provide actionable error messages
//! - Include error context (e.g., file paths, keys)
//!
//! ## Thread Safety
//!
//! Bridge traits require `Send + Sync` on native targets (see
//! [`PlatformSendSync`](platform::PlatformSendSync)) so a single adapter can
//! be shared behind an `Arc`.

pub mod error;
pub mod platform;
pub mod storage;

pub use error::BridgeError;

// Re-export commonly used types
pub use platform::PlatformSendSync;
pub use storage::PersistentStore;
