//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use user_agent::prelude::*;
//!
//! let ua = UserAgent::parse("Opera/9.80 (Windows NT 6.1; U; en) Presto/2.12.388 Version/12.16");
//! assert_eq!(ua.browser().engine, "Presto");
//! ```
//!
//! The section model and tokenizer are left out; import them from the crate
//! root when working with raw sections.

pub use crate::{
    // Core types
    Browser, OsInfo, UserAgent,
    // Parsing
    Parser, normalize_os,
    // Bots
    Bot, BotDetector, NoBotDetection,
    // Identities
    Compat, EngineKind,
};
