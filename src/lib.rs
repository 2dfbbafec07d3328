//! Heuristic parser for HTTP `User-Agent` headers.
//!
//! This crate turns the free-text `User-Agent` header sent by HTTP clients
//! into a structured record: browser and rendering engine, platform,
//! operating system, localization and whether the client is mobile.
//!
//! # Overview
//!
//! Headers are loosely structured as a sequence of sections:
//!
//! ```text
//! Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2228.0 Safari/537.36
//! ^^^^^^^ ^^^  ^^^^^^^^^^^^^^^^^^^^^  ^^^^^^^^^^^                           ^^^^^^
//! name    ver  comment tokens         engine                                browser
//! ```
//!
//! Parsing never fails. Unknown or malformed headers produce a record whose
//! fields are only partially filled in.
//!
//! # Quick Start
//!
//! ```rust
//! use user_agent::UserAgent;
//!
//! let ua = UserAgent::parse("Mozilla/5.0 (compatible; MSIE 9.0; Windows NT 6.1; Trident/5.0)");
//!
//! assert_eq!(ua.browser().name, "Internet Explorer");
//! assert_eq!(ua.browser().version, "9.0");
//! assert_eq!(ua.browser().engine, "Trident");
//! assert_eq!(ua.platform(), "Windows");
//!
//! let os = ua.os_info();
//! assert_eq!(os.name, "Windows");
//! assert_eq!(os.version, "7");
//! ```
//!
//! # Pipeline
//!
//! | Stage | Input | Output |
//! |-------|-------|--------|
//! | [`tokenize`] | raw header | [`Sections`], mobile token |
//! | browser | all sections | [`Browser`] (engine is final after this stage) |
//! | platform | first section, browser | platform, OS, localization, mobile |
//! | [`BotDetector`] | undecided headers | bot name and version |
//!
//! [`normalize_os`] and [`OsInfo`] clean up the raw OS string afterwards.
//!
//! # Bots
//!
//! Some headers cannot be classified without knowing about crawlers. The
//! default [`Parser`] leaves them [`undecided`](UserAgent::is_undecided);
//! supply a [`BotDetector`] through [`Parser::with_bot_detector`] to resolve
//! them.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`UserAgent`], [`Browser`] and
//!   [`OsInfo`].

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod bot;
mod browser;
mod constants;
mod identity;
#[cfg(kani)]
mod kani_impls;
mod os;
mod parser;
mod platform;
pub mod prelude;
mod section;
mod tokenizer;
mod user_agent;

pub use bot::{Bot, BotDetector, NoBotDetection};
pub use browser::Browser;
pub use constants::{DALVIK, MOBILE_SECTION, MOZILLA, OPERA};
pub use identity::{Compat, EngineKind};
pub use os::{OsInfo, normalize_os};
pub use parser::Parser;
pub use section::{Section, Sections};
pub use tokenizer::{Tokenized, Tokenizer, tokenize};
pub use user_agent::UserAgent;
