//! Kani proof harnesses for the tokenizer and classifiers.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::os::{OsInfo, normalize_os};
use crate::parser::Parser;
use crate::tokenizer::Tokenizer;

/// Bytes that drive the tokenizer and classifiers into distinct branches.
const UA_CHARS: &[u8] = b"M/5 ();UNTx";

/// Upper bound on generated header length, kept small for tractability.
const MAX_LEN: usize = 8;

fn arbitrary_header() -> String {
    let len: usize = kani::any();
    kani::assume(len <= MAX_LEN);

    let mut header = String::with_capacity(len);
    for _ in 0..len {
        let idx: usize = kani::any();
        header.push(UA_CHARS[idx % UA_CHARS.len()] as char);
    }
    header
}

#[kani::proof]
#[kani::unwind(10)]
fn tokenizer_advances_on_every_section() {
    let header = arbitrary_header();
    let mut tokenizer = Tokenizer::new(&header);
    let mut previous = tokenizer.position();
    while tokenizer.next().is_some() {
        assert!(tokenizer.position() > previous);
        previous = tokenizer.position();
    }
}

#[kani::proof]
#[kani::unwind(10)]
fn parse_never_panics() {
    let header = arbitrary_header();
    let ua = Parser::new().parse(&header);
    assert_eq!(ua.ua(), header);
}

#[kani::proof]
#[kani::unwind(10)]
fn normalize_os_only_rewrites_nt() {
    let header = arbitrary_header();
    let normalized = normalize_os(&header);
    if !header.contains(" NT ") {
        assert_eq!(normalized, header);
    }
}

#[kani::proof]
#[kani::unwind(10)]
fn os_info_keeps_full_name() {
    let header = arbitrary_header();
    let info = OsInfo::from_os(&header);
    assert_eq!(info.full_name, header);
    assert!(!info.version.contains('_'));
}
