//! Fuzz target for IRC line parsing
//!
//! Feeds arbitrary UTF-8 to the parser and the scanner primitives; none of
//! them may panic, and accepted lines must keep the prefix invariants.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = str::from_utf8(data) else {
        return;
    };

    for pos in [0, input.len() / 2, input.len(), input.len() + 1] {
        let _ = irc_parse_line::skip_spaces(input, pos);
        assert!(irc_parse_line::find_line_end(input, pos) <= input.len());
    }

    if let Ok(msg) = irc_parse_line::parse_line(input) {
        assert!(!msg.verb.is_empty());
        if msg.user().is_some() {
            assert!(msg.source().is_some() && msg.host().is_some());
        }
        let owned = msg.to_message();
        assert_eq!(owned.verb, msg.verb);
    }
});
