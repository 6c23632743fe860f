//! Embedded vocabularies
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/classic.rs"));
include!(concat!(env!("OUT_DIR"), "/extended.rs"));
