//! Generated bindings live in `generated/`; see `build.rs`.
