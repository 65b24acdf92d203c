//! Project loading tests.
