//! Networking for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps each endpoint the pages call; wire types come from `quiz`.

pub mod api;
