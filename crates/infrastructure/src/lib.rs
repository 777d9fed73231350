//! wsrelay infrastructure: the TTL store, upstream HTTP clients and the
//! relay queue with its worker pool.
pub mod cache;
pub mod http;
pub mod relay;
