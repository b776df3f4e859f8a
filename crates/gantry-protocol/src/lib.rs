//! # gantry-protocol
//!
//! JSON-RPC 2.0 wire types for gantry services.
//! This crate defines the envelopes exchanged between clients and a
//! gantry RPC server; it carries no dispatch logic of its own.

pub mod jsonrpc;

pub use jsonrpc::*;
