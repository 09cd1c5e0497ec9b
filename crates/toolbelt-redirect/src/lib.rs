//! Path to URL redirection for axum.
//!
//! A redirect handler looks a request path up in a fixed table and answers
//! with `302 Found` on a hit. On a miss it hands the request to a fallback
//! router, which may be another redirect handler, so handlers compose into a
//! chain. Tables come from a plain `HashMap` or from YAML/JSON lists of
//! `{path, url}` records; the two formats produce identical handlers.

pub mod error;
pub mod handler;
pub mod mapping;
pub mod server;

pub use error::{RedirectError, Result};
pub use handler::{format_handler, hello_router, json_handler, map_handler, yaml_handler};
pub use mapping::{build_map, parse_json, parse_yaml, MappingFormat, PathUrl};
pub use server::{shutdown_signal, RedirectServer, ServerConfig};
