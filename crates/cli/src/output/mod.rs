//! Rendering of results for the terminal. Renderers build strings; the
//! command handlers decide where they go.

mod json;
mod table;
mod tree;

pub use json::{lookup_json, reverse_json, trace_json};
pub use table::{render_lookup, render_lookup_failure, render_reverse_failure};
pub use tree::{render_trace, trace_summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Format::Json
        } else {
            Format::Text
        }
    }
}
