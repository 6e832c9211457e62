pub mod config;
pub mod error;
pub mod markdown;
pub mod parse;
pub mod render;

pub use markdown::{MarkdownRenderer, escape_html, render_description};
pub use parse::document::Document;
pub use parse::ref_resolve::RefResolver;
pub use render::{Endpoint, ExampleSynthesizer, FlattenedProperty, TagGroup};
