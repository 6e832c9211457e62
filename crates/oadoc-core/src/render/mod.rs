pub mod example;
pub mod fake;
pub mod flatten;
pub mod index;
pub mod type_label;

pub use example::ExampleSynthesizer;
pub use flatten::{FlattenedProperty, flatten_properties, flatten_schema};
pub use index::{Endpoint, TagGroup, UNTAGGED_GROUP, index_endpoints};
pub use type_label::{schema_label, type_label};
