//! Presentation side of the shards calculator: form state with lenient
//! numeric entry, scenario files, and table/JSON rendering.

pub mod form;
pub mod parse;
pub mod render;
pub mod scenario;
pub mod types;

pub use form::{CalculatorForm, FIELD_NAMES};
pub use parse::parse_amount;
pub use render::{render_outcome, render_table, to_fixed, to_json, to_json_value};
pub use scenario::ScenarioFormat;
pub use types::*;
