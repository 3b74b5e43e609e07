//! Strokecast form model
//!
//! One parameterized form replaces the two hand-written variants: each variant is a
//! [`FormSchema`] (field names, labels, kinds, options, defaults) and the state holder
//! plus request shaping are shared.

pub mod coerce;
pub mod error;
pub mod schema;
pub mod state;
pub mod variants;

pub use coerce::{parse_float, to_json_number};
pub use error::{FormError, Result};
pub use schema::{FieldKind, FieldSpec, FormSchema, SelectOption, SubmitAs};
pub use state::FormState;
pub use variants::FormVariant;
