//! Field schemas and request shaping

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    coerce::to_json_number,
    error::{FormError, Result},
    state::FormState,
};

/// Name of the selector field added to every request
pub const MODEL_NAME_FIELD: &str = "model_name";

/// One choice of a select field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Pick one of a fixed set of coded values
    Select { options: &'static [SelectOption] },
    /// Free numeric entry; `step` is the input granularity hint
    Number { step: f64 },
}

/// How a field's value is encoded in the request body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitAs {
    /// Sent verbatim as a JSON string
    Text,
    /// Parsed as a float, `null` when unparseable
    Float,
}

/// One form field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub default: &'static str,
    pub submit_as: SubmitAs,
}

impl FieldSpec {
    /// Select option matching `value`, if this is a select field
    pub fn option(&self, value: &str) -> Option<&'static SelectOption> {
        match self.kind {
            FieldKind::Select { options } => options.iter().find(|o| o.value == value),
            FieldKind::Number { .. } => None,
        }
    }

    /// Human-readable rendering of a value for this field
    pub fn display_value(&self, value: &str) -> String {
        match self.option(value) {
            Some(option) => format!("{} ({})", option.label, option.value),
            None => value.to_string(),
        }
    }
}

/// A complete form: identity plus ordered fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormSchema {
    pub id: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

impl FormSchema {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Like [`FormSchema::field`] but an unknown name is an error
    pub fn require_field(&self, name: &str) -> Result<&'static FieldSpec> {
        self.field(name).ok_or_else(|| FormError::UnknownField {
            form: self.id.to_string(),
            field: name.to_string(),
        })
    }

    /// Fields coerced to numbers at submit time
    pub fn coerced_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|f| f.submit_as == SubmitAs::Float)
    }

    /// Fresh state holding every field's default
    pub fn initial_state(&self) -> FormState {
        FormState::from_pairs(self.fields.iter().map(|f| (f.name, f.default)))
    }

    /// Split a `NAME=VALUE` edit, checking the name belongs to this form.
    ///
    /// Only the first `=` separates; the value is kept verbatim.
    pub fn parse_assignment<'a>(&self, assignment: &'a str) -> Result<(&'static str, &'a str)> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| FormError::InvalidAssignment(assignment.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(FormError::InvalidAssignment(assignment.to_string()));
        }
        Ok((self.require_field(name)?.name, value))
    }

    /// Build the JSON body for one model.
    ///
    /// Every state entry is sent as a string, coerced fields are replaced by numbers and
    /// `model_name` is added last. Schema fields come first in schema order.
    pub fn shape_request(&self, state: &FormState, model_name: &str) -> Map<String, Value> {
        let mut body = Map::new();

        for field in self.fields {
            if let Some(value) = state.get(field.name) {
                let encoded = match field.submit_as {
                    SubmitAs::Text => Value::String(value.to_string()),
                    SubmitAs::Float => to_json_number(value),
                };
                body.insert(field.name.to_string(), encoded);
            }
        }

        for (name, value) in state.iter() {
            if self.field(name).is_none() && name != MODEL_NAME_FIELD {
                body.insert(name.to_string(), Value::String(value.to_string()));
            }
        }

        body.insert(
            MODEL_NAME_FIELD.to_string(),
            Value::String(model_name.to_string()),
        );
        body
    }
}
