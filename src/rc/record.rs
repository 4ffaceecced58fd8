//! Field-ordered records built from schema-less API objects

use serde_json::{Map, Value};

use crate::error::{RcError, Result};

/// One API object projected onto an explicit field order
///
/// Every resource kind shares this type; `type_label` tells them apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    type_label: String,
    field_order: Vec<String>,
    fields: Map<String, Value>,
}

impl Record {
    /// Build a record from a JSON object.
    ///
    /// With `field_order` set, every listed name must be a key of `object`,
    /// otherwise construction fails with [`RcError::FieldMismatch`]. Without
    /// it, the object's own key order is used.
    pub fn new(
        type_label: &str,
        object: Map<String, Value>,
        field_order: Option<&[&str]>,
    ) -> Result<Self> {
        let field_order: Vec<String> = match field_order {
            Some(order) => {
                let missing: Vec<String> = order
                    .iter()
                    .filter(|name| !object.contains_key(**name))
                    .map(|name| name.to_string())
                    .collect();
                if !missing.is_empty() {
                    return Err(RcError::FieldMismatch {
                        label: type_label.to_string(),
                        missing,
                    });
                }
                order.iter().map(|name| name.to_string()).collect()
            }
            None => object.keys().cloned().collect(),
        };

        Ok(Self {
            type_label: type_label.to_string(),
            field_order,
            fields: object,
        })
    }

    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    /// Field names in display order
    pub fn keys(&self) -> &[String] {
        &self.field_order
    }

    /// Values in display order
    pub fn values(&self) -> Vec<&Value> {
        self.items().into_iter().map(|(_, v)| v).collect()
    }

    /// (name, value) pairs in display order
    pub fn items(&self) -> Vec<(&str, &Value)> {
        self.field_order
            .iter()
            .filter_map(|name| self.fields.get(name).map(|v| (name.as_str(), v)))
            .collect()
    }

    /// Look up any field of the source object, projected or not
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Display name: `"Order: 42"`, or `"Order:"` when there is no `id`
    pub fn name(&self) -> String {
        match self.fields.get("id") {
            Some(id) => format!("{}: {}", self.type_label, display_value(id)),
            None => format!("{}:", self.type_label),
        }
    }

    /// Human-readable block, one ` name: value` line per field
    pub fn to_block(&self) -> String {
        self.items()
            .into_iter()
            .map(|(k, v)| format!(" {}: {}", k, display_value(v)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Tabular row cells in display order
    pub fn to_row(&self) -> Vec<String> {
        self.values().into_iter().map(cell_value).collect()
    }
}

/// Text of a value for human-readable output
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        _ => cell_value(value),
    }
}

/// Text of a value for a tabular cell
pub fn cell_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
