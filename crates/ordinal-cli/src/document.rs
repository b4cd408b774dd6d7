//! Reading sub-elements from a TOML document.
//!
//! Every top-level key of the document is a sub-element, in document order.
//! A sub-element that is a table may carry its directive in a metadata
//! table:
//!
//! ```toml
//! [footer.__meta]
//! position = "end"
//!
//! [body]
//! text = "no position, stays in the middle"
//! ```

use std::io;

use log::trace;
use thiserror::Error;
use toml::{Table, Value};

use ordinal::{OrdinalError, config::InputConfig};

/// Raw sub-element: its key and directive text.
pub type Entry = (String, Option<String>);

/// Errors in the structure of an input document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to parse TOML document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("`{key}.{meta_key}` must be a table")]
    InvalidMeta { key: String, meta_key: String },

    #[error("`{key}.{meta_key}.{position_key}` must be a string or a number")]
    InvalidPosition {
        key: String,
        meta_key: String,
        position_key: String,
    },
}

impl From<DocumentError> for OrdinalError {
    fn from(err: DocumentError) -> Self {
        OrdinalError::Io(io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

/// Read the sub-elements of `source` in document order.
///
/// # Errors
///
/// Returns [`DocumentError`] when `source` is not valid TOML or a metadata
/// entry has the wrong type. Malformed directive text is not checked here.
pub fn entries(source: &str, input: &InputConfig) -> Result<Vec<Entry>, DocumentError> {
    let document: Table = toml::from_str(source)?;

    document
        .iter()
        .map(|(key, value)| {
            let position = position(key, value, input)?;
            trace!(key, position:?; "Read sub-element");
            Ok((key.clone(), position))
        })
        .collect()
}

fn position(
    key: &str,
    value: &Value,
    input: &InputConfig,
) -> Result<Option<String>, DocumentError> {
    let Some(meta) = value.as_table().and_then(|table| table.get(input.meta_key())) else {
        return Ok(None);
    };
    let Some(meta) = meta.as_table() else {
        return Err(DocumentError::InvalidMeta {
            key: key.to_string(),
            meta_key: input.meta_key().to_string(),
        });
    };

    match meta.get(input.position_key()) {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(Value::Integer(number)) => Ok(Some(number.to_string())),
        Some(Value::Float(number)) => Ok(Some(number.to_string())),
        Some(_) => Err(DocumentError::InvalidPosition {
            key: key.to_string(),
            meta_key: input.meta_key().to_string(),
            position_key: input.position_key().to_string(),
        }),
    }
}
