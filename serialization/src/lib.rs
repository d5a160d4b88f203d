use serde::{Deserialize, Serialize};
use tex_input::RawExpression;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub enum SerializedDataType {
    /// A versioned JSON envelope
    JsonExpression,
    /// The raw TeX, as is
    RawTex,
}

const CURRENT_VERSION: u32 = 1;

#[derive(Deserialize, Serialize)]
struct SerializedData<T> {
    version: u32,
    data: T,
}

#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("Could not serialize as JSON")]
    JsonExpression(#[from] serde_json::Error),
    #[error("Unsupported data version {0}")]
    UnsupportedVersion(u32),
}

pub fn serialize_expression(
    expression: &RawExpression,
    data_type: SerializedDataType,
) -> Result<String, SerializationError> {
    match data_type {
        SerializedDataType::JsonExpression => {
            let data = &SerializedData {
                version: CURRENT_VERSION,
                data: expression.as_str(),
            };
            Ok(serde_json::to_string(data)?)
        }
        SerializedDataType::RawTex => Ok(expression.to_string()),
    }
}

pub fn deserialize_expression(
    data: String,
    data_type: Option<SerializedDataType>,
) -> Result<RawExpression, SerializationError> {
    match data_type {
        Some(SerializedDataType::JsonExpression) => {
            let data: SerializedData<String> = serde_json::from_str(&data)?;
            if data.version > CURRENT_VERSION {
                return Err(SerializationError::UnsupportedVersion(data.version));
            }
            Ok(RawExpression::new(data.data))
        }
        Some(SerializedDataType::RawTex) => Ok(RawExpression::new(data)),
        None => {
            let data_type = detect_data_type(&data);
            log::debug!("Detected pasted data as {:?}", data_type);
            deserialize_expression(data, Some(data_type))
        }
    }
}

/// TeX can also start with a `{`, so only a complete envelope counts as JSON
fn detect_data_type(data: &str) -> SerializedDataType {
    let is_envelope = data.trim_start().starts_with('{')
        && serde_json::from_str::<SerializedData<String>>(data).is_ok();
    if is_envelope {
        SerializedDataType::JsonExpression
    } else {
        SerializedDataType::RawTex
    }
}
