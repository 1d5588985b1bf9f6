//! Shell-boundary JSON parsing with JSON-path context in error messages.
//!
//! The generators never see invalid input; everything fails here, with the
//! parser's own message plus the path at which deserialization stopped.

use serde_json::Value;

pub fn document_from_str(src: &str) -> Result<Value, String> {
    let de = &mut serde_json::Deserializer::from_str(src);
    match serde_path_to_error::deserialize::<_, Value>(de) {
        Ok(v) => Ok(v),
        Err(err) => {
            let path = err.path().to_string();
            Err(format!("at JSON path {path} → {}", err.into_inner()))
        }
    }
}
