//! JSON-embedded strategy: the model is asked for a bare JSON object but may
//! wrap it in code fences or surround it with chatter.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::parsing::sanitize::clean_value;
use crate::parsing::ParseError;

/// Removes every ```` ```json ```` and ```` ``` ```` marker, wherever it sits.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parses model output as a JSON value.
///
/// Tries the fence-stripped text first, then the slice between the first `{`
/// and the last `}`.
pub fn parse_structured(text: &str) -> Result<Value, ParseError> {
    let stripped = strip_code_fences(text);

    match serde_json::from_str::<Value>(&stripped) {
        Ok(value) => Ok(value),
        Err(err) => match embedded_object(&stripped) {
            Some(slice) => serde_json::from_str(slice).map_err(ParseError::Json),
            None => Err(ParseError::Json(err)),
        },
    }
}

/// Parses, sanitizes every string, then decodes into the endpoint's shape.
/// Missing or mistyped fields fail; nothing is filled in.
pub fn parse_clean<T: DeserializeOwned>(text: &str) -> Result<T, ParseError> {
    let value = clean_value(parse_structured(text)?);
    serde_json::from_value(value).map_err(ParseError::Shape)
}

fn embedded_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}
