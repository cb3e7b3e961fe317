//! Pulls media records out of the JSON documents the tool accepts.
//!
//! A document is a tweet, a bare media object, an array of either, or a
//! whitespace-separated stream (NDJSON) of those.

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{MediaError, Result};
use crate::types::{Tweet, TwitterMedia};

const TWEET_KEYS: [&str; 2] = ["entities", "extended_entities"];

pub fn parse_document(text: &str) -> Result<Vec<TwitterMedia>> {
    let mut stream = serde_json::Deserializer::from_str(text).into_iter::<Value>();
    let mut media = Vec::new();
    let mut offset = 0;

    while let Some(value) = stream.next() {
        let value = value?;
        let line = line_of_value(text, offset);

        let extracted = extract_media(&value).map_err(|e| MediaError::InvalidLine {
            line,
            source: Box::new(e),
        })?;

        media.extend(extracted);
        offset = stream.byte_offset();
    }

    debug!("parsed {} bytes of JSON", offset);
    Ok(media)
}

/// 1-based line of the first value starting at or after `offset`.
fn line_of_value(text: &str, offset: usize) -> usize {
    let rest = &text[offset..];
    let start = offset + (rest.len() - rest.trim_start().len());
    text[..start].matches('\n').count() + 1
}

pub fn extract_media(value: &Value) -> Result<Vec<TwitterMedia>> {
    match value {
        Value::Object(map) if TWEET_KEYS.iter().any(|key| map.contains_key(*key)) => {
            let tweet = Tweet::deserialize(value)?;
            debug!(
                "tweet {} carries {} media",
                tweet.id_str.as_deref().unwrap_or("<no id>"),
                tweet.media().len()
            );
            Ok(tweet.media().to_vec())
        }
        Value::Object(_) => Ok(vec![TwitterMedia::deserialize(value)?]),
        Value::Array(items) => {
            let mut media = Vec::new();
            for item in items {
                media.extend(extract_media(item)?);
            }
            Ok(media)
        }
        Value::Null => Err(MediaError::UnsupportedPayload("null")),
        Value::Bool(_) => Err(MediaError::UnsupportedPayload("a boolean")),
        Value::Number(_) => Err(MediaError::UnsupportedPayload("a number")),
        Value::String(_) => Err(MediaError::UnsupportedPayload("a string")),
    }
}
