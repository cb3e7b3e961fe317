use serde::{Deserialize, Serialize};

/// A media attachment as returned by the Twitter REST API.
///
/// Both keys are optional on the wire. A missing key deserializes to `None`
/// and unknown keys are ignored.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TwitterMedia {
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[allow(dead_code)]
impl TwitterMedia {
    pub fn new(media_url: Option<String>, url: Option<String>) -> Self {
        Self { media_url, url }
    }

    pub fn media_url(&self) -> Option<&str> {
        self.media_url.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_media_url(&mut self, media_url: Option<String>) {
        self.media_url = media_url;
    }

    pub fn set_url(&mut self, url: Option<String>) {
        self.url = url;
    }

    /// True when neither field is present.
    pub fn is_empty(&self) -> bool {
        self.media_url.is_none() && self.url.is_none()
    }
}
