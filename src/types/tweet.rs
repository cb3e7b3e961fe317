use serde::{Deserialize, Serialize};

use super::TwitterMedia;

/// The `entities` or `extended_entities` object of a tweet.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TwitterEntities {
    #[serde(default)]
    pub media: Vec<TwitterMedia>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Tweet {
    #[serde(default)]
    pub id_str: Option<String>,
    #[serde(default)]
    pub entities: Option<TwitterEntities>,
    #[serde(default)]
    pub extended_entities: Option<TwitterEntities>,
}

impl Tweet {
    /// Media attached to the tweet.
    ///
    /// `entities` only carries the first photo, so `extended_entities` wins
    /// whenever it is present.
    pub fn media(&self) -> &[TwitterMedia] {
        self.extended_entities
            .as_ref()
            .or(self.entities.as_ref())
            .map(|entities| entities.media.as_slice())
            .unwrap_or(&[])
    }
}
