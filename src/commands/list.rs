use tabled::Tabled;

use crate::cli::InputArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::{self, or_dash, truncate};
use crate::types::TwitterMedia;

#[derive(Tabled)]
struct MediaRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Media URL")]
    media_url: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl MediaRow {
    fn new(index: usize, media: &TwitterMedia, max_width: usize) -> Self {
        Self {
            index,
            media_url: truncate(or_dash(media.media_url()), max_width),
            url: truncate(or_dash(media.url()), max_width),
        }
    }
}

pub fn list(config: &Config, args: InputArgs) -> Result<()> {
    let media = super::load_media(&args)?;

    if media.is_empty() && !output::is_json_output() {
        output::print_message("No media attachments found.");
        return Ok(());
    }

    let max_width = config.max_width();
    output::print_table(&media, |index, item| MediaRow::new(index, item, max_width));

    Ok(())
}
