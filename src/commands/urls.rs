use crate::cli::{UrlField, UrlsArgs};
use crate::error::Result;
use crate::output;
use crate::types::TwitterMedia;

/// Collect the selected URLs in input order, skipping absent values.
fn select_urls(media: &[TwitterMedia], field: UrlField) -> Vec<&str> {
    media
        .iter()
        .flat_map(|item| {
            let (first, second) = match field {
                UrlField::Media => (item.media_url(), None),
                UrlField::Url => (item.url(), None),
                UrlField::Both => (item.media_url(), item.url()),
            };
            first.into_iter().chain(second)
        })
        .collect()
}

pub fn urls(args: UrlsArgs) -> Result<()> {
    let media = super::load_media(&args.input)?;
    let urls = select_urls(&media, args.field);

    if output::is_json_output() {
        println!("{}", serde_json::to_string_pretty(&urls)?);
    } else {
        for url in urls {
            println!("{url}");
        }
    }

    Ok(())
}
