use crate::cli::NormalizeArgs;
use crate::error::Result;
use crate::types::TwitterMedia;

fn render(media: &[TwitterMedia], compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(media)?
    } else {
        serde_json::to_string_pretty(media)?
    };
    Ok(rendered)
}

pub fn normalize(args: NormalizeArgs) -> Result<()> {
    let media = super::load_media(&args.input)?;
    println!("{}", render(&media, args.compact)?);
    Ok(())
}
