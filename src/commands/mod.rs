pub mod check;
pub mod init;
pub mod list;
pub mod normalize;
pub mod urls;

use log::debug;

use crate::cli::InputArgs;
use crate::error::Result;
use crate::input::read_input;
use crate::payload::parse_document;
use crate::types::TwitterMedia;

/// Read the input named by `args` and extract every attachment in it.
fn load_media(args: &InputArgs) -> Result<Vec<TwitterMedia>> {
    let text = read_input(args.input.as_deref())?;
    let media = parse_document(&text)?;
    debug!("extracted {} media attachments", media.len());
    Ok(media)
}
