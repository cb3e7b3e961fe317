mod media;
mod tweet;

pub use media::TwitterMedia;
pub use tweet::Tweet;
