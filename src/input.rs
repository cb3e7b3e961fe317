use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{MediaError, Result};

/// Read the whole document from `path`, or from stdin when it is absent or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                return Err(MediaError::FileNotFound(path.display().to_string()));
            }

            debug!("reading input from {}", path.display());
            std::fs::read_to_string(path).map_err(|e| MediaError::FileRead {
                path: path.display().to_string(),
                source: e,
            })
        }
        _ => {
            debug!("reading input from stdin");
            let mut contents = String::new();
            std::io::stdin().read_to_string(&mut contents)?;
            Ok(contents)
        }
    }
}
