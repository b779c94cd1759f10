//! Fragrance image lookup
//!
//! Associates a catalog entry with an image by substring match on the file
//! name. The image directory is listed fresh on every call and the first
//! match in listing order wins; a short fragrance name matching inside an
//! unrelated file name is accepted behavior, not something to filter out.

use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// Find the image file associated with a fragrance display name.
///
/// Returns the bare file name of the first directory entry whose name
/// contains `name` as a substring, or None when nothing matches or the
/// directory cannot be listed.
pub fn find_image(image_root: &Path, name: &str) -> Option<String> {
    for entry in WalkDir::new(image_root).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Error listing image directory: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if file_name.contains(name) {
            return Some(file_name.into_owned());
        }
    }

    None
}
