//! Folder derivation from note paths

use crate::types::FolderId;

/// Folder containing the note at `path`, or `None` for notes at the root
///
/// Both `/` and `\` separate segments. Empty and `.` segments are dropped
/// and `..` pops the previous segment (never above the root). The last
/// remaining segment is the file name.
pub fn folder_for_path(path: &str) -> Option<FolderId> {
    let mut segments: Vec<&str> = Vec::new();
    for part in path.split(['/', '\\']) {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            part => segments.push(part),
        }
    }

    segments.pop()?;
    if segments.is_empty() {
        return None;
    }
    Some(FolderId::new(segments.join("/")))
}
