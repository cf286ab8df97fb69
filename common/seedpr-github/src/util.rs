//! Utility functions for GitHub operations

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// Encode file content the way the contents API expects it
///
/// The API only accepts base64 regardless of the size or text encoding of the
/// original content.
pub fn encode_content(content: &str) -> String {
    BASE64.encode(content.as_bytes())
}

/// Percent-encode a repository path, one `/`-separated segment at a time
///
/// Keeps the directory structure while making sure characters such as `#`,
/// `?` or `%` stay part of the name instead of starting a fragment or query.
pub fn encode_path(path: &str) -> String {
    path.trim_start_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Fully qualified ref name for a branch
pub fn ref_for_branch(branch_name: &str) -> String {
    format!("refs/heads/{}", branch_name)
}
