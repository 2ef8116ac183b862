//! Filename and blob-name derivation helpers.

/// Suffix appended to the upload's stem to form the output video name.
const OUTPUT_SUFFIX: &str = "_output.mp4";

/// Derive the expected output video name from an upload filename.
///
/// The output name is the join key between the status tracker and the
/// eventual processed blob: `clip.mp4` becomes `clip_output.mp4`.
pub fn output_video_name(filename: &str) -> String {
    let stem = match filename.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => filename,
    };
    format!("{}{}", stem, OUTPUT_SUFFIX)
}

/// Sanitize an uploaded filename for use as a scratch path and blob name.
///
/// Strips any directory components and keeps only ASCII alphanumerics,
/// dots, dashes, and underscores (whitespace collapses to underscores).
/// An upload whose name sanitizes to nothing gets a placeholder name.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let sanitized: String = base
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                Some(c)
            } else if c.is_whitespace() {
                Some('_')
            } else {
                None
            }
        })
        .collect();

    let sanitized = sanitized.trim_matches('.').to_string();
    if sanitized.is_empty() {
        "upload".to_string()
    } else {
        sanitized
    }
}

/// Extract the blob name from a processed-video URL (its last path segment).
pub fn blob_name_from_url(url: &str) -> String {
    url.rsplit('/').next().unwrap_or(url).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_video_name() {
        assert_eq!(output_video_name("clip.mp4"), "clip_output.mp4");
        assert_eq!(output_video_name("clip.mov"), "clip_output.mp4");
        assert_eq!(output_video_name("clip"), "clip_output.mp4");
        // Only the last extension is stripped
        assert_eq!(output_video_name("archive.tar.gz"), "archive.tar_output.mp4");
        // Hidden-file style names keep their leading dot stem intact
        assert_eq!(output_video_name(".hidden"), ".hidden_output.mp4");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("clip.mp4"), "clip.mp4");
        assert_eq!(sanitize_filename("my clip.mp4"), "my_clip.mp4");
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\videos\\clip.mp4"), "clip.mp4");
        assert_eq!(sanitize_filename("clip?*<>.mp4"), "clip.mp4");
        assert_eq!(sanitize_filename(""), "upload");
        assert_eq!(sanitize_filename("..."), "upload");
    }

    #[test]
    fn test_blob_name_from_url() {
        assert_eq!(
            blob_name_from_url("https://storage.googleapis.com/bucket/clip_output.mp4"),
            "clip_output.mp4"
        );
        assert_eq!(blob_name_from_url("clip_output.mp4"), "clip_output.mp4");
    }
}
