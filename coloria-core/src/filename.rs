//! Local file names for downloaded images.

const MAX_STEM_CHARS: usize = 120;

/// Make `stem` safe as a file name: path separators and reserved characters
/// become `_`, control characters are dropped, surrounding dots and spaces
/// are trimmed. Returns `None` when nothing usable is left.
pub fn sanitize_stem(stem: &str) -> Option<String> {
    let cleaned: String = stem
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .take(MAX_STEM_CHARS)
        .collect();
    let trimmed = cleaned.trim_matches(|c: char| c == '.' || c.is_whitespace());
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// `<prompt>.png`, or `<fallback>.png` for an empty prompt.
pub fn png_name(prompt: &str, fallback: &str) -> String {
    let stem = sanitize_stem(prompt)
        .or_else(|| sanitize_stem(fallback))
        .unwrap_or_else(|| "image".to_string());
    format!("{stem}.png")
}

/// Name for a single image saved from the viewer.
pub fn image_file_name(prompt: &str) -> String {
    png_name(prompt, "image")
}

/// Zip entry name for the image at `index` of a bulk download.
pub fn archive_entry_name(prompt: &str, index: usize) -> String {
    png_name(prompt, &format!("image_{index}"))
}

/// Name for a freshly generated image, stamped with epoch milliseconds.
pub fn generated_image_file_name(timestamp_ms: i64) -> String {
    format!("generated-image-{timestamp_ms}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_used_as_name() {
        assert_eq!(image_file_name("Red Fox"), "Red Fox.png");
    }

    #[test]
    fn empty_prompt_falls_back() {
        assert_eq!(image_file_name(""), "image.png");
        assert_eq!(image_file_name(" .. "), "image.png");
        assert_eq!(archive_entry_name("", 3), "image_3.png");
    }

    #[test]
    fn separators_replaced() {
        assert_eq!(image_file_name("cat/dog: a?b"), "cat_dog_ a_b.png");
        assert_eq!(image_file_name("../etc\n"), "_etc.png");
    }

    #[test]
    fn long_prompt_truncated() {
        let name = image_file_name(&"x".repeat(500));
        assert_eq!(name.len(), MAX_STEM_CHARS + 4);
    }

    #[test]
    fn generated_name() {
        assert_eq!(
            generated_image_file_name(1_700_000_000_000),
            "generated-image-1700000000000.png"
        );
    }
}
