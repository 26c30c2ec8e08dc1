use regex::Regex;

/// Characters the OCR binary commonly invents around the points counter
const MISREAD_CHARS: [char; 4] = ['(', ')', '.', '\''];

/// Strip common OCR mistakes from the raw text
/// Example: "(12)\r\n" -> "12"
pub fn normalize_ocr_text(text: &str) -> String {
    text
        // Escaped line breaks show up verbatim in some outputs
        .replace("\\r\\n", "")
        .chars()
        .filter(|c| !MISREAD_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Parse the upgrade points counter. Returns None (and logs the raw text)
/// when the text is not a plain number after normalization.
pub fn parse_upgrade_points(text: &str) -> Option<u32> {
    let normalized = normalize_ocr_text(text);

    let parsed = Regex::new(r"^(\d+)$")
        .ok()
        .and_then(|re| re.captures(&normalized))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok());

    if parsed.is_none() {
        log::warn!("Could not recognize upgrade points, got: {:?}", text);
    }
    parsed
}
