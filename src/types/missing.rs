/// Cell contents that are read as "no value" rather than as text.
const MISSING_MARKERS: [&str; 20] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null", "none"
];

pub fn is_missing_marker(value: &str) -> bool {
    MISSING_MARKERS.contains(&value.trim())
}

/// Turns a raw categorical cell into a label, treating missing markers as absent.
pub fn normalize_label(value: Option<String>) -> Option<String> {
    value
        .map(|label| label.trim().to_string())
        .filter(|label| !is_missing_marker(label))
}
