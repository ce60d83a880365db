//! Output file naming

use crate::render::OutputFormat;

/// Number of trailing URL characters used for the file code.
pub const DEFAULT_CODE_LENGTH: usize = 4;

const TRAILING_NOISE: [char; 3] = ['/', '#', '!'];

/// Derive a short identifying code from the tail of a URL.
///
/// Trailing `/`, `#` and `!` characters are stripped (repeatedly), then the
/// last `length` characters are uppercased. Shorter inputs are returned whole.
/// Different URLs may map to the same code.
///
/// Uppercasing is Unicode-aware and can expand a character (`ß` becomes `SS`),
/// so the result may be longer than `length` characters.
pub fn extract_code(url: &str, length: usize) -> String {
    let cleaned = url.trim_end_matches(TRAILING_NOISE);
    let skip = cleaned.chars().count().saturating_sub(length);
    cleaned.chars().skip(skip).collect::<String>().to_uppercase()
}

/// `{code}_{size}x{size}.{ext}`
pub fn output_file_name(code: &str, target_size: u32, format: OutputFormat) -> String {
    format!(
        "{code}_{target_size}x{target_size}.{}",
        format.extension()
    )
}
