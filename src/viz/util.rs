//! Utility functions for visualization: palette, locale mapping, digit grouping.

use crate::models::Rgb8;
use num_format::{CustomFormat, Locale, ToFormattedString};

/// Microsoft Office (2013+) chart series palette.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
const OFFICE10: [Rgb8; 10] = [
    Rgb8::new(68, 114, 196),  // blue      (#4472C4)
    Rgb8::new(237, 125, 49),  // orange    (#ED7D31)
    Rgb8::new(165, 165, 165), // gray      (#A5A5A5)
    Rgb8::new(255, 192, 0),   // gold      (#FFC000)
    Rgb8::new(91, 155, 213),  // light blue(#5B9BD5)
    Rgb8::new(112, 173, 71),  // green     (#70AD47)
    Rgb8::new(38, 68, 120),   // dark blue (#264478)
    Rgb8::new(158, 72, 14),   // dark org. (#9E480E)
    Rgb8::new(99, 99, 99),    // dark gray (#636363)
    Rgb8::new(153, 115, 0),   // brownish  (#997300)
];

/// Get a color from the Office palette.
#[inline]
pub fn office_color(idx: usize) -> Rgb8 {
    OFFICE10[idx % OFFICE10.len()]
}

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en,
    }
}

/// Group the digits of an integer string in threes from the right, e.g.
/// `"-1234567"` with `","` gives `"-1,234,567"`.
///
/// Anything that is not an optional sign followed by digits is returned
/// unchanged. Digit strings wider than a `u128` are grouped as text.
pub fn group_thousands(int_part: &str, separator: &str) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return int_part.to_string();
    }
    let Ok(n) = digits.parse::<u128>() else {
        return format!("{sign}{}", group_digit_text(digits, separator));
    };
    let format = match CustomFormat::builder().separator(separator).build() {
        Ok(f) => f,
        Err(_) => return int_part.to_string(),
    };
    format!("{sign}{}", n.to_formatted_string(&format))
}

fn group_digit_text(digits: &str, separator: &str) -> String {
    let head = match digits.len() % 3 {
        0 => 3,
        r => r,
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    out.push_str(&digits[..head]);
    let mut rest = &digits[head..];
    while !rest.is_empty() {
        out.push_str(separator);
        out.push_str(&rest[..3]);
        rest = &rest[3..];
    }
    out
}

/// Horizontal start that centers a run of `width` pixels on a canvas `columns` wide.
#[inline]
pub fn center(columns: f64, width: f64) -> f64 {
    (columns - width) / 2.0
}
