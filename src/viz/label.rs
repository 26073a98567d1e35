//! Value label formatting: precision selection plus thousands grouping.

use super::util::group_thousands;

/// Turns axis values into label strings.
///
/// Precision follows the marker increment when one is given, otherwise the
/// data spread. The grouping separator is applied to the integer part only.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelFormatter {
    separator: String,
    spread: f64,
    marker_count: usize,
    fixed_increment: bool,
}

impl LabelFormatter {
    /// `fixed_increment` is true when the value axis has a configured increment.
    pub fn new(
        separator: impl Into<String>,
        spread: f64,
        marker_count: usize,
        fixed_increment: bool,
    ) -> Self {
        Self {
            separator: separator.into(),
            spread,
            marker_count,
            fixed_increment,
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn format(&self, value: f64, increment: Option<f64>) -> String {
        let raw = match increment {
            Some(inc) => match decimals_for_increment(inc) {
                Some(0) => integer(value),
                Some(p) => format!("{:.*}", p, value),
                None => value.to_string(),
            },
            None if self.spread_divides_evenly() || self.fixed_increment => integer(value),
            None if self.spread > 10.0 => integer(value),
            None if self.spread >= 3.0 => format!("{:.2}", value),
            None => value.to_string(),
        };
        self.group(&raw)
    }

    fn spread_divides_evenly(&self) -> bool {
        self.marker_count != 0 && self.spread % self.marker_count as f64 == 0.0
    }

    fn group(&self, label: &str) -> String {
        match label.split_once('.') {
            Some((int_part, frac)) => {
                format!("{}.{}", group_thousands(int_part, &self.separator), frac)
            }
            None => group_thousands(label, &self.separator),
        }
    }
}

/// Decimal digits implied by a marker increment, coarsest rule first.
fn decimals_for_increment(increment: f64) -> Option<usize> {
    const RULES: [(f64, f64, usize); 5] = [
        (1.0, 10.0, 0),
        (10.0, 1.0, 1),
        (100.0, 0.1, 2),
        (1_000.0, 0.01, 3),
        (10_000.0, 0.001, 4),
    ];
    RULES
        .iter()
        .find(|(scale, threshold, _)| increment >= *threshold || is_integral(increment * scale))
        .map(|(_, _, decimals)| *decimals)
}

fn is_integral(x: f64) -> bool {
    x.is_finite() && x.trunc() == x
}

/// Integer form, truncated toward zero. Non-finite values keep their name.
fn integer(value: f64) -> String {
    let whole = value.trunc();
    if !value.is_finite() {
        value.to_string()
    } else if whole.abs() < i128::MAX as f64 {
        format!("{}", whole as i128)
    } else {
        format!("{:.0}", whole)
    }
}
