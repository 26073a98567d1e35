use plotlayout::viz::LabelFormatter;

fn fmt(spread: f64, marker_count: usize) -> LabelFormatter {
    LabelFormatter::new(",", spread, marker_count, false)
}

#[test]
fn wide_spread_formats_integers_with_separator() {
    // 50 is not divisible by 4, so the spread rule applies.
    assert_eq!(fmt(50.0, 4).format(1234.0, None), "1,234");
    assert_eq!(fmt(50.0, 4).format(1234567.9, None), "1,234,567");
}

#[test]
fn increment_drives_precision() {
    let f = fmt(50.0, 4);
    assert_eq!(f.format(0.5, Some(0.01)), "0.50");
    assert_eq!(f.format(5.0, Some(1.0)), "5");
    assert_eq!(f.format(12.34, Some(0.5)), "12.3");
    assert_eq!(f.format(1500.0, Some(250.0)), "1,500");
    assert_eq!(f.format(0.1234, Some(0.005)), "0.123");
    assert_eq!(f.format(0.12345, Some(0.0005)), "0.1235");
}

#[test]
fn tiny_increment_falls_back_to_default_form() {
    assert_eq!(fmt(50.0, 4).format(0.5, Some(0.00001)), "0.5");
}

#[test]
fn even_division_or_fixed_increment_gives_integers() {
    assert_eq!(fmt(8.0, 4).format(2.75, None), "2");
    let fixed = LabelFormatter::new(",", 2.5, 4, true);
    assert_eq!(fixed.format(1.9, None), "1");
}

#[test]
fn medium_spread_uses_two_decimals() {
    assert_eq!(fmt(5.0, 3).format(1234.5, None), "1,234.50");
}

#[test]
fn small_spread_uses_default_form() {
    assert_eq!(fmt(2.5, 4).format(0.75, None), "0.75");
}

#[test]
fn zero_marker_count_does_not_panic() {
    assert_eq!(fmt(2.5, 0).format(1.25, None), "1.25");
    assert_eq!(fmt(20.0, 0).format(12345.0, None), "12,345");
}

#[test]
fn separator_is_configurable_and_only_touches_integer_part() {
    let f = LabelFormatter::new(".", 5.0, 3, false);
    assert_eq!(f.separator(), ".");
    assert_eq!(f.format(9876543.21, None), "9.876.543.21");
    let apostrophe = LabelFormatter::new("'", 50.0, 4, false);
    assert_eq!(apostrophe.format(-45000.0, None), "-45'000");
}

#[test]
fn huge_values_keep_every_digit() {
    assert_eq!(
        fmt(50.0, 4).format(1e40, None),
        "10,000,000,000,000,000,303,786,028,427,003,666,890,752"
    );
}
