use chrono::{TimeZone, Utc};
use jsondate::constants::DEFAULT_FORMAT;
use jsondate::{ChronoFormatter, DateError, DateFormatter, DateStringConverter, PointInTime};

fn converter() -> DateStringConverter<ChronoFormatter> {
    DateStringConverter::new(ChronoFormatter::utc())
}

#[test]
fn test_epoch_zero_default_pattern() {
    assert_eq!(converter().convert_default("XXXXXX0"), "01-01-1970");
}

#[test]
fn test_iso_ordered_pattern() {
    assert_eq!(converter().convert("ABCDEF1700000000000", "yyyy-MM-dd"), "2023-11-14");
}

#[test]
fn test_dotnet_wire_form() {
    let converter = converter();
    assert_eq!(converter.convert("/Date(1700000000000)/", "dd/MM/yyyy HH:mm"), "14/11/2023 22:13");
    // offset suffix is ignored by the integer parse
    assert_eq!(converter.convert("/Date(1700000000000+0100)/", "yyyy-MM-dd"), "2023-11-14");
    assert_eq!(converter.convert("/Date(-86400000)/", "yyyy-MM-dd"), "1969-12-31");
}

#[test]
fn test_prefix_only_is_invalid_and_does_not_panic() {
    let converter = converter();
    assert_eq!(converter.convert_default("ABCDEF"), "");
    assert_eq!(converter.convert_default(""), "");
    assert_eq!(converter.convert_default("ABC"), "");
    assert_eq!(converter.convert_default("/Date(abc)/"), "");
}

#[test]
fn test_out_of_range_is_invalid() {
    assert_eq!(converter().convert_default("/Date(99999999999999999999999)/"), "");
}

#[test]
fn test_range_edges() {
    let converter = converter();
    assert_eq!(
        converter.convert("/Date(8210266876799999)/", "yyyy-MM-dd HH:mm:ss.SSS"),
        "262143-12-31 23:59:59.999"
    );
    assert_eq!(converter.convert_default("/Date(8210266876800000)/"), "");
    assert_eq!(converter.convert_default("/Date(8640000000000000)/"), "");
    assert_eq!(converter.convert_default("/Date(-8640000000000000)/"), "");
    assert_eq!(
        converter.decode("/Date(8210266876800000)/"),
        Err(DateError::OutOfRange(8_210_266_876_800_000))
    );
}

#[test]
fn test_byte_order_mark_before_digits_is_skipped() {
    assert_eq!(converter().convert("ABCDEF\u{feff}5", "yyyy"), "1970");
    assert_eq!(converter().convert("/Date(\u{feff}1700000000000)/", "yyyy-MM-dd"), "2023-11-14");
}

#[test]
fn test_matches_direct_formatting() {
    let converter = converter();
    let formatter = ChronoFormatter::utc();
    for millis in [0_i64, 1, 951_782_400_000, 1_700_000_000_000, -1_000] {
        let encoded = format!("XXXXXX{}", millis);
        let direct = formatter.format(PointInTime::from_epoch_millis(millis), "EEE d MMM yyyy HH:mm:ss.SSS");
        assert_eq!(converter.convert(&encoded, "EEE d MMM yyyy HH:mm:ss.SSS"), direct);
    }
}

#[test]
fn test_omitted_pattern_equals_default_pattern() {
    let converter = converter();
    for value in ["/Date(0)/", "/Date(1700000000000)/", "/Date(-5)/", "/Date()/"] {
        assert_eq!(converter.convert_default(value), converter.convert(value, DEFAULT_FORMAT));
        assert_eq!(converter.convert_opt(value, None), converter.convert(value, DEFAULT_FORMAT));
    }
}

#[test]
fn test_conversion_is_idempotent() {
    let converter = converter();
    let first = converter.convert("/Date(1700000000000)/", "full");
    let second = converter.convert("/Date(1700000000000)/", "full");
    assert_eq!(first, second);
}

#[test]
fn test_trailing_junk_is_ignored() {
    let converter = converter();
    assert_eq!(
        converter.convert("ABCDEF1700000000000)/ trailing", "yyyy-MM-dd HH:mm"),
        converter.convert("ABCDEF1700000000000", "yyyy-MM-dd HH:mm")
    );
}

#[test]
fn test_decode_distinguishes_epoch_zero_from_garbage() {
    let converter = converter();
    let zero = converter.decode("/Date(0)/").unwrap();
    assert_eq!(zero.as_datetime(), Some(Utc.timestamp_opt(0, 0).unwrap()));

    assert!(matches!(converter.decode("/Date()/"), Err(DateError::NotANumber(_))));
    assert_eq!(
        converter.decode("/Date(9000000000000000)/"),
        Err(DateError::OutOfRange(9_000_000_000_000_000))
    );
}

#[test]
fn test_concurrent_use() {
    let converter = std::sync::Arc::new(converter());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let converter = std::sync::Arc::clone(&converter);
            std::thread::spawn(move || converter.convert(&format!("/Date({})/", i * 86_400_000), "dd"))
        })
        .collect();

    let days: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(days, vec!["01", "02", "03", "04"]);
}

#[test]
fn test_shared_converter_function() {
    assert_eq!(jsondate::convert("/Date(0)/", None), "01-01-1970");
    assert_eq!(jsondate::convert("/Date(0)/", Some("mediumDate")), "Jan 1, 1970");
    assert_eq!(jsondate::convert("/Date(", None), "");
}
