//! Public constructor and rejection behavior.

use core::str::FromStr;

use codepoint_ranges::{
    CodePointError, CodePointFault, CodePointMultiRange, CodePointRange, EngineConvention,
    MultiRangeBuilder, MultiRangeSource, PatternOptions, code_points_to_ranges,
};

#[test]
fn test_invalid_bounds_are_rejected() {
    for (first, last) in [(-1i64, 1i64), (0x10FFFF, 0x110000)] {
        let err = CodePointRange::try_new(first, last).unwrap_err();
        assert!(err.is_invalid_code_point(), "{err}");
    }

    for (first, last) in [(0u32, 0xD800u32), (0xDFFF, 0x10FFFF), (0xD900, 0xD900)] {
        let err = CodePointRange::try_new(first, last).unwrap_err();
        assert!(
            matches!(
                err,
                CodePointError::InvalidCodePoint(CodePointFault::UnpairedSurrogate { .. })
            ),
            "{err}"
        );
        assert!(CodePointRange::try_new_with_surrogates(first, last, true).is_ok());
    }

    assert_eq!(
        CodePointRange::try_new(0x39, 0x30),
        Err(CodePointError::InvalidRange {
            first: 0x39,
            last: 0x30
        })
    );
}

#[test]
fn test_text_must_be_one_code_point() {
    assert!(CodePointRange::try_new("a", "z").is_ok());
    assert!(
        CodePointRange::try_new("", "z")
            .unwrap_err()
            .is_invalid_code_point()
    );
    assert!(
        CodePointRange::try_new("a", "yz")
            .unwrap_err()
            .is_invalid_code_point()
    );
}

#[test]
fn test_multi_range_sources_are_exclusive() {
    let range = CodePointRange::try_new('a', 'f').unwrap();

    assert!(matches!(
        MultiRangeBuilder::new().build(),
        Err(CodePointError::InvalidConstructorArguments(_))
    ));
    assert!(matches!(
        MultiRangeBuilder::new()
            .with_code_points(['x'])
            .with_ranges([range])
            .build(),
        Err(CodePointError::InvalidConstructorArguments(_))
    ));

    let from_source = CodePointMultiRange::new(MultiRangeSource::CodePoints {
        code_points: "abcdef".chars().map(u32::from).collect(),
        unpaired_surrogates: false,
    })
    .unwrap();
    let from_ranges = CodePointMultiRange::new(MultiRangeSource::Ranges(vec![range])).unwrap();
    assert_eq!(from_source, from_ranges);
    assert_eq!(from_source.as_wide_pattern().unwrap(), "[a-f]");
}

#[test]
fn test_empty_set_has_no_pattern() {
    let empty = CodePointMultiRange::from_code_points(Vec::<u32>::new()).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.as_wide_pattern(), Err(CodePointError::EmptyRangeSet));
    for convention in [
        EngineConvention::Generic,
        EngineConvention::Wide,
        EngineConvention::Narrow,
    ] {
        assert_eq!(
            empty.as_convention_pattern(convention),
            Err(CodePointError::EmptyRangeSet)
        );
    }
}

#[test]
fn test_legacy_requires_explicit_width() {
    let range = CodePointRange::try_new(0x1F600, 0x1F64F).unwrap();
    assert!(matches!(
        range.as_legacy_pattern(&PatternOptions::new()),
        Err(CodePointError::InvalidConstructorArguments(_))
    ));
    assert_eq!(
        range
            .as_legacy_pattern(&PatternOptions::new().with_surrogate_pairs(false))
            .unwrap(),
        "[\\\u{1F600}-\\\u{1F64F}]"
    );
    assert_eq!(
        range
            .as_legacy_pattern(&PatternOptions::new().with_surrogate_pairs(true))
            .unwrap(),
        "\\uD83D[\\uDE00-\\uDE4F]"
    );
}

#[test]
fn test_convention_from_environment_text() {
    let hex = code_points_to_ranges("0123456789abcdef".chars(), false).unwrap();
    let multi_range = CodePointMultiRange::from_ranges(hex);

    for (name, expected) in [
        ("generic", EngineConvention::Generic),
        ("WIDE", EngineConvention::Wide),
        ("narrow", EngineConvention::Narrow),
    ] {
        let convention = EngineConvention::from_str(name).unwrap();
        assert_eq!(convention, expected);
        assert_eq!(
            multi_range.as_convention_pattern(convention).unwrap(),
            "[0-9a-f]"
        );
    }
    assert!(EngineConvention::from_str("utf8").is_err());
}
