//! String coercion helpers shared by every section parser.
//!
//! Beatmap files are externally authored and carry no schema, so every
//! conversion here is total: text that fails to parse yields the
//! caller-supplied default instead of an error.

use super::Decimal;

/// Parses an integer field, or returns `default` when the text does not
/// parse. Surrounding whitespace is ignored.
#[must_use]
pub fn int_or(value: &str, default: i32) -> i32 {
    value.trim().parse().unwrap_or(default)
}

/// Parses a decimal field, or returns `default` when the text does not
/// parse. Surrounding whitespace is ignored.
#[must_use]
pub fn decimal_or(value: &str, default: Decimal) -> Decimal {
    value.trim().parse().unwrap_or(default)
}

/// Reads a boolean field: integer text is truthy when non-zero, anything
/// else is `true` only if it equals `"true"` ignoring case.
#[must_use]
pub fn bool_value(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed
        .parse::<i32>()
        .map_or_else(|_| trimmed.eq_ignore_ascii_case("true"), |n| n != 0)
}

/// Coerces an enum-valued field: integer text is matched against the
/// enum's declared codes and other text against its name vocabulary, with
/// anything unknown falling back to `default`.
#[must_use]
pub fn enum_or<T>(value: &str, default: T) -> T
where
    T: Copy + TryFrom<i32> + for<'a> TryFrom<&'a str>,
{
    let trimmed = value.trim();
    match trimmed.parse::<i32>() {
        Ok(code) => T::try_from(code).unwrap_or(default),
        Err(_) => T::try_from(trimmed).unwrap_or(default),
    }
}

/// [`enum_or`] with the enum's zero/default member as the fallback.
#[must_use]
pub fn enum_or_default<T>(value: &str) -> T
where
    T: Copy + Default + TryFrom<i32> + for<'a> TryFrom<&'a str>,
{
    enum_or(value, T::default())
}

/// Splits a delimited list the way the record parsers expect: empty
/// entries are removed BEFORE the per-entry space trim, so an entry made
/// of spaces survives as an empty string.
#[must_use]
pub fn split_list(value: &str, delimiter: char) -> Vec<&str> {
    value
        .split(delimiter)
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.trim_matches(' '))
        .collect()
}

/// Splits a space-separated list, removing empty entries. Entries are not
/// trimmed further.
#[must_use]
pub fn split_spaces(value: &str) -> Vec<&str> {
    value.split(' ').filter(|entry| !entry.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::osu::value::{GameMode, SampleSet};

    #[test]
    fn int_parsing() {
        assert_eq!(int_or("12", 0), 12);
        assert_eq!(int_or("-3", 0), -3);
        assert_eq!(int_or(" 7 ", 0), 7);
        assert_eq!(int_or("\t7", 0), 7);
        assert_eq!(int_or("", 9), 9);
        assert_eq!(int_or("1.5", 9), 9);
        assert_eq!(int_or("twelve", 9), 9);
    }

    #[test]
    fn decimal_parsing() {
        assert_eq!(decimal_or("1.25", Decimal::from(0)), Decimal::from(125) / Decimal::from(100));
        assert_eq!(decimal_or("-5", Decimal::from(0)), Decimal::from(-5));
        assert_eq!(decimal_or("x", Decimal::from(3)), Decimal::from(3));
    }

    #[test]
    fn bool_reading() {
        assert!(bool_value("1"));
        assert!(bool_value("-2"));
        assert!(bool_value("true"));
        assert!(bool_value("TRUE"));
        assert!(!bool_value("0"));
        assert!(!bool_value("false"));
        assert!(!bool_value("yes"));
        assert!(!bool_value(""));
    }

    #[test]
    fn enum_code_and_name_lookup() {
        assert_eq!(enum_or_default::<GameMode>("3"), GameMode::Mania);
        assert_eq!(enum_or_default::<GameMode>("taiko"), GameMode::Taiko);
        assert_eq!(enum_or_default::<GameMode>("99"), GameMode::Osu);
        assert_eq!(enum_or_default::<GameMode>("unknown"), GameMode::Osu);
        assert_eq!(enum_or::<SampleSet>("x", SampleSet::Drum), SampleSet::Drum);
    }

    #[test]
    fn list_splitting_removes_empties_before_trimming() {
        assert_eq!(split_list("a,b,c", ','), vec!["a", "b", "c"]);
        assert_eq!(split_list("a,,c", ','), vec!["a", "c"]);
        // A lone-space entry is not empty at removal time, so it survives
        // the filter and trims down to an empty string.
        assert_eq!(split_list("a, ,c", ','), vec!["a", "", "c"]);
        assert_eq!(split_list(" a : b ", ':'), vec!["a", "b"]);
        assert_eq!(split_list("", ','), Vec::<&str>::new());
    }

    #[test]
    fn space_splitting_keeps_entries_raw() {
        assert_eq!(split_spaces("one two  three"), vec!["one", "two", "three"]);
        assert_eq!(split_spaces("  "), Vec::<&str>::new());
        assert_eq!(split_spaces("a\tb"), vec!["a\tb"]);
    }
}
