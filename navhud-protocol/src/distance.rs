//! Distance text parsing
//!
//! The trailing text of a navigation payload is one of:
//! - the literal marker `"No route"`
//! - a decimal number with a `"km"` unit somewhere in it (`"2.5km"`)
//! - a plain integer number of meters (`"750"`)
//!
//! Parsing is lenient the way C's `atof`/`atoi` are: leading whitespace is
//! skipped, the longest numeric prefix is used, and text without one yields
//! zero. Anything the lenient parse had to paper over is reported through
//! [`ParsedDistance::well_formed`] so callers can count it.

use heapless::String;

/// Marker text sent when the navigation source has no active route
pub const NO_ROUTE_MARKER: &[u8] = b"No route";

/// Unit marker for kilometre values
pub const KM_MARKER: &[u8] = b"km";

/// Longest numeric prefix the parser will hand to the float parser
pub const MAX_NUMBER_LEN: usize = 64;

const METERS_PER_KM: f64 = 1000.0;

/// Distance information carried by a navigation payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DistanceField {
    /// Payload had no trailing text
    #[default]
    Absent,
    /// Navigation source reports no active route
    NoRoute,
    /// Remaining distance in meters
    Meters(u32),
}

/// Result of parsing a distance text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParsedDistance {
    /// Decoded field (never `Absent`)
    pub field: DistanceField,
    /// False if the text had no numeric prefix, trailing garbage, a negative
    /// value, or a value that did not fit in `u32`
    pub well_formed: bool,
}

/// Parse the trailing distance text of a navigation payload
pub fn parse_distance(text: &[u8]) -> ParsedDistance {
    if text == NO_ROUTE_MARKER {
        return ParsedDistance {
            field: DistanceField::NoRoute,
            well_formed: true,
        };
    }

    let (meters, well_formed) = match find(text, KM_MARKER) {
        Some(pos) => {
            // Only the first "km" is removed; the halves are read as one text
            let spliced = Spliced {
                head: &text[..pos],
                tail: &text[pos + KM_MARKER.len()..],
            };
            parse_kilometers(&spliced)
        }
        None => parse_meters(&Spliced {
            head: text,
            tail: &[],
        }),
    };

    ParsedDistance {
        field: DistanceField::Meters(meters),
        well_formed,
    }
}

/// Two byte slices read as if they were one
struct Spliced<'a> {
    head: &'a [u8],
    tail: &'a [u8],
}

impl Spliced<'_> {
    fn len(&self) -> usize {
        self.head.len() + self.tail.len()
    }

    fn get(&self, index: usize) -> Option<u8> {
        if index < self.head.len() {
            Some(self.head[index])
        } else {
            self.tail.get(index - self.head.len()).copied()
        }
    }

    fn skip_whitespace(&self, mut index: usize) -> usize {
        while self.get(index).is_some_and(is_c_space) {
            index += 1;
        }
        index
    }

    fn skip_digits(&self, mut index: usize) -> usize {
        while self.get(index).is_some_and(|b| b.is_ascii_digit()) {
            index += 1;
        }
        index
    }

    /// True if everything from `index` on is whitespace
    fn only_whitespace_from(&self, index: usize) -> bool {
        self.skip_whitespace(index) == self.len()
    }
}

/// `atof` semantics, scaled from kilometres to meters
fn parse_kilometers(text: &Spliced<'_>) -> (u32, bool) {
    let start = text.skip_whitespace(0);
    let Some(end) = float_prefix_end(text, start) else {
        return (0, false);
    };

    let mut number: String<MAX_NUMBER_LEN> = String::new();
    for index in start..end {
        // Prefix bytes are ASCII by construction
        let byte = text.get(index).unwrap_or(b'0');
        if number.push(byte as char).is_err() {
            return (0, false);
        }
    }

    let km: f64 = match number.parse() {
        Ok(value) => value,
        Err(_) => return (0, false),
    };
    // The product is held in single precision before truncating, so
    // "32.3km" lands on 32300 rather than 32299.999...
    let meters = (km * METERS_PER_KM) as f32;

    // `as` saturates: negatives and NaN become 0, overflow becomes u32::MAX
    let in_range = meters >= 0.0 && f64::from(meters) <= f64::from(u32::MAX);
    (meters as u32, in_range && text.only_whitespace_from(end))
}

/// `atoi` semantics, saturating into `u32`
fn parse_meters(text: &Spliced<'_>) -> (u32, bool) {
    let mut index = text.skip_whitespace(0);
    let negative = match text.get(index) {
        Some(b'-') => {
            index += 1;
            true
        }
        Some(b'+') => {
            index += 1;
            false
        }
        _ => false,
    };

    let digits_start = index;
    let mut value: u64 = 0;
    let mut overflow = false;
    while let Some(byte) = text.get(index).filter(u8::is_ascii_digit) {
        value = value * 10 + u64::from(byte - b'0');
        if value > u64::from(u32::MAX) {
            overflow = true;
            value = u64::from(u32::MAX);
        }
        index += 1;
    }

    if index == digits_start {
        return (0, false);
    }
    if negative {
        return (0, value == 0 && text.only_whitespace_from(index));
    }

    (
        value as u32,
        !overflow && text.only_whitespace_from(index),
    )
}

/// Find the end of the longest float literal starting at `start`
///
/// Grammar: `[+-]? digits? ('.' digits?)? ([eE] [+-]? digits)?` with at least
/// one mantissa digit.
fn float_prefix_end(text: &Spliced<'_>, start: usize) -> Option<usize> {
    let mut index = start;
    if matches!(text.get(index), Some(b'+') | Some(b'-')) {
        index += 1;
    }

    let int_start = index;
    index = text.skip_digits(index);
    let mut mantissa_digits = index - int_start;

    if text.get(index) == Some(b'.') {
        let frac_start = index + 1;
        let frac_end = text.skip_digits(frac_start);
        mantissa_digits += frac_end - frac_start;
        index = frac_end;
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(text.get(index), Some(b'e') | Some(b'E')) {
        let mut exp = index + 1;
        if matches!(text.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_end = text.skip_digits(exp);
        if exp_end > exp {
            index = exp_end;
        }
    }

    Some(index)
}

/// Whitespace as C's `isspace` sees it
fn is_c_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meters(text: &str) -> u32 {
        match parse_distance(text.as_bytes()).field {
            DistanceField::Meters(m) => m,
            other => panic!("expected meters, got {:?}", other),
        }
    }

    fn well_formed(text: &str) -> bool {
        parse_distance(text.as_bytes()).well_formed
    }

    #[test]
    fn test_no_route_marker() {
        let parsed = parse_distance(b"No route");
        assert_eq!(parsed.field, DistanceField::NoRoute);
        assert!(parsed.well_formed);
    }

    #[test]
    fn test_no_route_must_match_exactly() {
        // Anything else is read as a number, which here has no prefix
        assert_eq!(meters("No route "), 0);
        assert_eq!(meters("no route"), 0);
        assert!(!well_formed("No routes"));
    }

    #[test]
    fn test_kilometres() {
        assert_eq!(meters("5km"), 5000);
        assert_eq!(meters("1.5km"), 1500);
        assert_eq!(meters("2.25 km"), 2250);
        assert_eq!(meters(" 12km"), 12000);
        assert!(well_formed("1.5km"));
        assert!(well_formed("2.25 km"));
    }

    #[test]
    fn test_kilometres_truncate() {
        // 0.0015 km = 1.5 m, truncated
        assert_eq!(meters("0.0015km"), 1);
    }

    #[test]
    fn test_kilometres_without_exact_binary_form() {
        assert_eq!(meters("32.3km"), 32300);
        assert_eq!(meters("1.005km"), 1005);
        assert_eq!(meters("64.1km"), 64100);
        assert!(well_formed("32.3km"));
    }

    #[test]
    fn test_kilometres_exponent() {
        assert_eq!(meters("1e1km"), 10000);
        // Dangling exponent marker is not part of the number
        assert_eq!(meters("3ekm"), 3000);
        assert!(!well_formed("3ekm"));
    }

    #[test]
    fn test_only_first_km_removed() {
        // "1km5" reads as "15"
        assert_eq!(meters("1km5"), 15000);
        // "2kmkm" reads as "2km", whose prefix is 2
        assert_eq!(meters("2kmkm"), 2000);
        assert!(!well_formed("2kmkm"));
    }

    #[test]
    fn test_unparseable_kilometres_is_zero() {
        assert_eq!(meters("km"), 0);
        assert_eq!(meters("abc km"), 0);
        assert_eq!(meters(".km"), 0);
        assert!(!well_formed("km"));
    }

    #[test]
    fn test_negative_kilometres_saturate_to_zero() {
        assert_eq!(meters("-1.5km"), 0);
        assert!(!well_formed("-1.5km"));
    }

    #[test]
    fn test_huge_kilometres_saturate() {
        assert_eq!(meters("9999999km"), u32::MAX);
        assert!(!well_formed("9999999km"));
    }

    #[test]
    fn test_plain_meters() {
        assert_eq!(meters("3000"), 3000);
        assert_eq!(meters("  42\r\n"), 42);
        assert_eq!(meters("+7"), 7);
        assert!(well_formed("3000"));
        assert!(well_formed("  42\r\n"));
    }

    #[test]
    fn test_plain_meters_prefix() {
        assert_eq!(meters("3000m"), 3000);
        assert_eq!(meters("12.9"), 12);
        assert!(!well_formed("3000m"));
        assert!(!well_formed("12.9"));
    }

    #[test]
    fn test_unparseable_meters_is_zero() {
        assert_eq!(meters(""), 0);
        assert_eq!(meters("abc"), 0);
        assert_eq!(meters("-"), 0);
        assert!(!well_formed("abc"));
    }

    #[test]
    fn test_negative_meters_saturate_to_zero() {
        assert_eq!(meters("-250"), 0);
        assert!(!well_formed("-250"));
        // Negative zero is still zero
        assert!(well_formed("-0"));
    }

    #[test]
    fn test_meters_overflow_saturates() {
        assert_eq!(meters("99999999999"), u32::MAX);
        assert!(!well_formed("99999999999"));
        assert_eq!(meters("4294967295"), u32::MAX);
        assert!(well_formed("4294967295"));
    }

    #[test]
    fn test_non_ascii_text() {
        let parsed = parse_distance(&[0xFF, 0xFE, b'1']);
        assert_eq!(parsed.field, DistanceField::Meters(0));
        assert!(!parsed.well_formed);
    }

    #[test]
    fn test_overlong_number_is_zero() {
        let mut text: String<80> = String::new();
        for _ in 0..70 {
            text.push('1').unwrap();
        }
        text.push_str("km").unwrap();
        let parsed = parse_distance(text.as_bytes());
        assert_eq!(parsed.field, DistanceField::Meters(0));
        assert!(!parsed.well_formed);
    }
}
