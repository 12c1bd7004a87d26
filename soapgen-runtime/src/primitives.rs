//! Text conversions for primitive XML Schema kinds.
//!
//! Each primitive kind converts between its Rust value and the text content
//! of an XML node. Deserialization fails with
//! [`XmlDeserializationError::CannotDeserialize`] when the text is absent or
//! does not match the kind's grammar; serialization is total.

use crate::decimal::XmlDecimal;
use crate::error::{Result, XmlDeserializationError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, FixedOffset};
use std::borrow::Cow;
use url::Url;

/// `yyyy-MM-dd'T'HH:mm:ss` followed by a `±HH:MM` offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Same layout with a literal `Z` for UTC.
const TIMESTAMP_FORMAT_UTC: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Conversion between a value and XML node text.
pub trait XmlText: Sized {
    /// Parses node text. `None` means the node has no text.
    ///
    /// # Errors
    /// Returns `CannotDeserialize` if the text is absent or malformed.
    fn from_xml_text(text: Option<&str>) -> Result<Self>;

    /// Formats the value as node text.
    fn to_xml_text(&self) -> String;
}

fn cannot_deserialize(kind: &str, text: Option<&str>) -> XmlDeserializationError {
    tracing::trace!("cannot deserialize {} from {:?}", kind, text);
    XmlDeserializationError::CannotDeserialize
}

macro_rules! impl_xml_text_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl XmlText for $ty {
                fn from_xml_text(text: Option<&str>) -> Result<Self> {
                    text.and_then(|t| t.parse().ok())
                        .ok_or_else(|| cannot_deserialize(stringify!($ty), text))
                }

                fn to_xml_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_xml_text_from_str!(i8, i16, i32, i64, u8, u16, u32, u64, XmlDecimal);

macro_rules! impl_xml_text_float {
    ($($ty:ident),* $(,)?) => {
        $(
            impl XmlText for $ty {
                /// Accepts decimal and exponent notation plus `INF`, `-INF`
                /// and `NaN`.
                fn from_xml_text(text: Option<&str>) -> Result<Self> {
                    let parsed = match text {
                        Some("INF") => Some($ty::INFINITY),
                        Some("-INF") => Some($ty::NEG_INFINITY),
                        Some("NaN") => Some($ty::NAN),
                        Some(t) => t.parse().ok(),
                        None => None,
                    };
                    parsed.ok_or_else(|| cannot_deserialize(stringify!($ty), text))
                }

                fn to_xml_text(&self) -> String {
                    if self.is_nan() {
                        "NaN".to_string()
                    } else if self.is_infinite() {
                        let token = if self.is_sign_positive() { "INF" } else { "-INF" };
                        token.to_string()
                    } else {
                        self.to_string()
                    }
                }
            }
        )*
    };
}

impl_xml_text_float!(f32, f64);

impl XmlText for bool {
    /// Accepts exactly `1`, `true`, `0` and `false`.
    fn from_xml_text(text: Option<&str>) -> Result<Self> {
        match text {
            Some("1" | "true") => Ok(true),
            Some("0" | "false") => Ok(false),
            _ => Err(cannot_deserialize("bool", text)),
        }
    }

    fn to_xml_text(&self) -> String {
        self.to_string()
    }
}

impl XmlText for String {
    fn from_xml_text(text: Option<&str>) -> Result<Self> {
        text.map(str::to_string)
            .ok_or_else(|| cannot_deserialize("String", text))
    }

    fn to_xml_text(&self) -> String {
        self.clone()
    }
}

impl XmlText for Url {
    /// Accepts absolute URLs only.
    fn from_xml_text(text: Option<&str>) -> Result<Self> {
        text.and_then(|t| Url::parse(t).ok())
            .ok_or_else(|| cannot_deserialize("Url", text))
    }

    fn to_xml_text(&self) -> String {
        self.as_str().to_string()
    }
}

impl XmlText for Vec<u8> {
    /// Standard base64 with padding.
    fn from_xml_text(text: Option<&str>) -> Result<Self> {
        text.and_then(|t| STANDARD.decode(t).ok())
            .ok_or_else(|| cannot_deserialize("Data", text))
    }

    fn to_xml_text(&self) -> String {
        STANDARD.encode(self)
    }
}

impl XmlText for DateTime<FixedOffset> {
    /// Parses [`TIMESTAMP_FORMAT`], also accepting `Z` as the offset.
    ///
    /// Formatting is locale independent. Sub-second precision is not part of
    /// the format and is dropped when serializing.
    fn from_xml_text(text: Option<&str>) -> Result<Self> {
        let Some(raw) = text else {
            return Err(cannot_deserialize("Date", text));
        };
        let normalized = match raw.strip_suffix('Z') {
            Some(local) => Cow::Owned(format!("{local}+00:00")),
            None => Cow::Borrowed(raw),
        };
        DateTime::parse_from_str(&normalized, TIMESTAMP_FORMAT)
            .map_err(|_| cannot_deserialize("Date", text))
    }

    fn to_xml_text(&self) -> String {
        if self.offset().local_minus_utc() == 0 {
            self.format(TIMESTAMP_FORMAT_UTC).to_string()
        } else {
            self.format(TIMESTAMP_FORMAT).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn round_trip<T: XmlText + PartialEq + std::fmt::Debug>(value: T) {
        let text = value.to_xml_text();
        assert_eq!(T::from_xml_text(Some(&text)), Ok(value), "text was '{text}'");
    }

    #[test]
    fn test_integer_bounds_round_trip() {
        round_trip(i8::MIN);
        round_trip(i8::MAX);
        round_trip(i16::MIN);
        round_trip(i16::MAX);
        round_trip(i32::MIN);
        round_trip(i32::MAX);
        round_trip(i64::MIN);
        round_trip(i64::MAX);
        round_trip(u8::MAX);
        round_trip(u16::MAX);
        round_trip(u32::MAX);
        round_trip(u64::MAX);
        round_trip(0u8);
    }

    #[test]
    fn test_integer_rejects_malformed() {
        assert_eq!(
            i32::from_xml_text(Some("not-a-number")),
            Err(XmlDeserializationError::CannotDeserialize)
        );
        assert!(i8::from_xml_text(Some("128")).is_err());
        assert!(u8::from_xml_text(Some("-1")).is_err());
        assert!(u64::from_xml_text(Some("")).is_err());
        assert!(i64::from_xml_text(Some(" 1")).is_err());
        assert_eq!(i16::from_xml_text(Some("+12")), Ok(12));
    }

    #[test]
    fn test_absent_text_fails_for_every_kind() {
        assert_eq!(
            i8::from_xml_text(None),
            Err(XmlDeserializationError::CannotDeserialize)
        );
        assert!(u64::from_xml_text(None).is_err());
        assert!(bool::from_xml_text(None).is_err());
        assert!(f32::from_xml_text(None).is_err());
        assert!(f64::from_xml_text(None).is_err());
        assert!(XmlDecimal::from_xml_text(None).is_err());
        assert!(String::from_xml_text(None).is_err());
        assert!(Url::from_xml_text(None).is_err());
        assert!(Vec::<u8>::from_xml_text(None).is_err());
        assert!(DateTime::<FixedOffset>::from_xml_text(None).is_err());
    }

    #[test]
    fn test_bool_tokens() {
        assert_eq!(bool::from_xml_text(Some("1")), Ok(true));
        assert_eq!(bool::from_xml_text(Some("true")), Ok(true));
        assert_eq!(bool::from_xml_text(Some("0")), Ok(false));
        assert_eq!(bool::from_xml_text(Some("false")), Ok(false));
        for token in ["TRUE", "yes", "2", "", " true"] {
            assert!(bool::from_xml_text(Some(token)).is_err(), "'{token}'");
        }
        round_trip(true);
        round_trip(false);
    }

    #[test]
    fn test_float_round_trip() {
        round_trip(0.1f32);
        round_trip(f32::MAX);
        round_trip(-1.5e-7f32);
        round_trip(std::f64::consts::PI);
        round_trip(f64::MIN_POSITIVE);
        round_trip(f64::INFINITY);
        round_trip(f32::NEG_INFINITY);
    }

    #[test]
    fn test_float_special_values() {
        assert_eq!(f64::INFINITY.to_xml_text(), "INF");
        assert_eq!(f64::NEG_INFINITY.to_xml_text(), "-INF");
        assert_eq!(f32::NAN.to_xml_text(), "NaN");
        assert!(f64::from_xml_text(Some("NaN")).unwrap().is_nan());
        assert_eq!(f64::from_xml_text(Some("1e3")), Ok(1000.0));
        assert!(f64::from_xml_text(Some("1.2.3")).is_err());
    }

    #[test]
    fn test_decimal_round_trip() {
        round_trip("-12345678901234567890.0001".parse::<XmlDecimal>().unwrap());
        round_trip(XmlDecimal::zero());
        assert!(XmlDecimal::from_xml_text(Some("1,5")).is_err());
    }

    #[test]
    fn test_string_round_trip() {
        round_trip(String::new());
        round_trip("héllo <world>".to_string());
    }

    #[test]
    fn test_url_round_trip() {
        round_trip(Url::parse("https://example.com/service?wsdl").unwrap());
        assert!(Url::from_xml_text(Some("not a url")).is_err());
    }

    #[test]
    fn test_data_base64() {
        assert_eq!(b"hello".to_vec().to_xml_text(), "aGVsbG8=");
        assert_eq!(Vec::<u8>::from_xml_text(Some("aGVsbG8=")), Ok(b"hello".to_vec()));
        round_trip(Vec::<u8>::new());
        round_trip(vec![0u8, 255, 128, 7]);
        assert!(Vec::<u8>::from_xml_text(Some("!!!")).is_err());
    }

    #[test]
    fn test_timestamp_with_offset() {
        let offset = FixedOffset::east_opt(2 * 3600 + 30 * 60).unwrap();
        let value = offset.with_ymd_and_hms(2017, 3, 14, 15, 9, 26).unwrap();
        assert_eq!(value.to_xml_text(), "2017-03-14T15:09:26+02:30");
        round_trip(value);

        let west = FixedOffset::west_opt(5 * 3600).unwrap();
        round_trip(west.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap());
    }

    #[test]
    fn test_timestamp_utc() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let value = utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(value.to_xml_text(), "2020-01-02T03:04:05Z");
        round_trip(value);
        assert_eq!(
            DateTime::<FixedOffset>::from_xml_text(Some("2020-01-02T03:04:05+00:00")),
            Ok(value)
        );
    }

    #[test]
    fn test_timestamp_requires_offset() {
        for text in [
            "2020-01-02T03:04:05",
            "2020-01-02 03:04:05Z",
            "2020-01-02T03:04:05.123Z",
            "02/01/2020",
        ] {
            assert!(
                DateTime::<FixedOffset>::from_xml_text(Some(text)).is_err(),
                "'{text}'"
            );
        }
    }
}
