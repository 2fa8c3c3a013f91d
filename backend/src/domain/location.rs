//! Location reports and the request-body decoder.
//!
//! A [`LocationReport`] is built once per request from the raw body and is
//! immutable afterwards. Coordinates are accepted exactly as submitted: no
//! range checks happen here or anywhere else in the pipeline.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a registered user, as carried in the `userID` field.
///
/// Only strictly positive identifiers can reference a stored user.
///
/// # Examples
/// ```
/// use location_ingest::domain::UserId;
///
/// assert!(UserId::new(7).is_assignable());
/// assert!(!UserId::new(0).is_assignable());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether the identifier could reference a stored user at all.
    #[must_use]
    pub const fn is_assignable(self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for UserId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reasons a request body cannot be turned into a [`LocationReport`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The body held no JSON value at all.
    #[error("request body is empty")]
    Empty,
    /// The body could not be read from the transport.
    #[error("request body could not be read: {message}")]
    Unreadable { message: String },
    /// The first JSON value was truncated or did not match the report shape.
    #[error("malformed location payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One inbound latitude/longitude/user submission.
///
/// The wire shape is `{"latitude": f64, "longitude": f64, "userID": i64}`.
/// Keys match without regard to ASCII case and, when a field appears more than
/// once, the last occurrence wins. Unknown fields are ignored; missing or
/// `null` fields leave the value at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LocationReport {
    latitude: f64,
    longitude: f64,
    #[serde(rename = "userID")]
    user_id: UserId,
}

const LATITUDE_KEY: &str = "latitude";
const LONGITUDE_KEY: &str = "longitude";
const USER_ID_KEY: &str = "userID";

impl<'de> Deserialize<'de> for LocationReport {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ReportVisitor)
    }
}

struct ReportVisitor;

impl<'de> Visitor<'de> for ReportVisitor {
    type Value = LocationReport;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a location object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut report = LocationReport::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(LATITUDE_KEY) {
                if let Some(value) = map.next_value::<Option<f64>>()? {
                    report.latitude = value;
                }
            } else if key.eq_ignore_ascii_case(LONGITUDE_KEY) {
                if let Some(value) = map.next_value::<Option<f64>>()? {
                    report.longitude = value;
                }
            } else if key.eq_ignore_ascii_case(USER_ID_KEY) {
                if let Some(value) = map.next_value::<Option<i64>>()? {
                    report.user_id = UserId::new(value);
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(report)
    }
}

impl LocationReport {
    /// Build a report from its parts.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, user_id: UserId) -> Self {
        Self {
            latitude,
            longitude,
            user_id,
        }
    }

    /// Decode the first JSON value of a request body.
    ///
    /// Bytes after the first complete value are ignored, matching a streaming
    /// decoder that stops once it has read one object.
    ///
    /// # Errors
    /// Returns [`DecodeError::Empty`] when the body holds no value and
    /// [`DecodeError::Malformed`] when the value is truncated, is not an
    /// object, or carries a field of the wrong type.
    ///
    /// # Examples
    /// ```
    /// use location_ingest::domain::{LocationReport, UserId};
    ///
    /// let report = LocationReport::decode(br#"{"latitude":1.5,"userID":3}"#)?;
    /// assert_eq!(report.user_id(), UserId::new(3));
    /// assert_eq!(report.longitude(), 0.0);
    /// # Ok::<(), location_ingest::domain::DecodeError>(())
    /// ```
    pub fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Self>();
        match values.next() {
            Some(report) => Ok(report?),
            None => Err(DecodeError::Empty),
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// User the report belongs to.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }
}

#[cfg(test)]
mod tests {
    //! Decoder coverage for accepted and rejected body shapes.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn decodes_full_payload() {
        let report =
            LocationReport::decode(br#"{"latitude":12.34,"longitude":56.78,"userID":1}"#)
                .expect("valid payload");

        assert_eq!(report, LocationReport::new(12.34, 56.78, UserId::new(1)));
    }

    #[rstest]
    fn missing_fields_default_to_zero() {
        let report = LocationReport::decode(b"{}").expect("empty object decodes");

        assert_eq!(report, LocationReport::default());
        assert_eq!(report.user_id(), UserId::new(0));
    }

    #[rstest]
    fn unknown_fields_are_ignored() {
        let report = LocationReport::decode(
            br#"{"latitude":1.0,"longitude":2.0,"userID":5,"accuracy":12,"source":"gps"}"#,
        )
        .expect("extra fields tolerated");

        assert_eq!(report.user_id(), UserId::new(5));
    }

    #[rstest]
    #[case::camel_user(br#"{"userId":9}"#.as_slice(), LocationReport::new(0.0, 0.0, UserId::new(9)))]
    #[case::lower_user(br#"{"latitude":1.5,"userid":9}"#.as_slice(), LocationReport::new(1.5, 0.0, UserId::new(9)))]
    #[case::capitalised(
        br#"{"Latitude":12.34,"Longitude":56.78,"userID":1}"#.as_slice(),
        LocationReport::new(12.34, 56.78, UserId::new(1))
    )]
    #[case::shouting(
        br#"{"LATITUDE":-3.0,"LONGITUDE":4.0,"USERID":2}"#.as_slice(),
        LocationReport::new(-3.0, 4.0, UserId::new(2))
    )]
    fn keys_match_regardless_of_case(#[case] body: &[u8], #[case] expected: LocationReport) {
        let report = LocationReport::decode(body).expect("case-insensitive keys decode");

        assert_eq!(report, expected);
    }

    #[rstest]
    fn null_fields_leave_zero() {
        let report =
            LocationReport::decode(br#"{"latitude":null,"longitude":2.5,"userID":null}"#)
                .expect("null fields accepted");

        assert_eq!(report, LocationReport::new(0.0, 2.5, UserId::new(0)));
    }

    #[rstest]
    fn null_does_not_clear_earlier_value() {
        let report = LocationReport::decode(br#"{"latitude":7.0,"latitude":null}"#)
            .expect("null after value accepted");

        assert_eq!(report.latitude(), 7.0);
    }

    #[rstest]
    #[case::same_spelling(br#"{"userID":1,"userID":3}"#.as_slice())]
    #[case::mixed_spelling(br#"{"userID":1,"userId":3}"#.as_slice())]
    #[case::lower_last(br#"{"UserID":1,"userid":3}"#.as_slice())]
    fn last_duplicate_key_wins(#[case] body: &[u8]) {
        let report = LocationReport::decode(body).expect("duplicate keys accepted");

        assert_eq!(report.user_id(), UserId::new(3));
    }

    #[rstest]
    fn trailing_bytes_after_first_value_are_ignored() {
        let report = LocationReport::decode(br#"{"userID":4} trailing garbage"#)
            .expect("first value decodes");

        assert_eq!(report.user_id(), UserId::new(4));
    }

    #[rstest]
    fn coordinates_are_not_range_checked() {
        let report = LocationReport::decode(br#"{"latitude":512.0,"longitude":-999.5,"userID":1}"#)
            .expect("out-of-range coordinates still decode");

        assert_eq!(report.latitude(), 512.0);
        assert_eq!(report.longitude(), -999.5);
    }

    #[rstest]
    #[case::empty(b"".as_slice())]
    #[case::whitespace(b"  \n ".as_slice())]
    fn blank_body_is_empty(#[case] body: &[u8]) {
        let err = LocationReport::decode(body).expect_err("blank body rejected");

        assert!(matches!(err, DecodeError::Empty));
    }

    #[rstest]
    #[case::truncated(br#"{"latitude":12.34,"longitude":"#.as_slice())]
    #[case::string_latitude(br#"{"latitude":"north","userID":1}"#.as_slice())]
    #[case::fractional_user(br#"{"userID":1.5}"#.as_slice())]
    #[case::string_user(br#"{"userID":"1"}"#.as_slice())]
    #[case::user_overflow(br#"{"userID":99999999999999999999}"#.as_slice())]
    #[case::array(b"[1,2,3]".as_slice())]
    #[case::null(b"null".as_slice())]
    #[case::number(b"42".as_slice())]
    #[case::invalid_utf8(b"{\"latitude\":\xff}".as_slice())]
    fn malformed_bodies_are_rejected(#[case] body: &[u8]) {
        let err = LocationReport::decode(body).expect_err("malformed body rejected");

        assert!(matches!(err, DecodeError::Malformed(_)), "got {err:?}");
    }

    #[rstest]
    #[case(1, true)]
    #[case(0, false)]
    #[case(-1, false)]
    fn only_positive_ids_are_assignable(#[case] raw: i64, #[case] expected: bool) {
        assert_eq!(UserId::new(raw).is_assignable(), expected);
    }
}
