use serde::{Deserialize, Deserializer};
use serde_with::DeserializeAs;
use time::{
    format_description::well_known::Rfc3339 as Rfc3339Format, macros::datetime, OffsetDateTime,
};

/// Timestamps that haven't been set are sent as the zero time:
///
/// ```txt
/// 0001-01-01T00:00:00Z
/// ```
fn is_zero_time(datetime: &OffsetDateTime) -> bool {
    *datetime == datetime!(0001-01-01 00:00:00 UTC)
}

fn parse_rfc3339(s: &str) -> Result<OffsetDateTime, time::error::Parse> {
    OffsetDateTime::parse(s, &Rfc3339Format)
}

/// RFC 3339 timestamp, for use inside containers.
pub(crate) struct Rfc3339;

impl<'de> DeserializeAs<'de, OffsetDateTime> for Rfc3339 {
    fn deserialize_as<D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_rfc3339(&s).map_err(serde::de::Error::custom)
    }
}

/// RFC 3339 timestamp where `null`, an empty string and the zero time
/// all mean `None`.
pub(crate) struct OptDateTime;

impl<'de> DeserializeAs<'de, Option<OffsetDateTime>> for OptDateTime {
    fn deserialize_as<D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty());

        match s {
            Some(s) => parse_rfc3339(&s)
                .map_err(serde::de::Error::custom)
                .map(|datetime| Some(datetime).filter(|dt| !is_zero_time(dt))),
            None => Ok(None),
        }
    }
}
