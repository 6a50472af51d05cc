//! Exposure records as delivered by the exposure-detection layer.

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime, UtcOffset};

/// A place and the moment a potential contact there began.
///
/// On the wire this is a GeoJSON-like feature:
/// `{ "properties": { "Place": "...", "fromTime": <epoch ms> } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Feature", into = "Feature")]
pub struct Exposure {
    pub place: String,
    /// Milliseconds since the Unix epoch.
    pub from_time_ms: i64,
}

#[derive(Serialize, Deserialize)]
struct Feature {
    properties: Properties,
}

#[derive(Serialize, Deserialize)]
struct Properties {
    #[serde(rename = "Place")]
    place: String,
    #[serde(rename = "fromTime")]
    from_time: i64,
}

impl Exposure {
    pub fn new<T: Into<String>>(place: T, from_time_ms: i64) -> Self {
        Self {
            place: place.into(),
            from_time_ms,
        }
    }

    pub fn at(place: impl Into<String>, from_time: OffsetDateTime) -> Self {
        let millis = from_time.unix_timestamp_nanos() / 1_000_000;
        Self::new(place.into(), millis as i64)
    }

    /// Start of the exposure window, `None` if the timestamp is out of range.
    pub fn starts_at(&self) -> Option<OffsetDateTime> {
        let nanos = i128::from(self.from_time_ms) * 1_000_000;
        OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()
    }

    /// Start of the exposure window on the wall clock of `offset`.
    pub fn starts_at_in(&self, offset: UtcOffset) -> Option<OffsetDateTime> {
        let shift = Duration::seconds(i64::from(offset.whole_seconds()));
        self.starts_at()?
            .checked_add(shift)
            .map(|local| local.replace_offset(offset))
    }

    /// Start of the exposure window on the local calendar. `offset_at` gives
    /// the zone offset in force at a given instant and is asked about the
    /// start itself, so a window before a DST change keeps its own offset.
    pub fn starts_at_local(
        &self,
        offset_at: impl FnOnce(OffsetDateTime) -> UtcOffset,
    ) -> Option<OffsetDateTime> {
        let start = self.starts_at()?;
        self.starts_at_in(offset_at(start))
    }
}

impl From<Feature> for Exposure {
    fn from(feature: Feature) -> Self {
        Self {
            place: feature.properties.place,
            from_time_ms: feature.properties.from_time,
        }
    }
}

impl From<Exposure> for Feature {
    fn from(exposure: Exposure) -> Self {
        Self {
            properties: Properties {
                place: exposure.place,
                from_time: exposure.from_time_ms,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, offset};

    #[test]
    fn parses_feature_shape() {
        let raw = r#"{ "properties": { "Place": "Cafe X", "fromTime": 1615818600000, "toTime": 1615822200000 } }"#;
        let exposure: Exposure = serde_json::from_str(raw).unwrap();
        assert_eq!(exposure.place, "Cafe X");
        assert_eq!(
            exposure.starts_at(),
            Some(datetime!(2021-03-15 14:30 UTC))
        );
    }

    #[test]
    fn serializes_back_to_feature_shape() {
        let exposure = Exposure::at("Cafe X", datetime!(2021-03-15 14:30 UTC));
        let value = serde_json::to_value(&exposure).unwrap();
        assert_eq!(value["properties"]["Place"], "Cafe X");
        assert_eq!(value["properties"]["fromTime"], 1_615_818_600_000_i64);
    }

    #[test]
    fn out_of_range_timestamp_has_no_start() {
        assert_eq!(Exposure::new("Nowhere", i64::MAX).starts_at(), None);
        assert_eq!(Exposure::new("Nowhere", i64::MIN).starts_at(), None);
    }

    #[test]
    fn local_start_shifts_wall_clock() {
        let exposure = Exposure::at("Cafe X", datetime!(2021-03-15 23:30 UTC));
        let local = exposure.starts_at_in(offset!(+2)).unwrap();
        assert_eq!(local, datetime!(2021-03-16 01:30 +2));
        assert_eq!((local.hour(), local.minute()), (1, 30));
    }

    #[test]
    fn local_start_of_out_of_range_timestamp_is_none() {
        assert_eq!(Exposure::new("Nowhere", i64::MAX).starts_at_in(offset!(-5)), None);
    }

    /// Israel in 2021: +02:00 until 2021-03-26 02:00 local, +03:00 after.
    fn israel_2021(instant: OffsetDateTime) -> UtcOffset {
        if instant < datetime!(2021-03-26 00:00 UTC) {
            offset!(+2)
        } else {
            offset!(+3)
        }
    }

    #[test]
    fn local_start_uses_offset_in_force_at_that_instant() {
        let winter = Exposure::new("Cafe X", 1_615_818_600_000);
        let local = winter.starts_at_local(israel_2021).unwrap();
        assert_eq!(local.offset(), offset!(+2));
        assert_eq!((local.hour(), local.minute()), (16, 30));

        let summer = Exposure::at("Cafe X", datetime!(2021-04-01 14:30 UTC));
        let local = summer.starts_at_local(israel_2021).unwrap();
        assert_eq!(local.offset(), offset!(+3));
        assert_eq!((local.hour(), local.minute()), (17, 30));
    }

    #[test]
    fn local_start_asks_about_the_exposure_instant() {
        let exposure = Exposure::at("Cafe X", datetime!(2021-03-15 14:30 UTC));
        let mut asked = None;
        let _ = exposure.starts_at_local(|instant| {
            asked = Some(instant);
            UtcOffset::UTC
        });
        assert_eq!(asked, Some(datetime!(2021-03-15 14:30 UTC)));
    }

    #[test]
    fn local_start_skips_lookup_for_out_of_range_timestamp() {
        let start = Exposure::new("Nowhere", i64::MAX)
            .starts_at_local(|_| panic!("no instant to look up"));
        assert_eq!(start, None);
    }

    #[test]
    fn missing_place_is_rejected() {
        let raw = r#"{ "properties": { "fromTime": 0 } }"#;
        assert!(serde_json::from_str::<Exposure>(raw).is_err());
    }
}
