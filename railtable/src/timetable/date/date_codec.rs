pub mod gtfs {
    //! deserializers for dates and flags parsed from a GTFS feed, where dates
    //! (should) have yyyymmdd format and weekday flags are 0 or 1.
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer};

    pub const GTFS_DATE_FORMAT: &str = "%Y%m%d";

    pub fn deserialize_naive_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let date_str: String = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(date_str.trim(), GTFS_DATE_FORMAT)
            .map_err(|e| D::Error::custom(format!("Invalid date format '{date_str}': {e}")))
    }

    pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let flag_str: String = String::deserialize(deserializer)?;
        match flag_str.trim() {
            "0" => Ok(false),
            "1" => Ok(true),
            other => Err(D::Error::custom(format!(
                "Invalid weekday flag '{other}', expected 0 or 1"
            ))),
        }
    }
}

pub mod app {
    //! dates provided by the user on the command line or in a configuration
    //! file. these share the GTFS yyyymmdd format so that a calendar.txt date
    //! can be pasted as-is.
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use super::gtfs::GTFS_DATE_FORMAT;

    pub const APP_DATE_FORMAT: &str = GTFS_DATE_FORMAT;

    /// clap value parser for a reference date argument
    pub fn parse_naive_date(s: &str) -> Result<NaiveDate, String> {
        NaiveDate::parse_from_str(s.trim(), APP_DATE_FORMAT).map_err(|e| {
            format!("failed reading date value '{s}'. required format: 'YYYYMMDD'. error: {e}")
        })
    }

    pub fn deserialize_optional_naive_date<'de, D>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let date_str: Option<String> = Option::deserialize(deserializer)?;
        match date_str.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse_naive_date(s).map(Some).map_err(D::Error::custom),
        }
    }

    pub fn serialize_optional_naive_date<S>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_some(&d.format(APP_DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::app::parse_naive_date;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_naive_date() {
        let result = parse_naive_date("20180923").unwrap();
        assert_eq!(result, NaiveDate::from_ymd_opt(2018, 9, 23).unwrap());
    }

    #[test]
    fn test_parse_naive_date_wrong_format() {
        let result = parse_naive_date("09-23-2018");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("YYYYMMDD"));
    }
}
