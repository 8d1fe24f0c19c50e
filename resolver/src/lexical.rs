//! Lexical-space checks for the XSD types kept in lexical form.
//!
//! Dates and times are checked twice: the shape with a regex, the calendar
//! with chrono. Durations and binary types only have a shape.

use std::sync::OnceLock;

use aspect_meta_model::iris;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

const DATE: &str = r"-?\d{4,}-\d{2}-\d{2}";
const DATE_TIME: &str = r"-?\d{4,}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?";
const TIME: &str = r"\d{2}:\d{2}:\d{2}(?:\.\d+)?";
const TIME_PART: &str = r"(?:\d+H)?(?:\d+M)?(?:\d+(?:\.\d+)?S)?";

/// Shapes of the timezone-free part of each type, anchored on use.
fn shapes() -> &'static [(&'static str, Regex)] {
    static SHAPES: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    SHAPES.get_or_init(|| {
        let table = [
            (iris::XSD_DATE, DATE.to_owned()),
            (iris::XSD_DATE_TIME, DATE_TIME.to_owned()),
            (iris::XSD_DATE_TIME_STAMP, DATE_TIME.to_owned()),
            (iris::XSD_TIME, TIME.to_owned()),
            (iris::XSD_G_YEAR, r"-?\d{4,}".to_owned()),
            (iris::XSD_G_YEAR_MONTH, r"-?\d{4,}-\d{2}".to_owned()),
            (iris::XSD_G_MONTH, r"--\d{2}".to_owned()),
            (iris::XSD_G_DAY, r"---\d{2}".to_owned()),
            (iris::XSD_G_MONTH_DAY, r"--\d{2}-\d{2}".to_owned()),
            (
                iris::XSD_DURATION,
                format!(r"-?P(?:\d+Y)?(?:\d+M)?(?:\d+D)?(?:T{TIME_PART})?"),
            ),
            (iris::XSD_YEAR_MONTH_DURATION, r"-?P(?:\d+Y)?(?:\d+M)?".to_owned()),
            (
                iris::XSD_DAY_TIME_DURATION,
                format!(r"-?P(?:\d+D)?(?:T{TIME_PART})?"),
            ),
            (iris::XSD_HEX_BINARY, r"(?:[0-9A-Fa-f]{2})*".to_owned()),
            (
                iris::XSD_BASE64_BINARY,
                r"(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?".to_owned(),
            ),
        ];
        table
            .into_iter()
            .filter_map(|(datatype, shape)| {
                Regex::new(&format!("^(?:{shape})$"))
                    .ok()
                    .map(|re| (datatype, re))
            })
            .collect()
    })
}

/// Splits an optional `Z` or `±hh:mm` suffix off a temporal literal.
fn split_timezone(lexical: &str) -> Option<(&str, Option<&str>)> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    let captures = PATTERN
        .get_or_init(|| {
            Regex::new(r"^(?P<v>.+?)(?P<tz>Z|[+-](?:(?:0\d|1[0-3]):[0-5]\d|14:00))?$").ok()
        })
        .as_ref()?
        .captures(lexical)?;
    Some((captures.name("v")?.as_str(), captures.name("tz").map(|m| m.as_str())))
}

fn has_timezone(datatype: &str) -> bool {
    matches!(
        datatype,
        iris::XSD_DATE
            | iris::XSD_DATE_TIME
            | iris::XSD_DATE_TIME_STAMP
            | iris::XSD_TIME
            | iris::XSD_G_YEAR
            | iris::XSD_G_YEAR_MONTH
            | iris::XSD_G_MONTH
            | iris::XSD_G_DAY
            | iris::XSD_G_MONTH_DAY
    )
}

fn is_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

fn is_time(value: &str) -> bool {
    // 24:00:00 is the end of a day.
    (value.starts_with("24:00:00") && value[8..].trim_start_matches(['.', '0']).is_empty())
        || NaiveTime::parse_from_str(value, "%H:%M:%S%.f").is_ok()
}

fn is_date_time(value: &str) -> bool {
    match value.split_once('T') {
        Some((date, time)) if time.starts_with("24:") => is_date(date) && is_time(time),
        _ => NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").is_ok(),
    }
}

/// Returns false if `lexical` is outside the lexical space of `datatype`.
///
/// Types without a check here (strings, URIs, CURIEs) always pass.
pub(crate) fn is_valid(datatype: &str, lexical: &str) -> bool {
    let Some((_, shape)) = shapes().iter().find(|(dt, _)| *dt == datatype) else {
        return true;
    };
    let lexical = lexical.trim();
    if datatype == iris::XSD_BASE64_BINARY {
        let packed: String = lexical.split_whitespace().collect();
        return shape.is_match(&packed);
    }
    let (value, timezone) = if has_timezone(datatype) {
        match split_timezone(lexical) {
            Some(split) => split,
            None => return false,
        }
    } else {
        (lexical, None)
    };
    if !shape.is_match(value) {
        return false;
    }
    match datatype {
        iris::XSD_DATE => is_date(value),
        iris::XSD_DATE_TIME => is_date_time(value),
        iris::XSD_DATE_TIME_STAMP => timezone.is_some() && is_date_time(value),
        iris::XSD_TIME => is_time(value),
        iris::XSD_G_YEAR => is_date(&format!("{value}-01-01")),
        iris::XSD_G_YEAR_MONTH => is_date(&format!("{value}-01")),
        iris::XSD_G_MONTH => is_date(&format!("2000{}-01", &value[1..])),
        iris::XSD_G_DAY => is_date(&format!("2000-01{}", &value[2..])),
        // 2000 is a leap year, so --02-29 passes.
        iris::XSD_G_MONTH_DAY => is_date(&format!("2000{}", &value[1..])),
        iris::XSD_DURATION | iris::XSD_YEAR_MONTH_DURATION | iris::XSD_DAY_TIME_DURATION => {
            !value.ends_with('P') && !value.ends_with('T')
        }
        _ => true,
    }
}
