use chrono::{DateTime, Timelike, Utc};
use tracing::warn;

/// RFC 1123 as HTTP dates use it. The day of month is not zero-padded.
const RFC_1123: &str = "%a, %-d %b %Y %H:%M:%S GMT";

/// Convert an ISO-8601 instant (`2011-01-25T18:44:36Z`) into RFC 1123 form
/// (`Tue, 25 Jan 2011 18:44:36 GMT`), always rendered in UTC.
///
/// A value that does not parse is logged and handed back unchanged; a bad
/// date never fails the request it belongs to.
pub fn reformat(input: Option<&str>) -> Option<String> {
    let input = input?;

    match parse_instant(input) {
        Ok(instant) => Some(instant.format(RFC_1123).to_string()),
        Err(reason) => {
            warn!(input, error = %reason, "Unable to convert date to RFC 1123 format");
            Some(input.to_string())
        }
    }
}

/// Parse a strict ISO-8601 instant: `T` between date and time, and either `Z`
/// or a numeric offset. RFC 3339 parsing alone also admits a space separator
/// and lowercase `t`/`z`.
fn parse_instant(input: &str) -> Result<DateTime<Utc>, String> {
    if input.as_bytes().get(10) != Some(&b'T') {
        return Err("expected 'T' between date and time".into());
    }
    if input.contains('z') || input.contains('t') {
        return Err("lowercase designator".into());
    }

    let instant = DateTime::parse_from_rfc3339(input)
        .map_err(|e| e.to_string())?
        .with_timezone(&Utc);

    // A leap second is carried as nanoseconds past one billion; fold it into :59.
    let nanos = instant.nanosecond() % 1_000_000_000;
    Ok(instant.with_nanosecond(nanos).unwrap_or(instant))
}
