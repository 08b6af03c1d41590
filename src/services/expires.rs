use crate::domain::constants::DEFAULT_EXPIRES;
use anyhow::{bail, Result};
use chrono::{DateTime, Duration, Months, NaiveDate, SecondsFormat, Utc};

/// Resolve a raw expiration input into the literal the builder receives.
///
/// Accepts shorthand (`30d`, `6m`, `1y`) resolved against the current time,
/// or an RFC 3339 / `YYYY-MM-DD` literal passed through verbatim. An absent
/// input falls back to the `180d` shorthand. This is the only clock access
/// in the program; the builder itself never sees anything but the literal.
pub fn resolve_expires(raw: Option<&str>) -> Result<String> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_EXPIRES);

    if let Some(resolved) = resolve_shorthand(raw, Utc::now()) {
        return Ok(resolved);
    }
    if DateTime::parse_from_rfc3339(raw).is_ok()
        || NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok()
    {
        return Ok(raw.to_string());
    }
    bail!("invalid expires value \"{raw}\": expected an RFC 3339 timestamp, YYYY-MM-DD, or shorthand like 30d/6m/1y");
}

fn resolve_shorthand(raw: &str, now: DateTime<Utc>) -> Option<String> {
    let unit = raw.chars().last()?;
    let count = &raw[..raw.len() - unit.len_utf8()];
    if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: u32 = count.parse().ok()?;
    let target = match unit {
        'd' => now.checked_add_signed(Duration::days(i64::from(n)))?,
        'm' => now.checked_add_months(Months::new(n))?,
        'y' => now.checked_add_months(Months::new(n.checked_mul(12)?))?,
        _ => return None,
    };
    Some(target.to_rfc3339_opts(SecondsFormat::Secs, true))
}

#[cfg(test)]
mod tests {
    use super::{resolve_expires, resolve_shorthand};
    use chrono::{DateTime, TimeZone, Utc};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn shorthand_days_months_years() {
        assert_eq!(
            resolve_shorthand("30d", fixed_now()).as_deref(),
            Some("2025-02-14T12:00:00Z")
        );
        assert_eq!(
            resolve_shorthand("6m", fixed_now()).as_deref(),
            Some("2025-07-15T12:00:00Z")
        );
        assert_eq!(
            resolve_shorthand("1y", fixed_now()).as_deref(),
            Some("2026-01-15T12:00:00Z")
        );
    }

    #[test]
    fn literals_pass_through_verbatim() {
        assert_eq!(
            resolve_expires(Some("2026-12-31T23:59:59Z")).unwrap(),
            "2026-12-31T23:59:59Z"
        );
        assert_eq!(resolve_expires(Some("2026-12-31")).unwrap(), "2026-12-31");
    }

    #[test]
    fn absent_input_defaults_to_a_future_timestamp() {
        let resolved = resolve_expires(None).unwrap();
        let parsed = DateTime::parse_from_rfc3339(&resolved).unwrap();
        assert!(parsed.with_timezone(&Utc) > Utc::now());
    }

    #[test]
    fn malformed_literal_is_rejected_by_name() {
        let err = resolve_expires(Some("next tuesday")).unwrap_err();
        assert!(err.to_string().contains("next tuesday"));
        assert!(resolve_expires(Some("d")).is_err());
        assert!(resolve_expires(Some("-3d")).is_err());
    }

    #[test]
    fn shorthand_rejects_non_digit_counts() {
        assert!(resolve_shorthand("xd", fixed_now()).is_none());
        assert!(resolve_shorthand("30w", fixed_now()).is_none());
        assert!(resolve_shorthand("m", fixed_now()).is_none());
    }
}
