use time::{Duration, OffsetDateTime, Time, UtcOffset};

/// Per-request time windows. `start_of_day`/`end_of_day` are midnight boundaries in the
/// caller's offset; `week_ahead` is a rolling seven-day horizon from `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindows {
	pub now: OffsetDateTime,
	pub start_of_day: OffsetDateTime,
	pub end_of_day: OffsetDateTime,
	pub week_ahead: OffsetDateTime,
}

impl DayWindows {
	pub fn compute(now: OffsetDateTime, offset: UtcOffset) -> Self {
		let local = now.to_offset(offset);
		let start_of_day = local.replace_time(Time::MIDNIGHT);

		Self {
			now,
			start_of_day,
			end_of_day: start_of_day + Duration::days(1),
			week_ahead: now + Duration::days(7),
		}
	}
}

/// Parses a caller-supplied offset of the form `+HH:MM` / `-HH:MM` (or `Z`).
pub fn parse_utc_offset(raw: &str) -> Option<UtcOffset> {
	let raw = raw.trim();

	if raw.eq_ignore_ascii_case("z") {
		return Some(UtcOffset::UTC);
	}

	let (sign, rest) = match raw.split_at_checked(1)? {
		("+", rest) => (1_i8, rest),
		("-", rest) => (-1_i8, rest),
		_ => return None,
	};
	let (hours, minutes) = rest.split_once(':')?;

	if hours.len() != 2 || minutes.len() != 2 {
		return None;
	}

	let hours = hours.parse::<i8>().ok()?;
	let minutes = minutes.parse::<i8>().ok()?;

	if !(0..=14).contains(&hours) || !(0..=59).contains(&minutes) {
		return None;
	}

	UtcOffset::from_hms(sign * hours, sign * minutes, 0).ok()
}
