use chrono::{DateTime, FixedOffset};
use huddle_models::v0;

use crate::UserActivity;

/// All clock times are rendered for the workplace, UTC+7
const WORKPLACE_UTC_OFFSET_SECS: i32 = 7 * 3600;

/// Bring a stored timestamp to Unix milliseconds
///
/// Values below two billion can only be seconds, anything else is
/// already milliseconds.
pub fn normalize_timestamp(ts: i64) -> i64 {
    if ts < 2_000_000_000 {
        ts * 1000
    } else {
        ts
    }
}

/// Render a duration as "H hr M mins", negative input floors to zero
pub fn format_duration(ms: i64) -> String {
    let total_minutes = ms.max(0) / 60_000;
    format!("{} hr {} mins", total_minutes / 60, total_minutes % 60)
}

fn local(ts: i64) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(WORKPLACE_UTC_OFFSET_SECS).unwrap();
    DateTime::from_timestamp_millis(ts)
        .unwrap_or_default()
        .with_timezone(&offset)
}

pub fn format_report_date(ts: i64) -> String {
    local(ts).format("%Y-%m-%d").to_string()
}

pub fn format_report_time(ts: i64) -> String {
    local(ts).format("%H:%M:%S").to_string()
}

pub fn format_check_in(ts: i64) -> String {
    local(ts).format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// Closed interval in Unix milliseconds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedInterval {
    pub start: i64,
    pub end: i64,
}

impl ClosedInterval {
    pub fn duration_ms(&self) -> i64 {
        (self.end - self.start).max(0)
    }
}

/// One closed break with its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakInterval {
    pub interval: ClosedInterval,
    pub break_type: v0::BreakType,
}

enum WorkState {
    Idle,
    CheckedIn { since: i64 },
}

enum BreakState {
    Available,
    OnBreak { since: i64, category: v0::BreakType },
}

/// Replays an activity log into closed work and break intervals
///
/// Both machines hold a single open slot. A repeated opening event
/// overwrites the slot and a closing event without an open slot is
/// dropped, so a malformed log can never fail the replay. An explicit
/// `start` or `end` on an event takes precedence over its recorded
/// timestamp when placing the interval bound.
pub struct SessionReplay {
    work: WorkState,
    breaks: BreakState,
    /// Most recent check-in seen, whether or not it was closed
    pub last_check_in: Option<i64>,
    pub work_sessions: Vec<ClosedInterval>,
    pub break_sessions: Vec<BreakInterval>,
}

impl SessionReplay {
    pub fn new() -> SessionReplay {
        SessionReplay {
            work: WorkState::Idle,
            breaks: BreakState::Available,
            last_check_in: None,
            work_sessions: Vec::new(),
            break_sessions: Vec::new(),
        }
    }

    /// Replay a log, oldest entry first
    pub fn replay(entries: &[UserActivity]) -> SessionReplay {
        let mut replay = SessionReplay::new();
        for entry in entries {
            replay.step(entry);
        }
        replay
    }

    pub fn step(&mut self, entry: &UserActivity) {
        let opens_at = normalize_timestamp(entry.start.unwrap_or(entry.timestamp));
        let closes_at = normalize_timestamp(entry.end.unwrap_or(entry.timestamp));

        match entry.activity_type {
            v0::ActivityType::Checkin => {
                self.work = WorkState::CheckedIn { since: opens_at };
                self.last_check_in = Some(opens_at);
            }
            v0::ActivityType::Checkout => {
                if let WorkState::CheckedIn { since } = self.work {
                    self.work_sessions.push(ClosedInterval {
                        start: since,
                        end: closes_at,
                    });
                    self.work = WorkState::Idle;
                }
            }
            v0::ActivityType::Breakin => {
                if let Some(category) = entry.break_type.clone() {
                    self.breaks = BreakState::OnBreak {
                        since: opens_at,
                        category,
                    };
                }
            }
            v0::ActivityType::Breakout => {
                if let BreakState::OnBreak { since, category } =
                    std::mem::replace(&mut self.breaks, BreakState::Available)
                {
                    self.break_sessions.push(BreakInterval {
                        interval: ClosedInterval {
                            start: since,
                            end: closes_at,
                        },
                        break_type: category,
                    });
                }
            }
        }
    }
}

impl Default for SessionReplay {
    fn default() -> Self {
        SessionReplay::new()
    }
}

#[cfg(test)]
mod tests {
    use huddle_models::v0;
    use ulid::Ulid;

    use super::{format_duration, normalize_timestamp, ClosedInterval, SessionReplay};
    use crate::UserActivity;

    fn entry(
        kind: v0::ActivityType,
        break_type: Option<v0::BreakType>,
        timestamp: i64,
        start: Option<i64>,
        end: Option<i64>,
    ) -> UserActivity {
        UserActivity {
            id: Ulid::new().to_string(),
            user_id: "user".to_string(),
            activity_type: kind,
            break_type,
            timestamp,
            start,
            end,
            reason: None,
        }
    }

    #[test]
    fn second_precision_timestamps_are_scaled() {
        assert_eq!(normalize_timestamp(1_700_000_000), 1_700_000_000_000);
        assert_eq!(normalize_timestamp(1_700_000_000_000), 1_700_000_000_000);
    }

    #[test]
    fn durations_render_in_hours_and_minutes() {
        assert_eq!(format_duration(0), "0 hr 0 mins");
        assert_eq!(format_duration(90 * 60_000), "1 hr 30 mins");
        assert_eq!(format_duration(-5_000), "0 hr 0 mins");
    }

    #[test]
    fn explicit_bounds_override_the_recorded_timestamp() {
        let t0: i64 = 1_700_000_000_000;

        let replay = SessionReplay::replay(&[
            entry(
                v0::ActivityType::Checkin,
                None,
                t0 + 120_000,
                Some(t0),
                None,
            ),
            entry(
                v0::ActivityType::Breakin,
                Some(v0::BreakType::Toilet),
                t0 + 600_000,
                Some(t0),
                None,
            ),
            entry(
                v0::ActivityType::Breakout,
                None,
                t0 + 1_200_000,
                None,
                Some(t0 + 3_600_000),
            ),
        ]);

        assert_eq!(replay.last_check_in, Some(t0));
        assert_eq!(replay.break_sessions.len(), 1);
        assert_eq!(
            replay.break_sessions[0].interval,
            ClosedInterval {
                start: t0,
                end: t0 + 3_600_000,
            }
        );
    }
}
