use huddle_models::v0;
use huddle_result::Result;
use ulid::Ulid;

use crate::{
    format_check_in, format_duration, format_report_date, format_report_time, ClosedInterval,
    Database, SessionReplay,
};

auto_derived!(
    /// One recorded activity event in a user's log
    pub struct UserActivity {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the user
        pub user_id: String,
        /// Kind of event
        #[serde(rename = "type")]
        pub activity_type: v0::ActivityType,
        /// Break category, present on break events only
        #[serde(skip_serializing_if = "Option::is_none")]
        pub break_type: Option<v0::BreakType>,
        /// Unix timestamp (ms) the event was recorded at
        pub timestamp: i64,
        /// Explicit interval start supplied by the client
        #[serde(skip_serializing_if = "Option::is_none")]
        pub start: Option<i64>,
        /// Explicit interval end supplied by the client
        #[serde(skip_serializing_if = "Option::is_none")]
        pub end: Option<i64>,
        /// Free-text reason
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reason: Option<String>,
    }
);

impl UserActivity {
    /// Record a single activity event for a known user
    ///
    /// Break events require a recognised break category, non-break
    /// events must not carry one.
    pub async fn record(db: &Database, data: v0::DataRecordActivity) -> Result<UserActivity> {
        let activity_type: v0::ActivityType = data.activity_type.parse().map_err(|_| {
            create_error!(FailedValidation {
                error: format!("Invalid activity type: {}", data.activity_type)
            })
        })?;

        let break_type = if activity_type.is_break() {
            let raw = data.break_type.ok_or_else(|| {
                create_error!(FailedValidation {
                    error: format!("breakType is required for {}", activity_type)
                })
            })?;

            Some(raw.parse::<v0::BreakType>().map_err(|_| {
                create_error!(FailedValidation {
                    error: format!("Invalid break type: {}", raw)
                })
            })?)
        } else {
            if data.break_type.is_some() {
                return Err(create_error!(FailedValidation {
                    error: format!("breakType must not be provided for {}", activity_type)
                }));
            }

            None
        };

        db.fetch_user(&data.user_id).await?;

        let activity = UserActivity {
            id: Ulid::new().to_string(),
            user_id: data.user_id,
            activity_type,
            break_type,
            timestamp: chrono::Utc::now().timestamp_millis(),
            start: data.start,
            end: data.end,
            reason: data.reason,
        };

        db.insert_activity(&activity).await?;
        Ok(activity)
    }

    /// List a user's activity log, newest first
    pub async fn list(db: &Database, user_id: &str) -> Result<Vec<v0::ActivityEntry>> {
        let mut entries = db.fetch_activity_by_user(user_id).await?;
        entries.reverse();
        Ok(entries.into_iter().map(Into::into).collect())
    }

    /// Report every closed break in a user's log, oldest first
    pub async fn break_report(db: &Database, user_id: &str) -> Result<Vec<v0::BreakReportEntry>> {
        let entries = db.fetch_activity_by_user(user_id).await?;
        let replay = SessionReplay::replay(&entries);

        Ok(replay
            .break_sessions
            .into_iter()
            .map(|session| v0::BreakReportEntry {
                date: format_report_date(session.interval.start),
                start_time: format_report_time(session.interval.start),
                end_time: format_report_time(session.interval.end),
                total: format_duration(session.interval.duration_ms()),
                break_type: session.break_type,
            })
            .collect())
    }

    /// Aggregate a user's closed work and break time
    pub async fn daily_summary(db: &Database, user_id: &str) -> Result<v0::DailySummary> {
        let entries = db.fetch_activity_by_user(user_id).await?;
        let replay = SessionReplay::replay(&entries);

        let total_hours_ms: i64 = replay
            .work_sessions
            .iter()
            .map(ClosedInterval::duration_ms)
            .sum();
        let total_break_ms: i64 = replay
            .break_sessions
            .iter()
            .map(|session| session.interval.duration_ms())
            .sum();
        let total_work_ms = (total_hours_ms - total_break_ms).max(0);

        Ok(v0::DailySummary {
            check_in: replay.last_check_in.map(format_check_in),
            total_hours: format_duration(total_hours_ms),
            total_break: format_duration(total_break_ms),
            total_work: format_duration(total_work_ms),
        })
    }
}

impl From<UserActivity> for v0::ActivityEntry {
    fn from(value: UserActivity) -> Self {
        v0::ActivityEntry {
            id: value.id,
            activity_type: value.activity_type,
            break_type: value.break_type,
            timestamp: value.timestamp,
            start: value.start,
            end: value.end,
            reason: value.reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use huddle_models::v0;
    use ulid::Ulid;

    use crate::{Database, User, UserActivity};

    fn record_data(user_id: &str, kind: &str, break_type: Option<&str>) -> v0::DataRecordActivity {
        v0::DataRecordActivity {
            user_id: user_id.to_string(),
            activity_type: kind.to_string(),
            break_type: break_type.map(str::to_string),
            start: None,
            end: None,
            reason: None,
        }
    }

    async fn seed(db: &Database, user_id: &str, kind: v0::ActivityType, break_type: Option<v0::BreakType>, ts: i64) {
        db.insert_activity(&UserActivity {
            id: Ulid::new().to_string(),
            user_id: user_id.to_string(),
            activity_type: kind,
            break_type,
            timestamp: ts,
            start: None,
            end: None,
            reason: None,
        })
        .await
        .unwrap();
    }

    #[async_std::test]
    async fn record_validates_kind_and_break_category() {
        database_test!(|db| async move {
            let user = User::create(&db, "Ren".to_string(), None).await.unwrap();

            let err = UserActivity::record(&db, record_data(&user.id, "nap", None))
                .await
                .unwrap_err();
            assert_eq!(
                err.error_type,
                huddle_result::ErrorType::FailedValidation {
                    error: "Invalid activity type: nap".to_string()
                }
            );

            let err = UserActivity::record(&db, record_data(&user.id, "breakin", None))
                .await
                .unwrap_err();
            assert_eq!(
                err.error_type,
                huddle_result::ErrorType::FailedValidation {
                    error: "breakType is required for breakin".to_string()
                }
            );

            let err =
                UserActivity::record(&db, record_data(&user.id, "breakin", Some("Snooze")))
                    .await
                    .unwrap_err();
            assert_eq!(
                err.error_type,
                huddle_result::ErrorType::FailedValidation {
                    error: "Invalid break type: Snooze".to_string()
                }
            );

            let err =
                UserActivity::record(&db, record_data(&user.id, "checkin", Some("Toilet")))
                    .await
                    .unwrap_err();
            assert_eq!(
                err.error_type,
                huddle_result::ErrorType::FailedValidation {
                    error: "breakType must not be provided for checkin".to_string()
                }
            );

            let entry = UserActivity::record(&db, record_data(&user.id, "checkin", None))
                .await
                .unwrap();
            assert_eq!(entry.activity_type, v0::ActivityType::Checkin);
            assert!(entry.timestamp > 0);

            // unknown users cannot record activity
            assert!(
                UserActivity::record(&db, record_data("missing", "checkin", None))
                    .await
                    .is_err()
            );
        });
    }

    #[async_std::test]
    async fn break_report_holds_a_single_open_slot() {
        database_test!(|db| async move {
            let user = User::create(&db, "Mai".to_string(), None).await.unwrap();
            let t0: i64 = 1_700_000_000_000;

            // closing without an open slot is dropped
            seed(&db, &user.id, v0::ActivityType::Breakout, None, t0).await;

            // a second opening overwrites the first
            seed(
                &db,
                &user.id,
                v0::ActivityType::Breakin,
                Some(v0::BreakType::MealBreak),
                t0 + 60_000,
            )
            .await;
            seed(
                &db,
                &user.id,
                v0::ActivityType::Breakin,
                Some(v0::BreakType::Toilet),
                t0 + 120_000,
            )
            .await;
            seed(&db, &user.id, v0::ActivityType::Breakout, None, t0 + 720_000).await;

            // and another dangling close is dropped again
            seed(&db, &user.id, v0::ActivityType::Breakout, None, t0 + 800_000).await;

            let report = UserActivity::break_report(&db, &user.id).await.unwrap();
            assert_eq!(report.len(), 1);
            assert_eq!(report[0].break_type, v0::BreakType::Toilet);
            assert_eq!(report[0].total, "0 hr 10 mins");
        });
    }

    #[async_std::test]
    async fn daily_summary_nets_breaks_from_work() {
        database_test!(|db| async move {
            let user = User::create(&db, "Ren".to_string(), None).await.unwrap();

            let empty = UserActivity::daily_summary(&db, &user.id).await.unwrap();
            assert!(empty.check_in.is_none());
            assert_eq!(empty.total_hours, "0 hr 0 mins");
            assert_eq!(empty.total_break, "0 hr 0 mins");
            assert_eq!(empty.total_work, "0 hr 0 mins");

            // second-precision timestamps, as older clients stored them
            let t0: i64 = 1_700_000_000;
            seed(&db, &user.id, v0::ActivityType::Checkin, None, t0).await;
            seed(
                &db,
                &user.id,
                v0::ActivityType::Breakin,
                Some(v0::BreakType::Meeting),
                t0 + 600,
            )
            .await;
            seed(&db, &user.id, v0::ActivityType::Breakout, None, t0 + 1_200).await;
            seed(&db, &user.id, v0::ActivityType::Checkout, None, t0 + 3_600).await;

            let summary = UserActivity::daily_summary(&db, &user.id).await.unwrap();
            assert_eq!(summary.check_in.as_deref(), Some("15/11/2023, 05:13:20"));
            assert_eq!(summary.total_hours, "1 hr 0 mins");
            assert_eq!(summary.total_break, "0 hr 10 mins");
            assert_eq!(summary.total_work, "0 hr 50 mins");
        });
    }

    #[async_std::test]
    async fn mixed_precision_logs_replay_in_instant_order() {
        database_test!(|db| async move {
            let user = User::create(&db, "Ren".to_string(), None).await.unwrap();

            // checkin stored in milliseconds, checkout in seconds; the
            // raw values sort in the wrong order
            seed(
                &db,
                &user.id,
                v0::ActivityType::Checkin,
                None,
                1_700_000_000_000,
            )
            .await;
            seed(
                &db,
                &user.id,
                v0::ActivityType::Checkout,
                None,
                1_700_000_060,
            )
            .await;

            let summary = UserActivity::daily_summary(&db, &user.id).await.unwrap();
            assert_eq!(summary.total_hours, "0 hr 1 mins");
        });
    }

    #[async_std::test]
    async fn list_returns_newest_first() {
        database_test!(|db| async move {
            let user = User::create(&db, "Mai".to_string(), None).await.unwrap();

            UserActivity::record(&db, record_data(&user.id, "checkin", None))
                .await
                .unwrap();
            UserActivity::record(&db, record_data(&user.id, "checkout", None))
                .await
                .unwrap();

            let entries = UserActivity::list(&db, &user.id).await.unwrap();
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0].activity_type, v0::ActivityType::Checkout);
            assert_eq!(entries[1].activity_type, v0::ActivityType::Checkin);
        });
    }
}
