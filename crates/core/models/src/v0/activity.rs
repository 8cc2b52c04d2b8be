use std::fmt;
use std::str::FromStr;

auto_derived!(
    /// Kind of a recorded activity event
    #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
    #[derive(Copy)]
    pub enum ActivityType {
        Checkin,
        Checkout,
        Breakin,
        Breakout,
    }

    /// Fixed set of recognised break categories
    pub enum BreakType {
        #[cfg_attr(feature = "serde", serde(rename = "Meal break"))]
        MealBreak,
        #[cfg_attr(feature = "serde", serde(rename = "Out of Office"))]
        OutOfOffice,
        #[cfg_attr(feature = "serde", serde(rename = "Toilet"))]
        Toilet,
        #[cfg_attr(feature = "serde", serde(rename = "Meeting"))]
        Meeting,
        #[cfg_attr(feature = "serde", serde(rename = "Training"))]
        Training,
        #[cfg_attr(feature = "serde", serde(rename = "Called by HR"))]
        CalledByHr,
        #[cfg_attr(feature = "serde", serde(rename = "Other"))]
        Other,
    }

    /// One row of a user's activity log
    pub struct ActivityEntry {
        /// Unique Id
        pub id: String,
        /// Kind of event
        #[cfg_attr(feature = "serde", serde(rename = "type"))]
        pub activity_type: ActivityType,
        /// Break category, present on break events only
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub break_type: Option<BreakType>,
        /// Unix timestamp (ms) the event was recorded at
        pub timestamp: i64,
        /// Explicit interval start supplied by the client
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub start: Option<i64>,
        /// Explicit interval end supplied by the client
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub end: Option<i64>,
        /// Free-text reason
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub reason: Option<String>,
    }

    /// One closed break interval
    pub struct BreakReportEntry {
        /// Calendar date the break started on (YYYY-MM-DD)
        pub date: String,
        /// Clock time the break started at (HH:MM:SS)
        pub start_time: String,
        /// Clock time the break ended at (HH:MM:SS)
        pub end_time: String,
        /// Human readable duration, "H hr M mins"
        pub total: String,
        /// Break category
        pub break_type: BreakType,
    }

    /// Aggregated work and break totals for one user
    pub struct DailySummary {
        /// Most recent check-in, formatted in the workplace timezone
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub check_in: Option<String>,
        /// Total time between closed check-in/check-out pairs
        pub total_hours: String,
        /// Total time spent on closed breaks
        pub total_break: String,
        /// Net work time, total hours less breaks, floored at zero
        pub total_work: String,
    }

    /// Record a single activity event
    ///
    /// The event kind and break category are accepted as raw strings so the
    /// handler can report validation failures itself.
    pub struct DataRecordActivity {
        /// Id of the user the event belongs to
        pub user_id: String,
        /// Kind of event
        #[cfg_attr(feature = "serde", serde(rename = "type"))]
        pub activity_type: String,
        /// Break category, required for break events
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub break_type: Option<String>,
        /// Explicit interval start
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub start: Option<i64>,
        /// Explicit interval end
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub end: Option<i64>,
        /// Free-text reason
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub reason: Option<String>,
    }
);

impl ActivityType {
    /// Whether this event kind opens or closes a break
    pub fn is_break(&self) -> bool {
        matches!(self, ActivityType::Breakin | ActivityType::Breakout)
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActivityType::Checkin => "checkin",
            ActivityType::Checkout => "checkout",
            ActivityType::Breakin => "breakin",
            ActivityType::Breakout => "breakout",
        })
    }
}

impl FromStr for ActivityType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checkin" => Ok(ActivityType::Checkin),
            "checkout" => Ok(ActivityType::Checkout),
            "breakin" => Ok(ActivityType::Breakin),
            "breakout" => Ok(ActivityType::Breakout),
            _ => Err(()),
        }
    }
}

impl fmt::Display for BreakType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BreakType::MealBreak => "Meal break",
            BreakType::OutOfOffice => "Out of Office",
            BreakType::Toilet => "Toilet",
            BreakType::Meeting => "Meeting",
            BreakType::Training => "Training",
            BreakType::CalledByHr => "Called by HR",
            BreakType::Other => "Other",
        })
    }
}

impl FromStr for BreakType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Meal break" => Ok(BreakType::MealBreak),
            "Out of Office" => Ok(BreakType::OutOfOffice),
            "Toilet" => Ok(BreakType::Toilet),
            "Meeting" => Ok(BreakType::Meeting),
            "Training" => Ok(BreakType::Training),
            "Called by HR" => Ok(BreakType::CalledByHr),
            "Other" => Ok(BreakType::Other),
            _ => Err(()),
        }
    }
}
