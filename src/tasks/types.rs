//! Task and quest types.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Reward granted on task or quest completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReward {
    pub xp: u64,
    pub currency: Option<u64>,
    pub items: Vec<&'static str>,
}

impl TaskReward {
    pub fn xp(xp: u64) -> Self {
        Self {
            xp,
            currency: None,
            items: Vec::new(),
        }
    }
}

/// Task category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Onboarding,
    Progression,
    Community,
}

/// A one-shot task. Available once every prerequisite id is completed.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub reward: TaskReward,
    pub kind: TaskKind,
    pub prerequisite_task_ids: Vec<&'static str>,
}

/// Quest cadence / category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestKind {
    Daily,
    Weekly,
    Monthly,
    Story,
    Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Epic,
}

/// Inclusive time window for periodic quests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl QuestPeriod {
    /// True iff `now` falls inside the window, both ends inclusive.
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now <= self.end
    }

    /// The UTC calendar day containing `now`, midnight to 23:59:59.999.
    pub fn daily(now: DateTime<Utc>) -> Self {
        let start = day_start(now.date_naive());
        Self {
            start,
            end: start + Duration::days(1) - Duration::milliseconds(1),
        }
    }

    /// The Monday-to-Sunday UTC week containing `now`.
    pub fn weekly(now: DateTime<Utc>) -> Self {
        let offset = now.weekday().num_days_from_monday() as i64;
        let start = day_start(now.date_naive() - Duration::days(offset));
        Self {
            start,
            end: start + Duration::days(7) - Duration::milliseconds(1),
        }
    }

    /// The UTC calendar month containing `now`.
    pub fn monthly(now: DateTime<Utc>) -> Self {
        let first = first_of_month(now.year(), now.month());
        let next = if now.month() == 12 {
            first_of_month(now.year() + 1, 1)
        } else {
            first_of_month(now.year(), now.month() + 1)
        };
        Self {
            start: day_start(first),
            end: day_start(next) - Duration::milliseconds(1),
        }
    }
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default())
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // Day 1 of a valid month always exists.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}

/// One step of a multi-step quest. Step completion is tracked by the
/// caller; the engine only carries the definitions.
#[derive(Debug, Clone)]
pub struct QuestStep {
    pub id: &'static str,
    pub description: &'static str,
}

/// A quest. Like a task, but optionally tied to a game, a time window,
/// and an ordered step list.
#[derive(Debug, Clone)]
pub struct Quest {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Game this quest plays inside, if any.
    pub game_id: Option<&'static str>,
    pub reward: TaskReward,
    pub kind: QuestKind,
    pub difficulty: Difficulty,
    /// Inclusive availability window; `None` means always time-available.
    pub period: Option<QuestPeriod>,
    pub steps: Vec<QuestStep>,
    pub prerequisite_quest_ids: Vec<&'static str>,
}
