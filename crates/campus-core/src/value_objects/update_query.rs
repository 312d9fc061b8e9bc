//! Search criteria for the daily-update forum

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Maximum forum page size
pub const MAX_UPDATES_PAGE_SIZE: u32 = 100;

/// Forum ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateSort {
    #[default]
    Recent,
    Oldest,
    Upvotes,
}

impl UpdateSort {
    /// Parse leniently; unknown values fall back to most recent first
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "oldest" => UpdateSort::Oldest,
            "upvotes" => UpdateSort::Upvotes,
            _ => UpdateSort::Recent,
        }
    }
}

/// Forum search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSearch {
    /// Case-insensitive substring of the content; empty matches everything
    pub keyword: Option<String>,
    /// Exact campus name
    pub college: Option<String>,
    /// UTC calendar day the update was posted on
    pub date: Option<NaiveDate>,
    pub sort: UpdateSort,
    pub page: u32,
    pub limit: u32,
}

impl Default for UpdateSearch {
    fn default() -> Self {
        Self {
            keyword: None,
            college: None,
            date: None,
            sort: UpdateSort::Recent,
            page: 1,
            limit: 50,
        }
    }
}

impl UpdateSearch {
    /// Normalize blank strings to `None` and clamp paging
    pub fn normalized(mut self) -> Self {
        self.keyword = self.keyword.map(|k| k.trim().to_string()).filter(|k| !k.is_empty());
        self.college = self.college.map(|c| c.trim().to_string()).filter(|c| !c.is_empty());
        self.page = self.page.max(1);
        self.limit = self.limit.clamp(1, MAX_UPDATES_PAGE_SIZE);
        self
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page.max(1) - 1) * i64::from(self.limit)
    }

    /// Half-open `[start, end)` window covering `date`, if set
    pub fn date_window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.date.map(utc_day_window)
    }

    /// Number of pages needed for `total` rows
    pub fn total_pages(&self, total: i64) -> i64 {
        let limit = i64::from(self.limit.max(1));
        (total + limit - 1) / limit
    }
}

/// Half-open `[00:00, next 00:00)` UTC window for a calendar day
pub fn utc_day_window(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_time(chrono::NaiveTime::MIN).and_utc();
    (start, start + Duration::days(1))
}
