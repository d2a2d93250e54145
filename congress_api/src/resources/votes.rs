use chrono::{Datelike, Local, NaiveDate};
use serde_json::Value;

use crate::{
    path::{EndpointPath, PathBuilder},
    types::{format_date, Chamber, IntoDate, Unwrap, VoteType},
    Client, Error,
};

/// Roll-call votes: by date, by roll-call number, and vote-behavior listings.
#[derive(Clone, Debug)]
pub struct VotesClient {
    client: Client,
}

impl VotesClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    // date-based queries

    /// Votes for a single month, defaulting to the current year and month.
    pub async fn by_month(
        &self,
        chamber: Chamber,
        year: Option<i32>,
        month: Option<u32>,
    ) -> Result<Value, Error> {
        let today = Local::now().date_naive();
        let year = year.unwrap_or_else(|| today.year());
        let month = month.unwrap_or_else(|| today.month());
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidArgument(format!(
                "month must be between 1 and 12, got {}",
                month
            )));
        }
        let path = PathBuilder::new("{chamber}/votes/{year}/{month}")
            .arg("chamber", chamber)
            .arg("year", format!("{:04}", year))
            .arg("month", format!("{:02}", month))
            .build()?;
        self.client.fetch(&path, Unwrap::FullResults).await
    }

    /// Votes cast in a chamber between two dates, in either order. The API
    /// limits ranges to about a month.
    pub async fn by_range(
        &self,
        chamber: Chamber,
        start: impl IntoDate,
        end: impl IntoDate,
    ) -> Result<Value, Error> {
        let path = range_path(chamber, start.into_date()?, end.into_date()?)?;
        self.client.fetch(&path, Unwrap::FullResults).await
    }

    /// Votes cast in a chamber on a single day.
    pub async fn by_date(&self, chamber: Chamber, date: impl IntoDate) -> Result<Value, Error> {
        let date = date.into_date()?;
        self.by_range(chamber, date, date).await
    }

    /// Today's votes in a chamber.
    pub async fn today(&self, chamber: Chamber) -> Result<Value, Error> {
        self.by_date(chamber, Local::now().date_naive()).await
    }

    // detail response

    /// A specific roll-call vote, including every member's position.
    pub async fn get(
        &self,
        chamber: Chamber,
        rollcall_num: u32,
        session: u32,
        congress: Option<u32>,
    ) -> Result<Value, Error> {
        let path = PathBuilder::new("{congress}/{chamber}/sessions/{session}/votes/{rollcall}")
            .arg("congress", self.client.congress(congress))
            .arg("chamber", chamber)
            .arg("session", session)
            .arg("rollcall", rollcall_num)
            .build()?;
        self.client.fetch(&path, Unwrap::FullResults).await
    }

    // votes by type

    /// Member vote-behavior listings: missed, party, lone no, perfect.
    pub async fn by_type(
        &self,
        chamber: Chamber,
        vote_type: VoteType,
        congress: Option<u32>,
    ) -> Result<Value, Error> {
        let path = PathBuilder::new("{congress}/{chamber}/votes/{type}")
            .arg("congress", self.client.congress(congress))
            .arg("chamber", chamber)
            .arg("type", vote_type)
            .build()?;
        self.client.fetch(&path, Unwrap::FirstResult).await
    }

    /// Missed votes by member.
    pub async fn missed(&self, chamber: Chamber, congress: Option<u32>) -> Result<Value, Error> {
        self.by_type(chamber, VoteType::Missed, congress).await
    }

    /// How often each member votes with their party.
    pub async fn party(&self, chamber: Chamber, congress: Option<u32>) -> Result<Value, Error> {
        self.by_type(chamber, VoteType::Party, congress).await
    }

    /// How often each member is the lone no vote.
    pub async fn loneno(&self, chamber: Chamber, congress: Option<u32>) -> Result<Value, Error> {
        self.by_type(chamber, VoteType::LoneNo, congress).await
    }

    /// Members who never miss a vote.
    pub async fn perfect(&self, chamber: Chamber, congress: Option<u32>) -> Result<Value, Error> {
        self.by_type(chamber, VoteType::Perfect, congress).await
    }

    /// Senate votes on nominations in a Congress.
    pub async fn nominations(&self, congress: Option<u32>) -> Result<Value, Error> {
        let path = PathBuilder::new("{congress}/nominations")
            .arg("congress", self.client.congress(congress))
            .build()?;
        self.client.fetch(&path, Unwrap::FirstResult).await
    }
}

/// Path for a date range, ordered so the earlier date comes first.
pub(crate) fn range_path(
    chamber: Chamber,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<EndpointPath, Error> {
    let (start, end) = if start > end { (end, start) } else { (start, end) };
    PathBuilder::new("{chamber}/votes/{start}/{end}")
        .arg("chamber", chamber)
        .arg("start", format_date(start))
        .arg("end", format_date(end))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn range_is_order_independent() {
        let a = ymd(2010, 1, 5);
        let b = ymd(2010, 1, 28);
        let forward = range_path(Chamber::House, a, b).unwrap();
        let backward = range_path(Chamber::House, b, a).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.path(), "house/votes/2010-01-05/2010-01-28");
    }

    #[test]
    fn single_day_range() {
        let d = ymd(2009, 3, 9);
        let path = range_path(Chamber::Senate, d, d).unwrap();
        assert_eq!(path.path(), "senate/votes/2009-03-09/2009-03-09");
    }

    #[test]
    fn order_independence_over_many_pairs() {
        let base = ymd(2008, 12, 20);
        for i in 0..40 {
            for j in 0..40 {
                let a = base + chrono::Duration::days(i);
                let b = base + chrono::Duration::days(j);
                assert_eq!(
                    range_path(Chamber::House, a, b).unwrap(),
                    range_path(Chamber::House, b, a).unwrap()
                );
            }
        }
    }
}
