//! Contribution calendar sources: the GitHub GraphQL API or a saved response on disk.

use anyhow::{anyhow, Context, Result};
use city_core::CityResult;
use procgen::{DayRecord, WeekData, DAYS_PER_WEEK};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

const GRAPHQL_URL: &str = "https://api.github.com/graphql";
const USER_AGENT: &str = "contribution-city-generator";

const QUERY: &str = "query($username: String!) {
  user(login: $username) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            contributionCount
            date
            weekday
          }
        }
      }
    }
  }
}";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub contribution_count: u32,
    pub date: String,
    /// 0 = Sunday.
    pub weekday: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    pub contribution_days: Vec<ContributionDay>,
}

/// The contribution calendar of one user, weeks oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    pub total_contributions: u64,
    pub weeks: Vec<ContributionWeek>,
}

impl ContributionCalendar {
    /// The seven most recent days and the calendar total.
    pub fn last_week(&self) -> CityResult<WeekData> {
        let days: Vec<&ContributionDay> =
            self.weeks.iter().flat_map(|w| &w.contribution_days).collect();
        let start = days.len().saturating_sub(DAYS_PER_WEEK);
        let records = days[start..]
            .iter()
            .map(|d| DayRecord::new(d.date.clone(), d.contribution_count, d.weekday))
            .collect::<CityResult<Vec<_>>>()?;
        WeekData::from_days(&records, self.total_contributions)
    }
}

#[derive(Deserialize)]
struct GraphqlResponse {
    data: Option<ResponseData>,
    errors: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ResponseData {
    user: Option<UserData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserData {
    contributions_collection: ContributionsCollection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    contribution_calendar: ContributionCalendar,
}

/// Extract the calendar from a GraphQL response body.
///
/// A body carrying an `errors` field is a failure even when `data` is present.
pub fn parse_response(body: &str) -> Result<ContributionCalendar> {
    let response: GraphqlResponse =
        serde_json::from_str(body).context("Malformed GraphQL response")?;
    if let Some(errors) = response.errors {
        return Err(anyhow!("GraphQL query failed: {errors}"));
    }
    let user = response
        .data
        .and_then(|d| d.user)
        .ok_or_else(|| anyhow!("GraphQL response has no user"))?;
    Ok(user.contributions_collection.contribution_calendar)
}

/// Anything that can produce a contribution calendar.
pub trait CalendarSource {
    fn fetch(&self) -> Result<ContributionCalendar>;
}

/// Live data from the GitHub GraphQL API.
pub struct GithubSource {
    client: reqwest::blocking::Client,
    user: String,
    token: String,
}

impl GithubSource {
    pub fn new(user: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            user: user.into(),
            token: token.into(),
        })
    }
}

impl CalendarSource for GithubSource {
    fn fetch(&self) -> Result<ContributionCalendar> {
        log::info!("Fetching contributions of {} from {}", self.user, GRAPHQL_URL);
        let body = serde_json::json!({
            "query": QUERY,
            "variables": { "username": self.user },
        });
        let response = self
            .client
            .post(GRAPHQL_URL)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .context("GraphQL request failed")?;
        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            return Err(anyhow!("GraphQL request failed with status {status}: {text}"));
        }
        parse_response(&text)
    }
}

/// A GraphQL response saved to disk.
pub struct FileSource {
    pub path: PathBuf,
}

impl CalendarSource for FileSource {
    fn fetch(&self) -> Result<ContributionCalendar> {
        log::info!("Reading contributions from {:?}", self.path);
        let body = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Could not read {:?}", self.path))?;
        parse_response(&body)
    }
}
