// SPDX-FileCopyrightText: 2026 Skillet Contributors
// SPDX-License-Identifier: MIT

//! Community recipe feed.
//!
//! Reads open issues from the upstream tracker and keeps the ones titled
//! `Recipe: ...` as community submissions. This feature is fully decoupled
//! from the core: fetch failures surface as a `FeedError` for the caller's
//! fallback message and never touch the selection state. Submissions happen
//! out-of-band through a pre-filled issue link.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

const REPO_OWNER: &str = "SwallowedLego";
const REPO_NAME: &str = "Ingredient-Roulette";
const TITLE_PREFIX: &str = "recipe:";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("skillet/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityRecipe {
    name: String,
    details: String,
    url: Option<String>,
}

impl CommunityRecipe {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

#[derive(Debug, Deserialize)]
struct Issue {
    title: String,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    html_url: Option<String>,
}

#[derive(Debug)]
pub enum FeedError {
    Http(reqwest::Error),
    Status(reqwest::StatusCode),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(err) => write!(f, "could not load recipes: {err}"),
            Self::Status(status) => write!(f, "could not load recipes: HTTP {status}"),
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::Status(_) => None,
        }
    }
}

/// Fetches the community recipe list. Blocking; run it off the UI thread.
pub fn fetch_recipes() -> Result<Vec<CommunityRecipe>, FeedError> {
    let url = format!(
        "https://api.github.com/repos/{REPO_OWNER}/{REPO_NAME}/issues?state=open&per_page=30"
    );
    tracing::debug!(%url, "fetching community recipes");

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(FeedError::Http)?;
    let response = client.get(&url).send().map_err(FeedError::Http)?;
    if !response.status().is_success() {
        tracing::warn!(status = %response.status(), "recipe feed request rejected");
        return Err(FeedError::Status(response.status()));
    }
    let issues: Vec<Issue> = response.json().map_err(FeedError::Http)?;

    let recipes = recipes_from_issues(issues);
    tracing::debug!(count = recipes.len(), "community recipes loaded");
    Ok(recipes)
}

fn recipes_from_issues(issues: Vec<Issue>) -> Vec<CommunityRecipe> {
    issues
        .into_iter()
        .filter(|issue| issue.title.to_lowercase().starts_with(TITLE_PREFIX))
        .map(|issue| CommunityRecipe {
            name: issue.title[TITLE_PREFIX.len()..].trim_start().to_owned(),
            details: issue.body.unwrap_or_default(),
            url: issue.html_url,
        })
        .collect()
}

/// The pre-filled "submit your recipe" issue link.
pub fn submission_url(name: &str, details: &str) -> String {
    let base = format!("https://github.com/{REPO_OWNER}/{REPO_NAME}/issues/new");
    let title = format!("Recipe: {name}");
    match reqwest::Url::parse_with_params(&base, [("title", title.as_str()), ("body", details)]) {
        Ok(url) => url.into(),
        Err(_) => base,
    }
}
