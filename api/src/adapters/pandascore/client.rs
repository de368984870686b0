//! Pandascore API client implementation
//!
//! Pandascore answers in snake_case JSON. Responses are decoded into the
//! provider's own shapes here and converted to domain `Match`/`Team` values.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::adapters::http::{deserialize_null_default, handle_response, parse_url};
use crate::domain::entities::{Game, Match, Team};
use crate::domain::ports::{EsportsClient, MatchQuery, TeamQuery};
use crate::error::FetchError;

/// Implementation of the Pandascore client
pub struct PandascoreClient {
    http: Client,
    base_url: String,
    token: String,
}

impl PandascoreClient {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn api_url(&self, game: Game, path: &str) -> String {
        format!("{}/{}{}", self.base_url, game.provider_slug(), path)
    }

    async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = parse_url(url)?;
        let mut request = self.http.get(url).query(query);
        if !self.token.is_empty() {
            request = request.bearer_auth(&self.token);
        }

        let resp = request.send().await?;
        handle_response(resp).await
    }
}

/// Response types from Pandascore
#[derive(Deserialize)]
struct PandascoreMatch {
    id: i64,
    name: Option<String>,
    begin_at: Option<String>,
    scheduled_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    opponents: Vec<PandascoreOpponent>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    results: Vec<PandascoreResult>,
    league: Option<PandascoreNamed>,
    tournament: Option<PandascoreNamed>,
}

#[derive(Deserialize)]
struct PandascoreOpponent {
    opponent: PandascoreTeamRef,
}

#[derive(Deserialize)]
struct PandascoreTeamRef {
    id: i64,
    name: String,
}

#[derive(Deserialize)]
struct PandascoreResult {
    team_id: Option<i64>,
    score: Option<u32>,
}

#[derive(Deserialize)]
struct PandascoreNamed {
    name: String,
}

#[derive(Deserialize)]
struct PandascoreTeam {
    id: i64,
    name: String,
    location: Option<String>,
    acronym: Option<String>,
    image_url: Option<String>,
}

impl PandascoreMatch {
    fn tournament_name(&self) -> String {
        match (&self.league, &self.tournament) {
            (Some(league), Some(tournament)) => format!("{} - {}", league.name, tournament.name),
            (Some(league), None) => league.name.clone(),
            (None, Some(tournament)) => tournament.name.clone(),
            (None, None) => self.name.clone().unwrap_or_default(),
        }
    }

    fn score_for(&self, team_id: Option<i64>) -> u32 {
        team_id
            .and_then(|id| self.results.iter().find(|r| r.team_id == Some(id)))
            .and_then(|r| r.score)
            .unwrap_or(0)
    }
}

impl From<PandascoreMatch> for Match {
    fn from(m: PandascoreMatch) -> Self {
        let team1 = m.opponents.first().map(|o| &o.opponent);
        let team2 = m.opponents.get(1).map(|o| &o.opponent);

        Match {
            id: m.id.to_string(),
            tournament_name: m.tournament_name(),
            team1_name: team1.map(|t| t.name.clone()).unwrap_or_else(|| "TBD".to_string()),
            team2_name: team2.map(|t| t.name.clone()).unwrap_or_else(|| "TBD".to_string()),
            team1_score: m.score_for(team1.map(|t| t.id)),
            team2_score: m.score_for(team2.map(|t| t.id)),
            date: m
                .begin_at
                .clone()
                .or_else(|| m.scheduled_at.clone())
                .unwrap_or_else(|| "TBD".to_string()),
        }
    }
}

impl From<PandascoreTeam> for Team {
    fn from(t: PandascoreTeam) -> Self {
        Team {
            id: t.id.to_string(),
            name: t.name,
            region: t.location.unwrap_or_else(|| "Unknown".to_string()),
            acronym: t.acronym,
            image_url: t.image_url,
        }
    }
}

#[async_trait]
impl EsportsClient for PandascoreClient {
    async fn fetch_matches(
        &self,
        game: Game,
        query: &MatchQuery,
    ) -> Result<Vec<Match>, FetchError> {
        let matches: Vec<PandascoreMatch> = self
            .get(
                &self.api_url(game, "/matches/upcoming"),
                &[
                    ("sort", query.sort.clone()),
                    ("per_page", query.per_page.to_string()),
                ],
            )
            .await?;

        Ok(matches.into_iter().map(Match::from).collect())
    }

    async fn fetch_teams(&self, game: Game, query: &TeamQuery) -> Result<Vec<Team>, FetchError> {
        let teams: Vec<PandascoreTeam> = self
            .get(
                &self.api_url(game, "/teams"),
                &[("per_page", query.per_page.to_string())],
            )
            .await?;

        Ok(teams.into_iter().map(Team::from).collect())
    }
}
