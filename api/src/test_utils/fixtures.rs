//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use uuid::Uuid;

use crate::app::SeedCatalog;
use crate::domain::entities::{ForumTopic, Game, Identity, Match, NewsArticle, Team};

/// Create a test article with a specific title
pub fn test_article(game: Game, title: &str) -> NewsArticle {
    NewsArticle {
        id: Uuid::new_v4(),
        title: title.to_string(),
        author: "Test Wire".to_string(),
        date: "Nov 16, 2025".to_string(),
        link: format!("https://news.example.com/{}", title.replace(' ', "-")),
        description: None,
        game,
    }
}

/// Create `count` articles titled `{news_slug}-{rank}`, newest first
pub fn test_feed(game: Game, count: usize) -> Vec<NewsArticle> {
    (0..count)
        .map(|rank| test_article(game, &format!("{}-{}", game.news_slug(), rank)))
        .collect()
}

/// Create a test match with default teams
pub fn test_match(id: &str) -> Match {
    Match {
        id: id.to_string(),
        tournament_name: "Test Invitational".to_string(),
        team1_name: "Team A".to_string(),
        team2_name: "Team B".to_string(),
        team1_score: 0,
        team2_score: 0,
        date: "TBD".to_string(),
    }
}

/// Create a test team with a specific name
pub fn test_team(name: &str) -> Team {
    Team {
        id: format!("team-{}", name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        region: "EU".to_string(),
        acronym: None,
        image_url: None,
    }
}

/// Seeded topics of a game from the bundled catalog
pub fn seeded_topics(game: Game) -> Vec<ForumTopic> {
    SeedCatalog::bundled()
        .expect("bundled seed decodes")
        .forum_topics(game)
        .to_vec()
}

/// A signed-in test user
pub fn alice() -> Identity {
    Identity::Authenticated {
        name: "alice".to_string(),
    }
}
