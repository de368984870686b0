//! Plain-text renderer
//!
//! Renders the headline rotation and forum listings for clients that do not
//! ask for JSON.

use crate::app::Headlines;
use crate::domain::entities::{ForumTopic, Game, NewsArticle};

/// Render the headline shown at `tick`, followed by the full rotation
pub fn render_headlines(headlines: &Headlines, tick: usize) -> String {
    let mut buf = String::new();

    buf.push_str("# eClips Headlines\n\n");

    let Some(current) = headlines.at(tick) else {
        buf.push_str("_No news available._\n");
        return buf;
    };

    let position = tick % headlines.len();

    buf.push_str(&render_article(current));
    buf.push_str(&format!("\n({}/{})\n", position + 1, headlines.len()));

    if headlines.len() > 1 {
        buf.push_str("\n## Up next\n\n");
        for offset in 1..headlines.len() {
            if let Some(article) = headlines.at(position + offset) {
                buf.push_str(&format!(
                    "- [{}] {}\n",
                    article.game.news_slug().to_uppercase(),
                    truncate(&article.title, 70)
                ));
            }
        }
    }

    buf
}

fn render_article(article: &NewsArticle) -> String {
    let mut buf = format!(
        "[{}] {}\n    {} | {}\n",
        article.game.news_slug().to_uppercase(),
        article.title,
        article.author,
        article.date
    );

    if let Some(description) = &article.description {
        buf.push_str(&format!("    {}\n", truncate(description, 100)));
    }
    buf.push_str(&format!("    {}\n", article.link));

    buf
}

/// Render a game's forum topic list
pub fn render_topics(game: Game, topics: &[ForumTopic]) -> String {
    let mut buf = format!("# {} Forum\n\n", game.display_name());

    if topics.is_empty() {
        buf.push_str("_No topics yet._\n");
        return buf;
    }

    for topic in topics {
        let noun = if topic.reply_count == 1 { "reply" } else { "replies" };
        buf.push_str(&format!(
            "- {} by {} ({} {})\n",
            truncate(&topic.title, 70),
            topic.author,
            topic.reply_count,
            noun
        ));
    }

    buf
}

/// Truncate a string with ellipsis
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
