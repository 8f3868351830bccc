//! Devotionals, prayer requests, comments and feedback

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Comment on a devotional or prayer request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Daily devotional post (renungan)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Devotional {
    pub id: String,
    pub title: String,
    pub image_url: Option<String>,
    pub date: NaiveDate,
    pub verse: String,
    pub content: String,
    pub author: String,
    pub likes: u32,
    pub liked_by: Vec<String>,
    pub comments: Vec<Comment>,
}

/// Admin form for publishing a devotional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DevotionalDraft {
    pub title: String,
    pub image_url: Option<String>,
    /// Defaults to today
    pub date: Option<NaiveDate>,
    pub verse: String,
    pub content: String,
    pub author: String,
}

impl DevotionalDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn dated(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// Prayer request posted by a member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrayerRequest {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub likes: u32,
    pub liked_by: Vec<String>,
    pub comments: Vec<Comment>,
}

/// Anonymous or named feedback message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Like and comment bookkeeping shared by devotionals and prayer requests
pub trait Engagement {
    fn like_state(&mut self) -> (&mut u32, &mut Vec<String>);

    fn comments_mut(&mut self) -> &mut Vec<Comment>;

    /// Toggle `user_id`'s like. Returns true when the call added a like.
    fn toggle_like(&mut self, user_id: &str) -> bool {
        let (likes, liked_by) = self.like_state();
        if let Some(pos) = liked_by.iter().position(|id| id == user_id) {
            liked_by.remove(pos);
            *likes = likes.saturating_sub(1);
            false
        } else {
            liked_by.push(user_id.to_string());
            *likes += 1;
            true
        }
    }

    fn add_comment(&mut self, comment: Comment) {
        self.comments_mut().push(comment);
    }

    /// Returns false if no comment had that id
    fn remove_comment(&mut self, comment_id: &str) -> bool {
        let comments = self.comments_mut();
        let before = comments.len();
        comments.retain(|c| c.id != comment_id);
        comments.len() != before
    }
}

impl Engagement for Devotional {
    fn like_state(&mut self) -> (&mut u32, &mut Vec<String>) {
        (&mut self.likes, &mut self.liked_by)
    }

    fn comments_mut(&mut self) -> &mut Vec<Comment> {
        &mut self.comments
    }
}

impl Engagement for PrayerRequest {
    fn like_state(&mut self) -> (&mut u32, &mut Vec<String>) {
        (&mut self.likes, &mut self.liked_by)
    }

    fn comments_mut(&mut self) -> &mut Vec<Comment> {
        &mut self.comments
    }
}

/// First `max` characters of `text` followed by an ellipsis
pub fn preview(text: &str, max: usize) -> String {
    let head: String = text.chars().take(max).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn prayer() -> PrayerRequest {
        PrayerRequest {
            id: "P001".to_string(),
            user_id: "JM002".to_string(),
            user_name: "Siti".to_string(),
            content: "Doakan".to_string(),
            created_at: Utc::now(),
            likes: 5,
            liked_by: vec!["JM001".to_string()],
            comments: Vec::new(),
        }
    }

    #[test]
    fn test_toggle_like_round_trip() {
        let mut p = prayer();
        let original = p.clone();

        assert!(p.toggle_like("JM003"));
        assert_eq!(p.likes, 6);
        assert!(!p.toggle_like("JM003"));
        assert_eq!(p, original);
    }

    #[test]
    fn test_unlike_existing_liker() {
        let mut p = prayer();
        assert!(!p.toggle_like("JM001"));
        assert_eq!(p.likes, 4);
        assert!(p.liked_by.is_empty());
    }

    #[test]
    fn test_unlike_never_underflows() {
        let mut p = prayer();
        p.likes = 0;
        p.toggle_like("JM001");
        assert_eq!(p.likes, 0);
    }

    #[test]
    fn test_remove_comment() {
        let mut p = prayer();
        p.add_comment(Comment {
            id: "C001".to_string(),
            user_id: "JM001".to_string(),
            user_name: "Budi".to_string(),
            content: "Amin".to_string(),
            created_at: Utc::now(),
        });

        assert!(!p.remove_comment("C999"));
        assert!(p.remove_comment("C001"));
        assert!(p.comments.is_empty());
    }

    #[test]
    fn test_preview_counts_chars() {
        assert_eq!(preview("Tuhan memberkati kita semua", 5), "Tuhan...");
        assert_eq!(preview("Doa", 20), "Doa...");
    }
}
