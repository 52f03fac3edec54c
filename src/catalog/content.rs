//! Course-content REST client

use serde::Deserialize;

use crate::Result;

/// Default content API base URL (placeholder deployment)
pub const DEFAULT_API_URL: &str = "https://api.example.com";

/// A class level (e.g. class 6)
#[derive(Debug, Clone, Deserialize)]
pub struct ClassLevel {
    pub id: String,
    pub name: String,
}

/// A subject within a class
#[derive(Debug, Clone, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
}

/// A chapter within a subject
#[derive(Debug, Clone, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
}

/// Narratable chapter body
#[derive(Debug, Clone, Deserialize)]
pub struct ChapterContent {
    pub title: String,
    pub content: String,
}

/// One mock-test question
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub options: Vec<String>,
}

/// Client for the course-content REST API
///
/// Every list call returns an empty `Vec` on failure; content lookups return
/// `None`. Failures are logged, never surfaced.
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client against `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// All class levels
    pub async fn classes(&self) -> Vec<ClassLevel> {
        self.get_list("classes".to_string()).await
    }

    /// Subjects offered for a class
    pub async fn subjects(&self, class_id: &str) -> Vec<Subject> {
        self.get_list(format!("subjects/{class_id}")).await
    }

    /// Chapters of a subject
    pub async fn chapters(&self, class_id: &str, subject_id: &str) -> Vec<Chapter> {
        self.get_list(format!("chapters/{class_id}/{subject_id}")).await
    }

    /// Questions for a chapter's mock test
    pub async fn test_questions(
        &self,
        class_id: &str,
        subject_id: &str,
        chapter_id: &str,
    ) -> Vec<Question> {
        self.get_list(format!("questions/{class_id}/{subject_id}/{chapter_id}"))
            .await
    }

    /// Chapter body for the reader, or None if the fetch fails
    pub async fn chapter_content(
        &self,
        class_id: &str,
        subject_id: &str,
        chapter_id: &str,
    ) -> Option<ChapterContent> {
        let url = format!("{}/content/{class_id}/{subject_id}/{chapter_id}", self.base_url);
        match self.fetch(&url).await {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::warn!(error = %e, url = %url, "chapter content fetch failed");
                None
            }
        }
    }

    async fn get_list<T: serde::de::DeserializeOwned>(&self, path: String) -> Vec<T> {
        let url = format!("{}/{path}", self.base_url);
        match self.fetch(&url).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(error = %e, url = %url, "catalog fetch failed, returning empty");
                Vec::new()
            }
        }
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_options_default_to_empty() {
        let question: Question = serde_json::from_str(
            r#"{"question": "What is water made of?", "answer": "hydrogen and oxygen"}"#,
        )
        .unwrap();
        assert_eq!(question.answer, "hydrogen and oxygen");
        assert!(question.options.is_empty());
    }

    #[test]
    fn record_lists_deserialize() {
        let classes: Vec<ClassLevel> = serde_json::from_str(
            r#"[{"id": "6", "name": "Class 6"}, {"id": "7", "name": "Class 7"}]"#,
        )
        .unwrap();
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].name, "Class 6");
    }
}
