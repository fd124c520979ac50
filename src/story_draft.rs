use {super::*, url::Url};

/// Submission payload for creating or editing a story. Validated before any
/// remote call so a rejected draft never touches local or remote state.
#[derive(Clone, Debug)]
pub struct StoryDraft {
  pub author: String,
  pub title: String,
  pub url: String,
}

impl StoryDraft {
  pub fn new(
    title: impl Into<String>,
    author: impl Into<String>,
    url: impl Into<String>,
  ) -> Self {
    Self {
      author: author.into(),
      title: title.into(),
      url: url.into(),
    }
  }

  pub fn validate(&self) -> Result {
    if self.title.trim().is_empty() {
      return Err(Error::Validation("title must not be empty".to_string()));
    }

    let parsed = Url::parse(&self.url).map_err(|error| {
      Error::Validation(format!("invalid url {:?}: {error}", self.url))
    })?;

    if parsed.host_str().is_none() {
      return Err(Error::Validation(format!(
        "url {:?} has no host",
        self.url
      )));
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_a_well_formed_draft() {
    assert!(
      StoryDraft::new("Title", "Author", "https://example.com/post")
        .validate()
        .is_ok()
    );
  }

  #[test]
  fn rejects_an_unparsable_url() {
    let error = StoryDraft::new("Title", "Author", "nonsense")
      .validate()
      .unwrap_err();

    assert!(matches!(error, Error::Validation(_)));
  }

  #[test]
  fn rejects_a_url_without_a_host() {
    let error = StoryDraft::new("Title", "Author", "mailto:someone@example.com")
      .validate()
      .unwrap_err();

    assert!(matches!(error, Error::Validation(_)));
  }

  #[test]
  fn rejects_an_empty_title() {
    let error = StoryDraft::new("   ", "Author", "https://example.com")
      .validate()
      .unwrap_err();

    assert!(matches!(error, Error::Validation(_)));
  }
}
