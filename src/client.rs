use super::*;

/// Typed gateway to the remote store. One method per endpoint; every method
/// maps transport failures, rejection statuses, and malformed bodies into the
/// crate error taxonomy and never retries.
#[derive(Clone, Debug)]
pub struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self::new(Self::DEFAULT_BASE_URL)
  }
}

impl Client {
  pub const DEFAULT_BASE_URL: &str = "https://api.snooze.news";

  pub async fn add_favorite(
    &self,
    token: &str,
    username: &str,
    story_id: &str,
  ) -> Result {
    debug!(username, story_id, "add favorite");

    let response = self
      .client
      .post(format!(
        "{}/users/{username}/favorites/{story_id}",
        self.base_url
      ))
      .json(&serde_json::json!({ "token": token }))
      .send()
      .await?;

    Self::check(response, "add favorite")?;

    Ok(())
  }

  fn check(
    response: reqwest::Response,
    context: &str,
  ) -> Result<reqwest::Response> {
    let status = response.status();

    if let Some(error) = Error::for_status(status, format!("{context} ({status})"))
    {
      warn!(%status, context, "remote store rejected request");
      return Err(error);
    }

    Ok(response.error_for_status()?)
  }

  pub async fn create_story(
    &self,
    token: &str,
    draft: &StoryDraft,
  ) -> Result<Story> {
    debug!(title = %draft.title, "create story");

    let response = self
      .client
      .post(format!("{}/stories", self.base_url))
      .json(&serde_json::json!({
        "token": token,
        "title": draft.title,
        "author": draft.author,
        "url": draft.url,
      }))
      .send()
      .await?;

    Ok(Self::check(response, "create story")?.json::<Story>().await?)
  }

  pub async fn delete_story(&self, token: &str, story_id: &str) -> Result {
    debug!(story_id, "delete story");

    let response = self
      .client
      .delete(format!("{}/stories/{story_id}", self.base_url))
      .json(&serde_json::json!({ "token": token }))
      .send()
      .await?;

    Self::check(response, "delete story")?;

    Ok(())
  }

  pub async fn fetch_stories(&self) -> Result<Vec<Story>> {
    debug!("fetch stories");

    let response = self
      .client
      .get(format!("{}/stories", self.base_url))
      .send()
      .await?;

    Ok(
      Self::check(response, "fetch stories")?
        .json::<Vec<Story>>()
        .await?,
    )
  }

  pub async fn fetch_user(
    &self,
    token: &str,
    username: &str,
  ) -> Result<UserRecord> {
    debug!(username, "fetch user");

    let response = self
      .client
      .get(format!("{}/users/{username}", self.base_url))
      .query(&[("token", token)])
      .send()
      .await?;

    Ok(
      Self::check(response, "fetch user")?
        .json::<UserRecord>()
        .await?,
    )
  }

  pub async fn login(
    &self,
    username: &str,
    password: &str,
  ) -> Result<AuthResponse> {
    debug!(username, "login");

    let response = self
      .client
      .post(format!("{}/login", self.base_url))
      .json(&serde_json::json!({
        "username": username,
        "password": password,
      }))
      .send()
      .await?;

    Ok(
      Self::check(response, "login")?
        .json::<AuthResponse>()
        .await?,
    )
  }

  pub fn new(base_url: impl Into<String>) -> Self {
    let base_url: String = base_url.into();

    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client: reqwest::Client::new(),
    }
  }

  pub async fn remove_favorite(
    &self,
    token: &str,
    username: &str,
    story_id: &str,
  ) -> Result {
    debug!(username, story_id, "remove favorite");

    let response = self
      .client
      .delete(format!(
        "{}/users/{username}/favorites/{story_id}",
        self.base_url
      ))
      .json(&serde_json::json!({ "token": token }))
      .send()
      .await?;

    Self::check(response, "remove favorite")?;

    Ok(())
  }

  pub async fn signup(
    &self,
    username: &str,
    password: &str,
    name: &str,
  ) -> Result<AuthResponse> {
    debug!(username, "signup");

    let response = self
      .client
      .post(format!("{}/signup", self.base_url))
      .json(&serde_json::json!({
        "username": username,
        "password": password,
        "name": name,
      }))
      .send()
      .await?;

    Ok(
      Self::check(response, "signup")?
        .json::<AuthResponse>()
        .await?,
    )
  }

  pub async fn update_story(
    &self,
    token: &str,
    story_id: &str,
    patch: &StoryDraft,
  ) -> Result<Story> {
    debug!(story_id, "update story");

    let response = self
      .client
      .patch(format!("{}/stories/{story_id}", self.base_url))
      .json(&serde_json::json!({
        "token": token,
        "title": patch.title,
        "author": patch.author,
        "url": patch.url,
      }))
      .send()
      .await?;

    Ok(
      Self::check(response, "update story")?
        .json::<Story>()
        .await?,
    )
  }

  pub async fn update_user(
    &self,
    token: &str,
    username: &str,
    name: Option<&str>,
    password: Option<&str>,
  ) -> Result<UserRecord> {
    debug!(username, "update user");

    let mut body = serde_json::json!({ "token": token });

    if let Some(name) = name {
      body["name"] = serde_json::Value::from(name);
    }

    if let Some(password) = password {
      body["password"] = serde_json::Value::from(password);
    }

    let response = self
      .client
      .patch(format!("{}/users/{username}", self.base_url))
      .json(&body)
      .send()
      .await?;

    Ok(
      Self::check(response, "update user")?
        .json::<UserRecord>()
        .await?,
    )
  }
}
