use super::*;

/// The authenticated session: identity, credential token, and two id-based
/// views over [`StoryList`]. Favorite mutations go remote-first; a failed
/// call leaves the local set untouched. The exclusive `&mut self` receivers
/// are the serialization discipline for per-id mutations: two overlapping
/// calls for the same story cannot be expressed.
#[derive(Debug)]
pub struct User {
  favorites: Vec<String>,
  name: String,
  own_stories: Vec<String>,
  token: String,
  username: String,
}

impl User {
  pub async fn add_favorite(
    &mut self,
    client: &Client,
    stories: &StoryList,
    id: &str,
  ) -> Result {
    if self.is_favorite(id) {
      return Err(Error::AlreadyFavorited(id.to_string()));
    }

    if !stories.contains(id) {
      return Err(Error::NotFound(id.to_string()));
    }

    client.add_favorite(&self.token, &self.username, id).await?;

    self.favorites.push(id.to_string());

    Ok(())
  }

  pub fn favorite_stories<'a>(
    &'a self,
    stories: &'a StoryList,
  ) -> impl Iterator<Item = &'a Story> {
    self.favorites.iter().filter_map(|id| stories.get(id))
  }

  pub(crate) fn forget_story(&mut self, id: &str) {
    self.favorites.retain(|favorite| favorite != id);
    self.own_stories.retain(|own| own != id);
  }

  fn from_record(
    token: String,
    record: UserRecord,
    stories: &mut StoryList,
  ) -> Self {
    let favorites = stories.absorb(record.favorites);
    let own_stories = stories.absorb(record.own_stories);

    Self {
      favorites,
      name: record.name,
      own_stories,
      token,
      username: record.username,
    }
  }

  pub fn is_favorite(&self, id: &str) -> bool {
    self.favorites.iter().any(|favorite| favorite == id)
  }

  pub async fn login(
    client: &Client,
    stories: &mut StoryList,
    username: &str,
    password: &str,
  ) -> Result<Self> {
    let response = client.login(username, password).await?;

    debug!(username, "logged in");

    Ok(Self::from_record(response.token, response.user, stories))
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn own_story_records<'a>(
    &'a self,
    stories: &'a StoryList,
  ) -> impl Iterator<Item = &'a Story> {
    self.own_stories.iter().filter_map(|id| stories.get(id))
  }

  pub fn owns(&self, id: &str) -> bool {
    self.own_stories.iter().any(|own| own == id)
  }

  pub(crate) fn record_own_story(&mut self, id: &str) {
    self.own_stories.insert(0, id.to_string());
  }

  pub async fn remove_favorite(&mut self, client: &Client, id: &str) -> Result {
    if !self.is_favorite(id) {
      return Err(Error::NotFavorited(id.to_string()));
    }

    client
      .remove_favorite(&self.token, &self.username, id)
      .await?;

    self.favorites.retain(|favorite| favorite != id);

    Ok(())
  }

  /// Rebuild a session from a previously saved credential token.
  pub async fn restore(
    client: &Client,
    stories: &mut StoryList,
    saved: &SavedSession,
  ) -> Result<Self> {
    let record = client.fetch_user(&saved.token, &saved.username).await?;

    debug!(username = %saved.username, "session restored");

    Ok(Self::from_record(saved.token.clone(), record, stories))
  }

  pub fn saved_session(&self) -> SavedSession {
    SavedSession {
      token: self.token.clone(),
      username: self.username.clone(),
    }
  }

  pub async fn signup(
    client: &Client,
    stories: &mut StoryList,
    username: &str,
    password: &str,
    name: &str,
  ) -> Result<Self> {
    let response = client.signup(username, password, name).await?;

    debug!(username, "signed up");

    Ok(Self::from_record(response.token, response.user, stories))
  }

  pub(crate) fn token(&self) -> &str {
    &self.token
  }

  /// Membership is re-checked at call time, so the toggle dispatches on the
  /// current state rather than whatever the caller last rendered. Returns
  /// the new membership.
  pub async fn toggle_favorite(
    &mut self,
    client: &Client,
    stories: &StoryList,
    id: &str,
  ) -> Result<bool> {
    if self.is_favorite(id) {
      self.remove_favorite(client, id).await?;
      Ok(false)
    } else {
      self.add_favorite(client, stories, id).await?;
      Ok(true)
    }
  }

  pub async fn update_profile(
    &mut self,
    client: &Client,
    name: Option<&str>,
    password: Option<&str>,
  ) -> Result {
    let record = client
      .update_user(&self.token, &self.username, name, password)
      .await?;

    self.name = record.name;

    Ok(())
  }

  pub fn username(&self) -> &str {
    &self.username
  }
}
