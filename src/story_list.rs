use {super::*, std::collections::HashSet};

/// Authoritative collection of stories, newest first. The only component
/// that creates or deletes story identities; user views hold ids and resolve
/// through it. Local state changes only after the remote store confirms, so
/// a failed call leaves the list exactly as it was.
#[derive(Debug, Default)]
pub struct StoryList {
  ids: HashSet<String>,
  stories: Vec<Story>,
}

impl StoryList {
  /// Merge subset records returned at login into the list, returning their
  /// ids in order. Records already present are dropped: the copy obtained
  /// from the full fetch stays authoritative.
  pub(crate) fn absorb(&mut self, records: Vec<Story>) -> Vec<String> {
    let mut ids = Vec::with_capacity(records.len());

    for story in records {
      ids.push(story.id.clone());

      if self.ids.insert(story.id.clone()) {
        let position = self
          .stories
          .iter()
          .position(|existing| existing.created_at < story.created_at)
          .unwrap_or(self.stories.len());

        self.stories.insert(position, story);
      }
    }

    ids
  }

  pub async fn add_story(
    &mut self,
    client: &Client,
    user: &mut User,
    draft: StoryDraft,
  ) -> Result<&Story> {
    draft.validate()?;

    let story = client.create_story(user.token(), &draft).await?;

    debug!(id = %story.id, "story created");

    user.record_own_story(&story.id);
    self.ids.insert(story.id.clone());
    self.stories.insert(0, story);

    Ok(&self.stories[0])
  }

  pub fn contains(&self, id: &str) -> bool {
    self.ids.contains(id)
  }

  pub async fn edit_story(
    &mut self,
    client: &Client,
    user: &User,
    id: &str,
    patch: StoryDraft,
  ) -> Result<&Story> {
    patch.validate()?;

    let position = self.require(user, id)?;

    let updated = client.update_story(user.token(), id, &patch).await?;

    debug!(id, "story updated");

    // Identity preserved: fields change in place, id and owner do not.
    let story = &mut self.stories[position];
    story.author = updated.author;
    story.title = updated.title;
    story.url = updated.url;

    Ok(&self.stories[position])
  }

  pub async fn fetch(client: &Client) -> Result<Self> {
    let stories = client.fetch_stories().await?;

    let ids = stories
      .iter()
      .map(|story| story.id.clone())
      .collect::<HashSet<_>>();

    if ids.len() != stories.len() {
      return Err(Error::Decode(
        "duplicate story ids in remote response".to_string(),
      ));
    }

    debug!(count = stories.len(), "story list fetched");

    Ok(Self { ids, stories })
  }

  pub fn get(&self, id: &str) -> Option<&Story> {
    self.stories.iter().find(|story| story.id == id)
  }

  pub fn is_empty(&self) -> bool {
    self.stories.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Story> {
    self.stories.iter()
  }

  pub fn len(&self) -> usize {
    self.stories.len()
  }

  pub async fn remove_story(
    &mut self,
    client: &Client,
    user: &mut User,
    id: &str,
  ) -> Result {
    let position = self.require(user, id)?;

    client.delete_story(user.token(), id).await?;

    debug!(id, "story removed");

    self.stories.remove(position);
    self.ids.remove(id);
    user.forget_story(id);

    Ok(())
  }

  /// Short-circuit before any remote call: the story must exist locally and
  /// belong to the caller. The server checks ownership again.
  fn require(&self, user: &User, id: &str) -> Result<usize> {
    let position = self
      .stories
      .iter()
      .position(|story| story.id == id)
      .ok_or_else(|| Error::NotFound(id.to_string()))?;

    if self.stories[position].username != user.username() {
      return Err(Error::Auth(format!(
        "story {id} belongs to {}",
        self.stories[position].username
      )));
    }

    Ok(position)
  }

  pub fn stories(&self) -> &[Story] {
    &self.stories
  }
}
