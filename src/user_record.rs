use super::*;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
  #[serde(default)]
  pub favorites: Vec<Story>,
  pub name: String,
  #[serde(default)]
  pub own_stories: Vec<Story>,
  pub username: String,
}
