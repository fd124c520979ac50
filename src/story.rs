use {super::*, url::Url};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
  pub author: String,
  pub created_at: DateTime<Utc>,
  pub id: String,
  pub title: String,
  pub url: String,
  pub username: String,
}

impl Story {
  /// Host portion of the story url, used as the display host name.
  pub fn host_name(&self) -> Option<String> {
    Url::parse(&self.url)
      .ok()
      .and_then(|url| url.host_str().map(str::to_string))
  }
}
