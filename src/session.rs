use {
  super::*,
  std::{
    env, fs, io,
    path::{Path, PathBuf},
  },
};

/// Credential remembered between runs so a session can be rebuilt without a
/// fresh login. Stored as JSON under the user's config directory; cleared on
/// logout.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SavedSession {
  pub token: String,
  pub username: String,
}

impl SavedSession {
  pub fn clear() -> io::Result<()> {
    let path = Self::session_path()?;

    if path.exists() {
      fs::remove_file(path)?;
    }

    Ok(())
  }

  fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }

    Ok(())
  }

  pub fn load() -> io::Result<Option<Self>> {
    let path = Self::session_path()?;

    if !path.exists() {
      return Ok(None);
    }

    let data = fs::read(&path)?;

    if data.is_empty() {
      return Ok(None);
    }

    Ok(Some(serde_json::from_slice(&data)?))
  }

  pub fn save(&self) -> io::Result<()> {
    let path = Self::session_path()?;

    Self::ensure_parent_dir(&path)?;

    fs::write(&path, serde_json::to_vec_pretty(self)?)?;

    Ok(())
  }

  fn session_path() -> io::Result<PathBuf> {
    if let Ok(path) = env::var("SNOOZE_SESSION_FILE") {
      return Ok(PathBuf::from(path));
    }

    let base_dir = if let Ok(dir) = env::var("XDG_CONFIG_HOME") {
      PathBuf::from(dir)
    } else if let Ok(home) = env::var("HOME") {
      PathBuf::from(home).join(".config")
    } else {
      env::current_dir()?.join(".config")
    };

    Ok(base_dir.join("snooze").join("session.json"))
  }
}
