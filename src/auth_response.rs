use super::*;

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
  pub token: String,
  pub user: UserRecord,
}
