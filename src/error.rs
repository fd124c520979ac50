use super::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("story {0} is already a favorite")]
  AlreadyFavorited(String),

  #[error("not authorized: {0}")]
  Auth(String),

  #[error("malformed response from the remote store: {0}")]
  Decode(String),

  #[error("network failure: {0}")]
  Network(#[source] reqwest::Error),

  #[error("story {0} is not a favorite")]
  NotFavorited(String),

  #[error("story {0} does not exist")]
  NotFound(String),

  #[error("invalid input: {0}")]
  Validation(String),
}

impl Error {
  pub(crate) fn for_status(status: StatusCode, context: String) -> Option<Self> {
    match status {
      StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
        Some(Self::Validation(context))
      }
      StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => {
        Some(Self::Auth(context))
      }
      StatusCode::NOT_FOUND => Some(Self::NotFound(context)),
      _ => None,
    }
  }
}

impl From<reqwest::Error> for Error {
  fn from(error: reqwest::Error) -> Self {
    if error.is_decode() {
      Self::Decode(error.to_string())
    } else {
      Self::Network(error)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn for_status_maps_auth_statuses() {
    assert!(matches!(
      Error::for_status(StatusCode::UNAUTHORIZED, "login".into()),
      Some(Error::Auth(_))
    ));

    assert!(matches!(
      Error::for_status(StatusCode::FORBIDDEN, "delete".into()),
      Some(Error::Auth(_))
    ));
  }

  #[test]
  fn for_status_maps_not_found_and_validation() {
    assert!(matches!(
      Error::for_status(StatusCode::NOT_FOUND, "s1".into()),
      Some(Error::NotFound(_))
    ));

    assert!(matches!(
      Error::for_status(StatusCode::UNPROCESSABLE_ENTITY, "url".into()),
      Some(Error::Validation(_))
    ));
  }

  #[test]
  fn network_errors_expose_the_transport_cause() {
    use std::error::Error as _;

    let inner = reqwest::Client::new()
      .get("not a url")
      .build()
      .unwrap_err();

    let error = Error::Network(inner);

    assert!(error.source().is_some());
  }

  #[test]
  fn for_status_leaves_other_statuses_to_the_transport_path() {
    assert!(
      Error::for_status(StatusCode::INTERNAL_SERVER_ERROR, "x".into())
        .is_none()
    );

    assert!(Error::for_status(StatusCode::OK, "x".into()).is_none());
  }
}
