use {
  anyhow::Context,
  snooze::{Client, SavedSession, StoryList, User},
  std::{env, process},
  tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt},
};

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn run() -> Result {
  let client = match env::var("SNOOZE_API_URL") {
    Ok(base_url) => Client::new(base_url),
    Err(_) => Client::default(),
  };

  let mut stories = StoryList::fetch(&client)
    .await
    .context("could not fetch the story list")?;

  let user = match SavedSession::load()? {
    Some(saved) => Some(
      User::restore(&client, &mut stories, &saved)
        .await
        .context("could not restore the saved session")?,
    ),
    None => None,
  };

  if let Some(user) = &user {
    println!("logged in as {} ({})", user.username(), user.name());
  }

  for story in stories.iter() {
    let host = story
      .host_name()
      .unwrap_or_else(|| "unknown host".to_string());

    let marker = user.as_ref().map_or(' ', |user| {
      if user.is_favorite(&story.id) { '*' } else { ' ' }
    });

    println!("{marker} {} ({host}) by {}", story.title, story.author);
  }

  Ok(())
}

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "snooze=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  if let Err(error) = run().await {
    eprintln!("error: {error}");

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {error}");
    }

    process::exit(1);
  }
}
