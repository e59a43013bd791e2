use {super::*, chrono::Utc};

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Command {
  /// Fetch fresh stories (or reuse a dump) and render them into a directory
  Archive {
    /// Existing dump to render instead of fetching
    #[arg(long)]
    dump_file: Option<PathBuf>,
    #[command(flatten)]
    fetch: FetchArguments,
    /// Render only the first N stories
    #[arg(long)]
    num_posts: Option<usize>,
    /// Directory the dump and HTML pages are written to
    #[arg(long)]
    output_dir: PathBuf,
    /// Stylesheet copied next to the pages
    #[arg(long, env = "HN_STYLE")]
    style: Option<PathBuf>,
  },
  /// Fetch stories with their comment trees into a JSON dump
  Fetch {
    /// Where to write the dump
    dump_file: PathBuf,
    #[command(flatten)]
    fetch: FetchArguments,
    /// Fetch only the first N stories
    #[arg(long)]
    limit: Option<usize>,
  },
  /// Render a JSON dump as HTML
  Generate {
    /// Dump written by `fetch`
    #[arg(long)]
    dump_file: PathBuf,
    /// Render only the first N stories
    #[arg(long)]
    num_posts: Option<usize>,
    /// Directory the HTML pages are written to
    #[arg(long)]
    output_dir: PathBuf,
    /// Stylesheet copied next to the pages
    #[arg(long, env = "HN_STYLE")]
    style: Option<PathBuf>,
  },
}

impl Command {
  const DUMP_FILE_NAME: &str = "stories.json";

  async fn collect(
    fetch: &FetchArguments,
    limit: Option<usize>,
  ) -> Result<Vec<StoryNode>> {
    let config = fetch.config();

    config.validate()?;

    let client = Client::new(&config)?;

    let collection = Collector::new(Arc::new(client), config)
      .fetch_all(limit)
      .await?;

    for skipped in &collection.skipped {
      tracing::debug!(id = skipped.id, reason = ?skipped.reason, "skipped story");
    }

    eprintln!("{}", collection.summary());

    anyhow::ensure!(
      !collection.stories.is_empty() || collection.skipped.is_empty(),
      "every story failed to collect"
    );

    if collection.stories.is_empty() {
      tracing::warn!("story listing was empty");
    }

    Ok(collection.stories)
  }

  fn generate(
    stories: &[StoryNode],
    category: Option<Category>,
    num_posts: Option<usize>,
    output_dir: PathBuf,
    style: Option<&Path>,
  ) -> Result {
    let chosen = &stories[..num_posts.unwrap_or(stories.len()).min(stories.len())];

    Site::new(output_dir, Utc::now(), category)
      .write(chosen, style)
      .context("failed to render stories")
  }

  pub(crate) async fn run(self) -> Result {
    match self {
      Self::Archive {
        dump_file,
        fetch,
        num_posts,
        output_dir,
        style,
      } => {
        let (stories, category) = match dump_file {
          Some(path) => (dump::load(&path)?, None),
          None => {
            let stories = Self::collect(&fetch, None).await?;
            dump::save(&output_dir.join(Self::DUMP_FILE_NAME), &stories)?;
            (stories, Some(fetch.config().category))
          }
        };

        Self::generate(
          &stories,
          category,
          num_posts,
          output_dir,
          style.as_deref(),
        )
      }
      Self::Fetch {
        dump_file,
        fetch,
        limit,
      } => {
        let stories = Self::collect(&fetch, limit).await?;
        dump::save(&dump_file, &stories)
      }
      Self::Generate {
        dump_file,
        num_posts,
        output_dir,
        style,
      } => {
        let stories = dump::load(&dump_file)?;
        Self::generate(&stories, None, num_posts, output_dir, style.as_deref())
      }
    }
  }
}
