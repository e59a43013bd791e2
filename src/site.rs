use {
  super::*,
  chrono::{DateTime, Utc},
  std::fmt::{self, Write},
};

pub(crate) struct Site {
  category: Option<Category>,
  generated_at: DateTime<Utc>,
  output_dir: PathBuf,
}

impl Site {
  const STYLESHEET: &str = "style.css";

  fn heading(&self) -> &'static str {
    self
      .category
      .map_or("Hacker News Stories", Category::heading)
  }

  pub(crate) fn new(
    output_dir: PathBuf,
    generated_at: DateTime<Utc>,
    category: Option<Category>,
  ) -> Self {
    Self {
      category,
      generated_at,
      output_dir,
    }
  }

  fn push_comment(html: &mut String, comment: &CommentNode) -> fmt::Result {
    let Some(author) = comment.author.as_deref().filter(|by| !by.is_empty())
    else {
      for child in &comment.children {
        Self::push_comment(html, child)?;
      }

      return Ok(());
    };

    let skull = if comment.dead { " ☠" } else { "" };

    writeln!(html, "<li>")?;
    writeln!(html, r#"<div class="comment" id="comment-{}">"#, comment.id)?;
    writeln!(html, r#"<details open="true">"#)?;
    writeln!(
      html,
      "<summary><b>{}{skull}</b> <u>{}</u></summary>",
      escape(author),
      format_timestamp(comment.time)
    )?;
    writeln!(html, "<p>{}</p>", comment.text.as_deref().unwrap_or_default())?;
    writeln!(html, "</details>")?;
    writeln!(html, "</div>")?;

    if !comment.children.is_empty() {
      writeln!(html, "<ul>")?;

      for child in &comment.children {
        Self::push_comment(html, child)?;
      }

      writeln!(html, "</ul>")?;
    }

    writeln!(html, "</li>")
  }

  fn push_head(html: &mut String, title: &str) -> fmt::Result {
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html>")?;
    writeln!(html, "<head>")?;
    writeln!(html, r#"<meta charset="utf-8"/>"#)?;
    writeln!(html, "<title>{}</title>", escape(title))?;
    writeln!(
      html,
      r#"<link rel="stylesheet" type="text/css" href="{}">"#,
      Self::STYLESHEET
    )?;
    writeln!(html, "</head>")
  }

  pub(crate) fn story_page(story: &StoryNode) -> Result<String, fmt::Error> {
    let mut html = String::new();

    let author = story.author.as_deref().unwrap_or("unknown");

    let link = story.link();

    Self::push_head(&mut html, &story.title)?;

    writeln!(html, "<body>")?;
    writeln!(html, "<header>")?;
    writeln!(html, r#"<div class="story-header" id="story-{}">"#, story.id)?;
    writeln!(html, "<h1>{}</h1>", escape(&story.title))?;
    writeln!(html, "<h3>By: {}</h3>", escape(author))?;
    writeln!(html, "<h3>Score: {}</h3>", format_points(story.score))?;
    writeln!(html, "<h3>Posted at: {}</h3>", format_timestamp(story.time))?;
    writeln!(html, r#"<a href="{0}">{0}</a>"#, escape(&link))?;

    if let Some(text) = story.text.as_deref().filter(|text| !text.is_empty()) {
      writeln!(html, "<p>{text}</p>")?;
    }

    writeln!(html, "</div>")?;
    writeln!(html, "</header>")?;
    writeln!(html, "<hr>")?;
    writeln!(html, "<ul>")?;

    for comment in &story.comments {
      Self::push_comment(&mut html, comment)?;
    }

    writeln!(html, "</ul>")?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;

    Ok(html)
  }

  fn story_path(&self, id: ItemId) -> PathBuf {
    self.output_dir.join(format!("story-{id}.html"))
  }

  pub(crate) fn top_page(&self, stories: &[StoryNode]) -> Result<String, fmt::Error> {
    let mut html = String::new();

    Self::push_head(&mut html, &format!("{} Archive", self.heading()))?;

    writeln!(html, "<body>")?;
    writeln!(html, "<h1>{}</h1>", self.heading())?;
    writeln!(
      html,
      "<h2>Last generated at: {}</h2>",
      self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(html, "<hr>")?;
    writeln!(html, "<ul>")?;

    for story in stories {
      writeln!(
        html,
        r#"<li><div class="story" id="story-{}">"#,
        story.id
      )?;
      writeln!(
        html,
        r#"<h2><a href="story-{}.html">{} - [{}]</a></h2>"#,
        story.id,
        escape(&story.title),
        story.score
      )?;
      writeln!(
        html,
        "<h3>By: {} at {} - {}</h3>",
        escape(story.author.as_deref().unwrap_or("unknown")),
        format_timestamp(story.time),
        format_comments(story.descendants)
      )?;
      writeln!(html, "</div></li>")?;
    }

    writeln!(html, "</ul>")?;
    writeln!(html, "</body></html>")?;

    Ok(html)
  }

  pub(crate) fn write(&self, stories: &[StoryNode], style: Option<&Path>) -> Result {
    fs::create_dir_all(&self.output_dir).with_context(|| {
      format!("could not create {}", self.output_dir.display())
    })?;

    fs::write(self.output_dir.join("top.html"), self.top_page(stories)?)?;

    for story in stories {
      fs::write(self.story_path(story.id), Self::story_page(story)?)?;
    }

    if let Some(style) = style {
      fs::copy(style, self.output_dir.join(Self::STYLESHEET)).with_context(
        || format!("could not copy stylesheet {}", style.display()),
      )?;
    }

    tracing::info!(
      stories = stories.len(),
      dir = %self.output_dir.display(),
      "rendered site"
    );

    Ok(())
  }
}
