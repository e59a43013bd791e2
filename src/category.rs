use super::*;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub(crate) enum Category {
  Ask,
  Best,
  Job,
  New,
  Show,
  #[default]
  Top,
}

impl Category {
  pub(crate) fn endpoint(self) -> &'static str {
    match self {
      Self::Ask => "askstories",
      Self::Best => "beststories",
      Self::Job => "jobstories",
      Self::New => "newstories",
      Self::Show => "showstories",
      Self::Top => "topstories",
    }
  }

  pub(crate) fn heading(self) -> &'static str {
    match self {
      Self::Ask => "Ask HN",
      Self::Best => "Hacker News Best Stories",
      Self::Job => "Hacker News Jobs",
      Self::New => "Hacker News New Stories",
      Self::Show => "Show HN",
      Self::Top => "Hacker News Top Stories",
    }
  }
}
