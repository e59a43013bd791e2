use {
  anyhow::Context,
  arguments::Arguments,
  async_trait::async_trait,
  category::Category,
  clap::{Parser, ValueEnum},
  client::Client,
  collection::Collection,
  collector::Collector,
  command::Command,
  comment_node::CommentNode,
  crossterm::style::Stylize,
  cycle_policy::CyclePolicy,
  fatal_error::FatalError,
  fetch_arguments::FetchArguments,
  fetch_config::FetchConfig,
  flat_record_map::FlatRecordMap,
  frontier_fetcher::FrontierFetcher,
  futures::{
    future::join_all,
    stream::{self, StreamExt},
  },
  lookup::Lookup,
  raw_record::RawRecord,
  record_source::RecordSource,
  serde::{Deserialize, Serialize},
  site::Site,
  skipped_story::SkippedStory,
  std::{
    backtrace::BacktraceStatus,
    collections::{HashMap, HashSet},
    fs,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process,
    sync::Arc,
    time::Duration,
  },
  story_failure::StoryFailure,
  story_node::StoryNode,
  throttle::Throttle,
  transport_error::TransportError,
  tree_assembler::TreeAssembler,
  utils::{escape, format_comments, format_points, format_timestamp},
};

#[cfg(test)]
use mock_source::MockSource;

mod arguments;
mod category;
mod client;
mod collection;
mod collector;
mod command;
mod comment_node;
mod cycle_policy;
mod dump;
mod fatal_error;
mod fetch_arguments;
mod fetch_config;
mod flat_record_map;
mod frontier_fetcher;
mod logging;
mod lookup;
#[cfg(test)]
mod mock_source;
mod raw_record;
mod record_source;
mod retry;
mod site;
mod skipped_story;
mod story_failure;
mod story_node;
mod throttle;
mod transport_error;
mod tree_assembler;
mod utils;

pub(crate) type ItemId = u64;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn label(text: &str, use_color: bool) -> String {
  if use_color {
    text.bold().red().to_string()
  } else {
    text.to_string()
  }
}

fn report(error: &anyhow::Error, use_color: bool) -> String {
  let mut lines = vec![format!("{} {error}", label("error:", use_color))];

  let causes = error.chain().skip(1).collect::<Vec<_>>();

  if !causes.is_empty() {
    lines.push(String::new());
    lines.push(label("because:", use_color));

    for cause in causes {
      lines.push(format!("{} {cause}", label("-", use_color)));
    }
  }

  let backtrace = error.backtrace();

  if backtrace.status() == BacktraceStatus::Captured {
    lines.push(label("backtrace:", use_color));
    lines.push(backtrace.to_string());
  }

  lines.join("\n")
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  logging::init(arguments.verbose);

  arguments.run().await
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    eprintln!("{}", report(&error, io::stderr().is_terminal()));
    process::exit(1);
  }
}
