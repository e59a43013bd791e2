use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "hn-archive",
  version,
  about = "Archive Hacker News stories and their comment trees as static HTML"
)]
pub(crate) struct Arguments {
  #[command(subcommand)]
  command: Command,
  /// Increase log verbosity (-v, -vv, -vvv)
  #[arg(short, long, global = true, action = clap::ArgAction::Count)]
  pub(crate) verbose: u8,
}

impl Arguments {
  pub(crate) async fn run(self) -> Result {
    self.command.run().await
  }
}
