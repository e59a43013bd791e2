use {super::*, tracing_subscriber::EnvFilter};

fn default_directive(verbose: u8) -> String {
  let level = match verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };

  format!("hn_archive={level}")
}

pub(crate) fn init(verbose: u8) {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}
