use super::*;

pub mod balance;
pub mod broadcast;
pub mod build;
pub mod estimate;
pub mod select;
pub mod send;
pub mod split;
mod transfer_args;

#[derive(Debug, Parser)]
pub(crate) enum Subcommand {
  #[command(about = "Show cardinal and inscribed balance of a wallet snapshot")]
  Balance(balance::Balance),
  #[command(about = "Broadcast a signed transaction")]
  Broadcast(broadcast::Broadcast),
  #[command(about = "Build an unsigned transaction and PSBT for a transfer")]
  Build(build::Build),
  #[command(about = "Estimate the fee of a transfer before selecting inputs")]
  Estimate(estimate::Estimate),
  #[command(about = "Select inputs for a transfer")]
  Select(select::Select),
  #[command(about = "Build an unsigned transaction paying several recipients")]
  Send(send::Send),
  #[command(about = "Build an unsigned transaction splitting sats off an inscription output")]
  Split(split::Split),
}

impl Subcommand {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    match self {
      Self::Balance(balance) => balance.run(),
      Self::Broadcast(broadcast) => broadcast.run(settings),
      Self::Build(build) => build.run(settings),
      Self::Estimate(estimate) => estimate.run(settings),
      Self::Select(select) => select.run(settings),
      Self::Send(send) => send.run(settings),
      Self::Split(split) => split.run(settings),
    }
  }
}

#[derive(clap::ValueEnum, Default, Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
  #[default]
  Json,
  Yaml,
  Minify,
}

pub trait Output: Send {
  fn print(&self, format: OutputFormat);
}

impl<T> Output for T
where
  T: Serialize + Send,
{
  fn print(&self, format: OutputFormat) {
    match format {
      OutputFormat::Json => serde_json::to_writer_pretty(io::stdout(), self).ok(),
      OutputFormat::Yaml => serde_yaml::to_writer(io::stdout(), self).ok(),
      OutputFormat::Minify => serde_json::to_writer(io::stdout(), self).ok(),
    };
    println!();
  }
}

pub(crate) type SubcommandResult = Result<Box<dyn Output>>;
