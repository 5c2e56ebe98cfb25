use super::{transfer_args::TransferArgs, *};

#[derive(Debug, Parser)]
pub(crate) struct Select {
  #[arg(long, help = "Read wallet UTXOs and inscriptions from <SNAPSHOT>.")]
  snapshot: PathBuf,
  #[command(flatten)]
  transfer: TransferArgs,
}

impl Select {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let snapshot = Snapshot::load(&self.snapshot)?;

    let selection = wallet::select_utxos(
      &snapshot.utxos,
      &snapshot.inscriptions,
      &self.transfer.transfer()?,
      &settings.policy()?,
    )?;

    Ok(Box::new(selection))
  }
}
