use super::*;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub cardinal: u64,
  pub ordinal: u64,
  pub total: u64,
}

#[derive(Debug, Parser)]
pub(crate) struct Balance {
  #[arg(long, help = "Read wallet UTXOs and inscriptions from <SNAPSHOT>.")]
  snapshot: PathBuf,
}

impl Balance {
  pub(crate) fn run(self) -> SubcommandResult {
    let snapshot = Snapshot::load(&self.snapshot)?;

    let classified = wallet::classify(&snapshot.utxos, &snapshot.inscriptions, None)?;

    Ok(Box::new(Output {
      cardinal: classified.cardinal_balance.to_sat(),
      ordinal: classified.ordinal_balance.to_sat(),
      total: (classified.cardinal_balance + classified.ordinal_balance).to_sat(),
    }))
  }
}
