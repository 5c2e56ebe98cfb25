use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Split {
  #[arg(long, help = "Read wallet UTXOs and inscriptions from <SNAPSHOT>.")]
  snapshot: PathBuf,
  #[arg(long, help = "Split sats off the output carrying <INSCRIPTION>.")]
  inscription: InscriptionId,
  #[arg(long, help = "Move <AMOUNT> sats into a separate output.")]
  amount: u64,
  #[arg(long, help = "Use fee rate of <FEE_RATE> sats/vB.")]
  fee_rate: FeeRate,
  #[arg(long, help = "Spend from and send both outputs to <SENDER>.")]
  sender: Address<NetworkUnchecked>,
}

impl Split {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let sender = settings
      .chain()
      .address(self.sender)
      .context("invalid sender")?;

    let snapshot = Snapshot::load(&self.snapshot)?;

    let selection = wallet::split_inscription_utxo(
      &snapshot.utxos,
      &snapshot.inscriptions,
      self.inscription,
      Amount::from_sat(self.amount),
      self.fee_rate,
      &settings.policy()?,
    )?;

    Ok(Box::new(build::Output::new(
      &wallet::TransactionBuilder::new(selection, &sender, &sender),
      &sender,
    )?))
  }
}
