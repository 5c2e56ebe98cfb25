use super::*;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub txid: Txid,
}

#[derive(Debug, Parser)]
pub(crate) struct Broadcast {
  #[arg(help = "Broadcast hex-encoded signed <TRANSACTION>.")]
  transaction: String,
  #[arg(
    long,
    default_value_t = 3,
    help = "Give up after <ATTEMPTS> failed submissions."
  )]
  attempts: usize,
}

impl Broadcast {
  const RETRY_DELAY: Duration = Duration::from_millis(500);

  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let transaction = consensus::deserialize::<Transaction>(
      &hex::decode(self.transaction.trim()).context("transaction is not valid hex")?,
    )
    .context("failed to decode transaction")?;

    let esplora = wallet::Esplora::new(&settings.esplora_url()?);

    let txid = wallet::broadcast_with_retry(
      &esplora,
      &transaction,
      self.attempts,
      Self::RETRY_DELAY,
    )
    .with_context(|| format!("failed to broadcast transaction to {}", esplora.url()))?;

    Ok(Box::new(Output { txid }))
  }
}
