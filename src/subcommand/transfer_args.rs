use super::*;

#[derive(Debug, Clone, Parser)]
pub(crate) struct TransferArgs {
  #[arg(long, help = "Send inscription <INSCRIPTION>.")]
  pub(crate) inscription: Option<InscriptionId>,
  #[arg(long, default_value_t = 0, help = "Send <AMOUNT> sats.")]
  pub(crate) amount: u64,
  #[arg(long, help = "Use fee rate of <FEE_RATE> sats/vB.")]
  pub(crate) fee_rate: FeeRate,
  #[arg(
    long,
    help = "Pay the fee out of the inscription output when it is large enough."
  )]
  pub(crate) inscription_pays_fee: bool,
}

impl TransferArgs {
  pub(crate) fn transfer(&self) -> Result<wallet::Transfer> {
    Ok(wallet::Transfer::new(
      self.inscription,
      Amount::from_sat(self.amount),
      self.fee_rate,
      self.inscription_pays_fee,
    )?)
  }
}
