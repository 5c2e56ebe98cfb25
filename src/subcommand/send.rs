use super::*;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Payment {
  address: Address<NetworkUnchecked>,
  amount: Amount,
}

impl FromStr for Payment {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let (address, amount) = s
      .rsplit_once(':')
      .ok_or_else(|| anyhow!("payment `{s}` is not of the form <ADDRESS>:<SATS>"))?;

    Ok(Self {
      address: address.parse()?,
      amount: Amount::from_sat(amount.parse()?),
    })
  }
}

#[derive(Debug, Parser)]
pub(crate) struct Send {
  #[arg(long, help = "Read wallet UTXOs and inscriptions from <SNAPSHOT>.")]
  snapshot: PathBuf,
  #[arg(
    long = "payment",
    required = true,
    help = "Pay <PAYMENT>, given as <ADDRESS>:<SATS>. May be repeated."
  )]
  payments: Vec<Payment>,
  #[arg(long, help = "Use fee rate of <FEE_RATE> sats/vB.")]
  fee_rate: FeeRate,
  #[arg(long, help = "Spend from and send change to <SENDER>.")]
  sender: Address<NetworkUnchecked>,
}

impl Send {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let chain = settings.chain();

    let sender = chain.address(self.sender).context("invalid sender")?;

    let payments = self
      .payments
      .into_iter()
      .map(|payment| {
        Ok((
          chain
            .address(payment.address)
            .context("invalid payment address")?,
          payment.amount,
        ))
      })
      .collect::<Result<Vec<(Address, Amount)>>>()?;

    let snapshot = Snapshot::load(&self.snapshot)?;

    let transfer = wallet::Transfer::send_many(
      payments.iter().map(|(_, amount)| *amount).collect(),
      self.fee_rate,
    )?;

    let selection = wallet::select_utxos(
      &snapshot.utxos,
      &snapshot.inscriptions,
      &transfer,
      &settings.policy()?,
    )?;

    Ok(Box::new(build::Output::new(
      &wallet::TransactionBuilder::send_many(selection, &payments, &sender)?,
      &sender,
    )?))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_payment() {
    assert_eq!(
      "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4:1500"
        .parse::<Payment>()
        .unwrap(),
      Payment {
        address: "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4".parse().unwrap(),
        amount: Amount::from_sat(1_500),
      }
    );
  }

  #[test]
  fn malformed_payments() {
    assert!("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4".parse::<Payment>().is_err());
    assert!("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4:foo".parse::<Payment>().is_err());
    assert!("foo:1000".parse::<Payment>().is_err());
  }

  #[test]
  fn payments_are_required() {
    assert!(Send::try_parse_from([
      "send",
      "--snapshot",
      "snapshot.json",
      "--fee-rate",
      "1",
      "--sender",
      "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4",
    ])
    .is_err());
  }

  #[test]
  fn payments_may_be_repeated() {
    let send = Send::try_parse_from([
      "send",
      "--snapshot",
      "snapshot.json",
      "--fee-rate",
      "1",
      "--sender",
      "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4",
      "--payment",
      "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4:1000",
      "--payment",
      "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4:2000",
    ])
    .unwrap();

    assert_eq!(
      send
        .payments
        .iter()
        .map(|payment| payment.amount.to_sat())
        .collect::<Vec<u64>>(),
      [1_000, 2_000]
    );
  }
}
