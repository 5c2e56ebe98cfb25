use {
  super::{transfer_args::TransferArgs, *},
  base64::Engine,
};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub selection: wallet::Selection,
  pub transaction: String,
  pub psbt: String,
  pub txid: Txid,
}

#[derive(Debug, Parser)]
pub(crate) struct Build {
  #[arg(long, help = "Read wallet UTXOs and inscriptions from <SNAPSHOT>.")]
  snapshot: PathBuf,
  #[arg(long, help = "Send to <RECIPIENT>.")]
  recipient: Address<NetworkUnchecked>,
  #[arg(long, help = "Spend from and send change to <SENDER>.")]
  sender: Address<NetworkUnchecked>,
  #[command(flatten)]
  transfer: TransferArgs,
}

impl Build {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let chain = settings.chain();

    let recipient = chain
      .address(self.recipient)
      .context("invalid recipient")?;

    let sender = chain.address(self.sender).context("invalid sender")?;

    let snapshot = Snapshot::load(&self.snapshot)?;

    let selection = wallet::select_utxos(
      &snapshot.utxos,
      &snapshot.inscriptions,
      &self.transfer.transfer()?,
      &settings.policy()?,
    )?;

    Ok(Box::new(Output::new(
      &wallet::TransactionBuilder::new(selection, &recipient, &sender),
      &sender,
    )?))
  }
}

impl Output {
  pub(crate) fn new(builder: &wallet::TransactionBuilder, sender: &Address) -> Result<Self> {
    let transaction = builder.build_transaction();

    let psbt = builder.build_psbt(sender)?;

    Ok(Self {
      selection: builder.selection().clone(),
      transaction: consensus::encode::serialize_hex(&transaction),
      psbt: base64::engine::general_purpose::STANDARD.encode(psbt.serialize()),
      txid: transaction.compute_txid(),
    })
  }
}
