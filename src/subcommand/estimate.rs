use super::{transfer_args::TransferArgs, *};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub inputs: usize,
  pub outputs: usize,
  pub fee: u64,
}

#[derive(Debug, Parser)]
pub(crate) struct Estimate {
  #[command(flatten)]
  transfer: TransferArgs,
}

impl Estimate {
  pub(crate) fn run(self, settings: Settings) -> SubcommandResult {
    let transfer = self.transfer.transfer()?;

    let policy = settings.policy()?;

    let (inputs, outputs) = wallet::FeeModel::estimate_in_out_counts(
      transfer.inscription().is_some(),
      transfer.payments().len(),
      transfer.inscription_pays_fee() && transfer.inscription().is_some(),
    );

    Ok(Box::new(Output {
      inputs,
      outputs,
      fee: policy
        .fee_model
        .estimate_fee(inputs, outputs, transfer.fee_rate())?
        .to_sat(),
    }))
  }
}
