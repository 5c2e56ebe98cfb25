use super::*;

/// Linear size model for single-signature taproot key path spends. Every
/// input and every output is assumed to weigh the same, so a transaction's
/// size depends only on how many of each it has.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct FeeModel {
  pub input_vbytes: usize,
  pub output_vbytes: usize,
}

impl Default for FeeModel {
  fn default() -> Self {
    Self {
      input_vbytes: Self::INPUT_VBYTES,
      output_vbytes: Self::OUTPUT_VBYTES,
    }
  }
}

impl FeeModel {
  pub const INPUT_VBYTES: usize = 68;
  pub const OUTPUT_VBYTES: usize = 43;

  pub fn vbytes(&self, inputs: usize, outputs: usize) -> Option<usize> {
    self
      .input_vbytes
      .checked_mul(inputs)?
      .checked_add(self.output_vbytes.checked_mul(outputs)?)
  }

  /// Fails when the fee would exceed the money supply, which only happens
  /// with absurd fee rates or sizes.
  pub fn estimate_fee(
    &self,
    inputs: usize,
    outputs: usize,
    fee_rate: FeeRate,
  ) -> Result<Amount, Error> {
    let Some(vbytes) = self.vbytes(inputs, outputs) else {
      return InvalidInput {
        message: format!("size of transaction with {inputs} inputs and {outputs} outputs overflows"),
      }
      .fail();
    };

    let fee = fee_rate.fee(vbytes);

    if fee > Amount::MAX_MONEY {
      return InvalidInput {
        message: format!("fee for {vbytes} vbytes at {fee_rate} exceeds the money supply"),
      }
      .fail();
    }

    Ok(fee)
  }

  /// Predicts the number of inputs and outputs a transfer will need before
  /// any UTXOs have been selected. The input count assumes a single cardinal
  /// input, so it is only a lower bound.
  pub fn estimate_in_out_counts(
    inscription: bool,
    payments: usize,
    inscription_pays_fee: bool,
  ) -> (usize, usize) {
    let mut inputs = 0;
    let mut outputs = 0;

    if inscription {
      inputs += 1;
      outputs += 1;
    }

    outputs += payments;

    // change
    if payments > 0 || !inscription_pays_fee {
      inputs += 1;
      outputs += 1;
    }

    (inputs, outputs)
  }
}
