use {super::*, reconciler::Reconciliation};

pub use self::{
  broadcaster::{broadcast_with_retry, BroadcastError, Broadcaster, Esplora},
  classifier::{classify, Classified},
  coin_selector::Selection,
  error::Error,
  fee_model::FeeModel,
  transaction_builder::TransactionBuilder,
  transfer::Transfer,
};

pub(crate) use self::{
  coin_selector::CoinSelector,
  error::{
    DuplicateInscriptionHost, InscriptionUtxoNotFound, InsufficientBalance,
    InsufficientInscriptionValue, InvalidInput, UnsupportedMultiInscriptionUtxo,
  },
};

mod broadcaster;
mod classifier;
mod coin_selector;
mod error;
mod fee_model;
mod reconciler;
mod splitter;
mod transaction_builder;
mod transfer;

/// Wallet parameters that are not part of an individual transfer.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Policy {
  pub fee_model: FeeModel,
  /// Smallest value an inscription output may be left with after paying the
  /// fee.
  pub dust_threshold: Amount,
}

impl Policy {
  pub const DUST_THRESHOLD: Amount = Amount::from_sat(1_000);

  pub fn check(&self) -> Result<(), Error> {
    if self.dust_threshold > Amount::MAX_MONEY {
      return InvalidInput {
        message: format!(
          "dust threshold {} sat exceeds the money supply",
          self.dust_threshold.to_sat()
        ),
      }
      .fail();
    }

    Ok(())
  }
}

impl Default for Policy {
  fn default() -> Self {
    Self {
      fee_model: FeeModel::default(),
      dust_threshold: Self::DUST_THRESHOLD,
    }
  }
}

/// Chooses the inputs for `transfer` from a snapshot of the wallet's UTXOs
/// and computes the fee, the value of the inscription output, and change.
///
/// When an inscription is sent, its UTXO is always the first input, so the
/// inscription lands in the first output of the built transaction.
pub fn select_utxos(
  utxos: &[Utxo],
  inscriptions: &InscriptionIndex,
  transfer: &Transfer,
  policy: &Policy,
) -> Result<Selection, Error> {
  CoinSelector::new(utxos, inscriptions, transfer, *policy).select()
}

/// Splits `amount` sats off the UTXO carrying `inscription` into a second
/// output. The fee is paid by the inscription UTXO, which stays the only
/// input, and the inscription keeps the first output.
pub fn split_inscription_utxo(
  utxos: &[Utxo],
  inscriptions: &InscriptionIndex,
  inscription: InscriptionId,
  amount: Amount,
  fee_rate: FeeRate,
  policy: &Policy,
) -> Result<Selection, Error> {
  splitter::split(utxos, inscriptions, inscription, amount, fee_rate, policy)
}

/// Total value of UTXOs that carry no inscriptions.
pub fn cardinal_balance(utxos: &[Utxo], inscriptions: &InscriptionIndex) -> Result<Amount, Error> {
  Ok(classify(utxos, inscriptions, None)?.cardinal_balance)
}
