use super::*;

/// Reasons a transfer cannot be funded from a wallet snapshot. No partial
/// selection is ever returned alongside an error.
#[derive(Debug, PartialEq, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum Error {
  #[snafu(display("inscription {inscription_id} is hosted by both {first} and {second}"))]
  DuplicateInscriptionHost {
    inscription_id: InscriptionId,
    first: OutPoint,
    second: OutPoint,
  },
  #[snafu(display(
    "insufficient cardinal balance: {} sat needed, {} sat available",
    needed.to_sat(),
    available.to_sat(),
  ))]
  InsufficientBalance { needed: Amount, available: Amount },
  #[snafu(display("inscription {inscription_id} not found in wallet UTXOs"))]
  InscriptionUtxoNotFound { inscription_id: InscriptionId },
  #[snafu(display(
    "inscription output {outpoint} holds {} sat, {} sat needed",
    available.to_sat(),
    needed.to_sat(),
  ))]
  InsufficientInscriptionValue {
    outpoint: OutPoint,
    needed: Amount,
    available: Amount,
  },
  #[snafu(display("invalid input: {message}"))]
  InvalidInput { message: String },
  #[snafu(display(
    "cannot send inscription {inscription_id}: output {outpoint} also contains {}",
    inscription_ids
      .iter()
      .filter(|id| *id != inscription_id)
      .map(ToString::to_string)
      .collect::<Vec<String>>()
      .join(", "),
  ))]
  UnsupportedMultiInscriptionUtxo {
    inscription_id: InscriptionId,
    outpoint: OutPoint,
    inscription_ids: Vec<InscriptionId>,
  },
}
