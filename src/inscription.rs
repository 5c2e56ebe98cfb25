use super::*;

/// Inscriptions keyed by the outpoint of the UTXO that carries them.
pub type InscriptionIndex = BTreeMap<OutPoint, Vec<Inscription>>;

/// An inscription and the offset of its sat within the carrying UTXO.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct Inscription {
  pub id: InscriptionId,
  pub offset: u64,
}
