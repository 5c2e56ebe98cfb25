use super::*;

/// An unspent output owned by the sending wallet.
///
/// Field names on the wire follow the indexer snapshot format, which calls
/// the txid `tx_hash` and the output index `tx_output_n`.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
pub struct Utxo {
  #[serde(rename = "tx_hash")]
  pub txid: Txid,
  #[serde(rename = "tx_output_n")]
  pub vout: u32,
  #[serde(with = "bitcoin::amount::serde::as_sat")]
  pub value: Amount,
}

impl Utxo {
  pub fn outpoint(&self) -> OutPoint {
    OutPoint::new(self.txid, self.vout)
  }
}

impl Display for Utxo {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.outpoint())
  }
}
