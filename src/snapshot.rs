use super::*;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Raw {
  utxos: Vec<Utxo>,
  #[serde(default)]
  inscriptions: BTreeMap<String, Vec<Inscription>>,
}

/// A wallet's UTXOs and the inscriptions they carry, as exported by an
/// inscription indexer.
///
/// ```json
/// {
///   "utxos": [{ "tx_hash": "<txid>", "tx_output_n": 0, "value": 10000 }],
///   "inscriptions": { "<txid>:0": [{ "id": "<txid>i0", "offset": 0 }] }
/// }
/// ```
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Snapshot {
  pub utxos: Vec<Utxo>,
  pub inscriptions: InscriptionIndex,
}

impl Snapshot {
  pub fn load(path: &Path) -> Result<Self> {
    let json = fs::read_to_string(path).snafu_context::<_, SnafuError>(error::Io { path })?;

    Self::from_json(&json).with_context(|| format!("failed to parse snapshot `{}`", path.display()))
  }

  pub fn from_json(json: &str) -> Result<Self> {
    let raw = serde_json::from_str::<Raw>(json)?;

    for utxo in &raw.utxos {
      if utxo.value > Amount::MAX_MONEY {
        return Err(
          wallet::InvalidInput {
            message: format!(
              "UTXO {} value of {} sat exceeds the money supply",
              utxo.outpoint(),
              utxo.value.to_sat()
            ),
          }
          .build()
          .into(),
        );
      }
    }

    let mut inscriptions = InscriptionIndex::new();

    for (key, hosted) in raw.inscriptions {
      let Ok(outpoint) = key.parse::<OutPoint>() else {
        return Err(
          wallet::InvalidInput {
            message: format!("invalid outpoint `{key}` in inscription index"),
          }
          .build()
          .into(),
        );
      };

      inscriptions.insert(outpoint, hosted);
    }

    Ok(Self {
      utxos: raw.utxos,
      inscriptions,
    })
  }

  pub fn cardinal_balance(&self) -> Result<Amount, wallet::Error> {
    wallet::cardinal_balance(&self.utxos, &self.inscriptions)
  }
}
