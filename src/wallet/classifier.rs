use super::*;

/// A wallet snapshot split into cardinal UTXOs, which carry no inscriptions
/// and can be spent freely, and the UTXO carrying the inscription being sent.
#[derive(Debug, PartialEq)]
pub struct Classified {
  /// Sorted by value, largest first.
  pub cardinals: Vec<Utxo>,
  pub cardinal_balance: Amount,
  pub inscribed: Option<(Utxo, Inscription)>,
  pub ordinal_balance: Amount,
}

/// Fails if an outpoint appears twice, if the UTXOs are together worth more
/// than the money supply, or if the target inscription is not hosted by
/// exactly one UTXO.
pub fn classify(
  utxos: &[Utxo],
  inscriptions: &InscriptionIndex,
  target: Option<InscriptionId>,
) -> Result<Classified, Error> {
  let mut cardinals = Vec::new();
  let mut inscribed: Option<(Utxo, Inscription)> = None;
  let mut ordinal_balance = Amount::ZERO;
  let mut outpoints = BTreeSet::new();
  let mut total = Amount::ZERO;

  for utxo in utxos {
    let outpoint = utxo.outpoint();

    if !outpoints.insert(outpoint) {
      return InvalidInput {
        message: format!("duplicate UTXO {outpoint}"),
      }
      .fail();
    }

    total = match total.checked_add(utxo.value) {
      Some(total) if total <= Amount::MAX_MONEY => total,
      _ => {
        return InvalidInput {
          message: "UTXO values exceed the money supply",
        }
        .fail()
      }
    };

    let Some(hosted) = inscriptions.get(&outpoint).filter(|hosted| !hosted.is_empty()) else {
      cardinals.push(*utxo);
      continue;
    };

    ordinal_balance += utxo.value;

    let Some(inscription_id) = target else {
      continue;
    };

    if let Some(inscription) = hosted.iter().find(|inscription| inscription.id == inscription_id) {
      if let Some((first, _)) = inscribed {
        return DuplicateInscriptionHost {
          inscription_id,
          first: first.outpoint(),
          second: outpoint,
        }
        .fail();
      }

      if hosted.len() > 1 {
        return UnsupportedMultiInscriptionUtxo {
          inscription_id,
          outpoint,
          inscription_ids: hosted
            .iter()
            .map(|inscription| inscription.id)
            .collect::<Vec<InscriptionId>>(),
        }
        .fail();
      }

      inscribed = Some((*utxo, *inscription));
    }
  }

  if let Some(inscription_id) = target {
    if inscribed.is_none() {
      return InscriptionUtxoNotFound { inscription_id }.fail();
    }
  }

  cardinals.sort_by(|a, b| b.value.cmp(&a.value));

  let cardinal_balance = total - ordinal_balance;

  tprintln!(
    "classified {} cardinals worth {cardinal_balance} and {ordinal_balance} of inscribed value",
    cardinals.len()
  );

  Ok(Classified {
    cardinals,
    cardinal_balance,
    inscribed,
    ordinal_balance,
  })
}
