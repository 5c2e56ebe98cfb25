use super::*;

pub(crate) fn split(
  utxos: &[Utxo],
  inscriptions: &InscriptionIndex,
  inscription_id: InscriptionId,
  amount: Amount,
  fee_rate: FeeRate,
  policy: &Policy,
) -> Result<Selection, Error> {
  policy.check()?;

  if amount == Amount::ZERO || amount > Amount::MAX_MONEY {
    return InvalidInput {
      message: format!("cannot split {} sat off an inscription", amount.to_sat()),
    }
    .fail();
  }

  let Some((utxo, inscription)) = classify(utxos, inscriptions, Some(inscription_id))?.inscribed
  else {
    return InscriptionUtxoNotFound { inscription_id }.fail();
  };

  // one input, inscription and split outputs
  let fee = policy.fee_model.estimate_fee(1, 2, fee_rate)?;

  let needed = amount + fee + policy.dust_threshold;

  if utxo.value < needed {
    return InsufficientInscriptionValue {
      outpoint: utxo.outpoint(),
      needed,
      available: utxo.value,
    }
    .fail();
  }

  let inscription_value = utxo.value - amount - fee;

  if inscription.offset >= inscription_value.to_sat() {
    return InvalidInput {
      message: format!(
        "inscription {inscription_id} at offset {} would not stay in an output of {} sat",
        inscription.offset,
        inscription_value.to_sat(),
      ),
    }
    .fail();
  }

  log::info!(
    "splitting {} sat off {} leaving {} sat with inscription, fee {} sat",
    amount.to_sat(),
    utxo.outpoint(),
    inscription_value.to_sat(),
    fee.to_sat(),
  );

  Ok(Selection {
    inputs: vec![utxo],
    inscription: Some(inscription_id),
    inscription_pays_fee: true,
    inscription_value,
    amount,
    change: Amount::ZERO,
    fee,
  })
}
