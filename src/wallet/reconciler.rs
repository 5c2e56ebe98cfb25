use super::*;

/// Inputs to the final fee and output calculation, gathered once selection
/// has settled on which UTXOs to spend.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Reconciliation {
  pub(crate) amount: Amount,
  pub(crate) cardinal_input: Amount,
  pub(crate) dust_threshold: Amount,
  pub(crate) fee: Amount,
  pub(crate) inscription: Option<Amount>,
  pub(crate) inscription_pays_fee: bool,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) struct Amounts {
  pub(crate) change: Amount,
  pub(crate) fee: Amount,
  pub(crate) inscription_value: Amount,
}

/// Splits the selected input value between the inscription output, the
/// payment, change, and the fee.
///
/// The fee passed in is computed from the real input count and may exceed
/// what the selection was sized for. Rather than failing, the fee is capped
/// to what the paying side can afford.
pub(crate) fn reconcile(
  Reconciliation {
    amount,
    cardinal_input,
    dust_threshold,
    mut fee,
    inscription,
    inscription_pays_fee,
  }: Reconciliation,
) -> Amounts {
  assert!(
    cardinal_input >= amount,
    "invariant: cardinal inputs cover payment",
  );

  if inscription_pays_fee {
    let Some(inscription) = inscription else {
      panic!("invariant: inscription pays fee only when sending an inscription");
    };

    assert!(
      inscription >= dust_threshold,
      "invariant: inscription paying fee is above dust threshold",
    );

    if inscription < fee + dust_threshold {
      let capped = inscription - dust_threshold;
      log::warn!(
        "fee of {} sat would leave inscription below dust, paying {} sat",
        fee.to_sat(),
        capped.to_sat(),
      );
      fee = capped;
    }

    Amounts {
      change: cardinal_input - amount,
      fee,
      inscription_value: inscription - fee,
    }
  } else {
    let available = cardinal_input - amount;

    if fee > available {
      log::warn!(
        "fee of {} sat exceeds {} sat of selected cardinal value, paying {} sat",
        fee.to_sat(),
        available.to_sat(),
        available.to_sat(),
      );
      fee = available;
    }

    Amounts {
      change: available - fee,
      fee,
      inscription_value: inscription.unwrap_or(Amount::ZERO),
    }
  }
}
