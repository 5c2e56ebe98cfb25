//! Coin selection for inscription transfers.
//!
//! `CoinSelector::select` runs a fixed pipeline, one method per concern:
//!
//! - `resolve_fee_payer` drops the request to pay the fee from the
//!   inscription when there is no inscription or when sats are also being
//!   sent.
//! - `classify` splits the snapshot into cardinal UTXOs and the UTXO carrying
//!   the inscription.
//! - `check_inscription_fee_payer` only lets the inscription pay when its sat
//!   is at offset zero and enough value remains above the dust threshold.
//! - `select_inscription` adds the inscription UTXO as the first input.
//! - `select_cardinals` adds cardinal UTXOs to cover the amount and, unless
//!   the inscription pays, the estimated fee.
//! - `reconcile` recomputes the fee with the real input count and splits the
//!   input value between the outputs.
//!
//! The resulting `Selection` always conserves value: the inputs are worth
//! exactly the inscription output, the payment, change and the fee.

use super::*;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Selection {
  pub inputs: Vec<Utxo>,
  pub inscription: Option<InscriptionId>,
  pub inscription_pays_fee: bool,
  #[serde(with = "bitcoin::amount::serde::as_sat")]
  pub inscription_value: Amount,
  #[serde(with = "bitcoin::amount::serde::as_sat")]
  pub amount: Amount,
  #[serde(with = "bitcoin::amount::serde::as_sat")]
  pub change: Amount,
  #[serde(with = "bitcoin::amount::serde::as_sat")]
  pub fee: Amount,
}

impl Selection {
  pub fn input_value(&self) -> Amount {
    self.inputs.iter().map(|utxo| utxo.value).sum()
  }

  pub fn output_value(&self) -> Amount {
    self.inscription_value + self.amount + self.change
  }
}

#[derive(Debug)]
pub(crate) struct CoinSelector<'a> {
  cardinal_input: Amount,
  cardinals: Vec<Utxo>,
  cardinal_balance: Amount,
  estimated_fee: Amount,
  inputs: Vec<Utxo>,
  inscribed: Option<(Utxo, Inscription)>,
  inscription_pays_fee: bool,
  inscriptions: &'a InscriptionIndex,
  outputs: usize,
  policy: Policy,
  transfer: &'a Transfer,
  utxos: &'a [Utxo],
}

impl<'a> CoinSelector<'a> {
  pub(crate) fn new(
    utxos: &'a [Utxo],
    inscriptions: &'a InscriptionIndex,
    transfer: &'a Transfer,
    policy: Policy,
  ) -> Self {
    Self {
      cardinal_input: Amount::ZERO,
      cardinals: Vec::new(),
      cardinal_balance: Amount::ZERO,
      estimated_fee: Amount::ZERO,
      inputs: Vec::new(),
      inscribed: None,
      inscription_pays_fee: transfer.inscription_pays_fee(),
      inscriptions,
      outputs: 0,
      policy,
      transfer,
      utxos,
    }
  }

  pub(crate) fn select(self) -> Result<Selection, Error> {
    self.policy.check()?;

    self
      .resolve_fee_payer()
      .classify()?
      .check_inscription_fee_payer()?
      .select_inscription()
      .select_cardinals()?
      .reconcile()
  }

  fn resolve_fee_payer(mut self) -> Self {
    if self.inscription_pays_fee && self.transfer.amount() > Amount::ZERO {
      tprintln!("sending sats, cardinals pay the fee");
      self.inscription_pays_fee = false;
    }

    if self.inscription_pays_fee && self.transfer.inscription().is_none() {
      tprintln!("no inscription to pay the fee, cardinals pay the fee");
      self.inscription_pays_fee = false;
    }

    self
  }

  fn classify(mut self) -> Result<Self, Error> {
    let classified = classify(self.utxos, self.inscriptions, self.transfer.inscription())?;

    self.cardinals = classified.cardinals;
    self.cardinal_balance = classified.cardinal_balance;
    self.inscribed = classified.inscribed;

    self.estimate_fee()?;

    Ok(self)
  }

  fn estimate_fee(&mut self) -> Result<(), Error> {
    let (inputs, outputs) = FeeModel::estimate_in_out_counts(
      self.transfer.inscription().is_some(),
      self.transfer.payments().len(),
      self.inscription_pays_fee,
    );

    self.outputs = outputs;
    self.estimated_fee = self
      .policy
      .fee_model
      .estimate_fee(inputs, outputs, self.transfer.fee_rate())?;

    log::debug!(
      "estimated fee of {} sat for {inputs} inputs and {outputs} outputs",
      self.estimated_fee.to_sat()
    );

    Ok(())
  }

  fn check_inscription_fee_payer(mut self) -> Result<Self, Error> {
    if !self.inscription_pays_fee {
      return Ok(self);
    }

    let Some((utxo, inscription)) = self.inscribed else {
      return Ok(self);
    };

    if inscription.offset != 0 {
      tprintln!(
        "inscription is at offset {}, cardinals pay the fee",
        inscription.offset
      );
      self.inscription_pays_fee = false;
    } else if utxo.value < self.estimated_fee + self.policy.dust_threshold {
      tprintln!(
        "inscription output of {} cannot pay fee of {} and stay above dust",
        utxo.value,
        self.estimated_fee
      );
      self.inscription_pays_fee = false;
    }

    if !self.inscription_pays_fee {
      self.estimate_fee()?;
    }

    Ok(self)
  }

  fn select_inscription(mut self) -> Self {
    if let Some((utxo, _)) = self.inscribed {
      tprintln!("selected inscription output {utxo} with value {}", utxo.value);
      self.inputs.push(utxo);
    }

    self
  }

  /// If a single cardinal covers the target, the smallest such cardinal is
  /// selected. Otherwise cardinals are added largest first until the target
  /// is met. This keeps the input count low without searching for an
  /// optimal combination.
  fn select_cardinals(mut self) -> Result<Self, Error> {
    let target = if self.inscription_pays_fee {
      self.transfer.amount()
    } else {
      self.transfer.amount() + self.estimated_fee
    };

    if target == Amount::ZERO {
      tprintln!("no cardinal value needed");
      return Ok(self);
    }

    if let Some(utxo) = self.cardinals.iter().rev().find(|utxo| utxo.value >= target) {
      tprintln!("selected cardinal {utxo} worth {} to cover {target}", utxo.value);
      self.inputs.push(*utxo);
      self.cardinal_input = utxo.value;
      return Ok(self);
    }

    for utxo in &self.cardinals {
      self.inputs.push(*utxo);
      self.cardinal_input += utxo.value;

      tprintln!(
        "added cardinal {utxo} worth {}, {} of {target} covered",
        utxo.value,
        self.cardinal_input
      );

      if self.cardinal_input >= target {
        return Ok(self);
      }
    }

    InsufficientBalance {
      needed: target,
      available: self.cardinal_balance,
    }
    .fail()
  }

  fn reconcile(self) -> Result<Selection, Error> {
    let fee = self.policy.fee_model.estimate_fee(
      self.inputs.len(),
      self.outputs,
      self.transfer.fee_rate(),
    )?;

    let amounts = reconciler::reconcile(Reconciliation {
      amount: self.transfer.amount(),
      cardinal_input: self.cardinal_input,
      dust_threshold: self.policy.dust_threshold,
      fee,
      inscription: self.inscribed.map(|(utxo, _)| utxo.value),
      inscription_pays_fee: self.inscription_pays_fee,
    });

    let selection = Selection {
      inputs: self.inputs,
      inscription: self.transfer.inscription(),
      inscription_pays_fee: self.inscription_pays_fee,
      inscription_value: amounts.inscription_value,
      amount: self.transfer.amount(),
      change: amounts.change,
      fee: amounts.fee,
    };

    assert_eq!(
      selection.input_value(),
      selection.output_value() + selection.fee,
      "invariant: selection conserves value",
    );

    log::info!(
      "selected {} inputs worth {} sat: inscription {} sat, payment {} sat, change {} sat, fee {} sat",
      selection.inputs.len(),
      selection.input_value().to_sat(),
      selection.inscription_value.to_sat(),
      selection.amount.to_sat(),
      selection.change.to_sat(),
      selection.fee.to_sat(),
    );

    Ok(selection)
  }
}
