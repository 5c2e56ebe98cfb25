use super::*;

/// What the caller wants to send: optionally an inscription, and any number
/// of sat payments. A single payment goes to the inscription's recipient.
#[derive(Debug, PartialEq, Clone)]
pub struct Transfer {
  amount: Amount,
  fee_rate: FeeRate,
  inscription: Option<InscriptionId>,
  inscription_pays_fee: bool,
  payments: Vec<Amount>,
}

impl Transfer {
  /// `inscription_pays_fee` is a request, and the selector drops it when the
  /// inscription cannot safely pay.
  pub fn new(
    inscription: Option<InscriptionId>,
    amount: Amount,
    fee_rate: FeeRate,
    inscription_pays_fee: bool,
  ) -> Result<Self, Error> {
    if amount > Amount::MAX_MONEY {
      return InvalidInput {
        message: format!("amount {} sat exceeds the money supply", amount.to_sat()),
      }
      .fail();
    }

    Ok(Self {
      amount,
      fee_rate,
      inscription,
      inscription_pays_fee,
      payments: if amount > Amount::ZERO {
        vec![amount]
      } else {
        Vec::new()
      },
    })
  }

  /// Pays each of `payments` in its own output, funded from cardinals.
  pub fn send_many(payments: Vec<Amount>, fee_rate: FeeRate) -> Result<Self, Error> {
    if payments.is_empty() {
      return InvalidInput {
        message: "no payments to send",
      }
      .fail();
    }

    let mut amount = Amount::ZERO;

    for (i, payment) in payments.iter().enumerate() {
      if *payment == Amount::ZERO {
        return InvalidInput {
          message: format!("payment {i} is zero"),
        }
        .fail();
      }

      amount = match amount.checked_add(*payment) {
        Some(amount) if amount <= Amount::MAX_MONEY => amount,
        _ => {
          return InvalidInput {
            message: "payments exceed the money supply",
          }
          .fail()
        }
      };
    }

    Ok(Self {
      amount,
      fee_rate,
      inscription: None,
      inscription_pays_fee: false,
      payments,
    })
  }

  /// Total of all payments.
  pub fn amount(&self) -> Amount {
    self.amount
  }

  pub fn fee_rate(&self) -> FeeRate {
    self.fee_rate
  }

  pub fn inscription(&self) -> Option<InscriptionId> {
    self.inscription
  }

  pub fn inscription_pays_fee(&self) -> bool {
    self.inscription_pays_fee
  }

  pub fn payments(&self) -> &[Amount] {
    &self.payments
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn amount_above_money_supply_is_rejected() {
    assert_matches!(
      Transfer::new(
        None,
        Amount::MAX_MONEY + Amount::ONE_SAT,
        fee_rate(1.0),
        false
      ),
      Err(Error::InvalidInput { .. })
    );
  }

  #[test]
  fn accessors() {
    let transfer = Transfer::new(
      Some(inscription_id(1)),
      Amount::from_sat(2_000),
      fee_rate(3.0),
      true,
    )
    .unwrap();

    assert_eq!(transfer.inscription(), Some(inscription_id(1)));
    assert_eq!(transfer.amount(), Amount::from_sat(2_000));
    assert_eq!(transfer.fee_rate(), fee_rate(3.0));
    assert_eq!(transfer.payments(), [Amount::from_sat(2_000)]);
    assert!(transfer.inscription_pays_fee());
  }

  #[test]
  fn zero_amount_has_no_payments() {
    let transfer = Transfer::new(Some(inscription_id(1)), Amount::ZERO, fee_rate(1.0), false).unwrap();

    assert!(transfer.payments().is_empty());
  }

  #[test]
  fn send_many() {
    let transfer = Transfer::send_many(
      vec![Amount::from_sat(1_000), Amount::from_sat(2_500)],
      fee_rate(2.0),
    )
    .unwrap();

    assert_eq!(transfer.amount(), Amount::from_sat(3_500));
    assert_eq!(
      transfer.payments(),
      [Amount::from_sat(1_000), Amount::from_sat(2_500)]
    );
    assert_eq!(transfer.inscription(), None);
    assert!(!transfer.inscription_pays_fee());
  }

  #[test]
  fn send_many_requires_payments() {
    assert_eq!(
      Transfer::send_many(Vec::new(), fee_rate(1.0)),
      Err(Error::InvalidInput {
        message: "no payments to send".into(),
      })
    );
  }

  #[test]
  fn send_many_rejects_zero_payment() {
    assert_eq!(
      Transfer::send_many(vec![Amount::from_sat(1_000), Amount::ZERO], fee_rate(1.0)),
      Err(Error::InvalidInput {
        message: "payment 1 is zero".into(),
      })
    );
  }

  #[test]
  fn send_many_rejects_total_above_money_supply() {
    assert_matches!(
      Transfer::send_many(vec![Amount::MAX_MONEY, Amount::ONE_SAT], fee_rate(1.0)),
      Err(Error::InvalidInput { .. })
    );
    assert_matches!(
      Transfer::send_many(vec![Amount::MAX, Amount::MAX], fee_rate(1.0)),
      Err(Error::InvalidInput { .. })
    );
  }
}
