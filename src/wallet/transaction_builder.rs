//! Encodes a `Selection` as an unsigned transaction.
//!
//! Outputs are laid out in a fixed order: the inscription output, the
//! payments, and finally change. Since the inscription UTXO is the first input
//! and its inscription sits at offset zero when it pays the fee, the
//! inscription is carried into the first output. Change is omitted when it is
//! zero.
//!
//! `build_transaction` checks the encoded transaction against the selection it
//! was built from, and panics if they disagree.

use super::*;

#[derive(Debug, PartialEq)]
pub struct TransactionBuilder {
  change: ScriptBuf,
  inscription_recipient: Option<ScriptBuf>,
  payments: Vec<(ScriptBuf, Amount)>,
  selection: Selection,
}

impl TransactionBuilder {
  /// Sends the inscription and the selected amount, if any, to `recipient`.
  pub fn new(selection: Selection, recipient: &Address, change: &Address) -> Self {
    let recipient = recipient.script_pubkey();

    Self {
      change: change.script_pubkey(),
      inscription_recipient: selection.inscription.map(|_| recipient.clone()),
      payments: if selection.amount > Amount::ZERO {
        vec![(recipient, selection.amount)]
      } else {
        Vec::new()
      },
      selection,
    }
  }

  /// Pays each recipient in its own output. The payments must add up to the
  /// selected amount.
  pub fn send_many(
    selection: Selection,
    payments: &[(Address, Amount)],
    change: &Address,
  ) -> Result<Self, Error> {
    if let Some(inscription) = selection.inscription {
      return InvalidInput {
        message: format!("cannot pay several recipients while sending inscription {inscription}"),
      }
      .fail();
    }

    if let Some((address, _)) = payments.iter().find(|(_, amount)| *amount == Amount::ZERO) {
      return InvalidInput {
        message: format!("payment to {address} is zero"),
      }
      .fail();
    }

    let total = payments
      .iter()
      .try_fold(Amount::ZERO, |total, (_, amount)| total.checked_add(*amount));

    if total != Some(selection.amount) {
      return InvalidInput {
        message: format!(
          "payments do not add up to selected amount of {} sat",
          selection.amount.to_sat()
        ),
      }
      .fail();
    }

    Ok(Self {
      change: change.script_pubkey(),
      inscription_recipient: None,
      payments: payments
        .iter()
        .map(|(address, amount)| (address.script_pubkey(), *amount))
        .collect(),
      selection,
    })
  }

  pub fn selection(&self) -> &Selection {
    &self.selection
  }

  pub fn build_transaction(&self) -> Transaction {
    let mut output = Vec::new();

    if let Some(script_pubkey) = &self.inscription_recipient {
      output.push(TxOut {
        value: self.selection.inscription_value,
        script_pubkey: script_pubkey.clone(),
      });
    }

    for (script_pubkey, value) in &self.payments {
      output.push(TxOut {
        value: *value,
        script_pubkey: script_pubkey.clone(),
      });
    }

    if self.selection.change > Amount::ZERO {
      output.push(TxOut {
        value: self.selection.change,
        script_pubkey: self.change.clone(),
      });
    }

    let transaction = Transaction {
      version: Version(2),
      lock_time: LockTime::ZERO,
      input: self
        .selection
        .inputs
        .iter()
        .map(|utxo| TxIn {
          previous_output: utxo.outpoint(),
          script_sig: ScriptBuf::new(),
          sequence: Sequence::ENABLE_RBF_NO_LOCKTIME,
          witness: Witness::new(),
        })
        .collect(),
      output,
    };

    let output_value = transaction
      .output
      .iter()
      .map(|tx_out| tx_out.value)
      .sum::<Amount>();

    assert_eq!(
      self.selection.input_value() - output_value,
      self.selection.fee,
      "invariant: fee is input value minus output value",
    );

    if let Some(inscription) = self.selection.inscription {
      assert_eq!(
        transaction.output.first().map(|tx_out| &tx_out.script_pubkey),
        self.inscription_recipient.as_ref(),
        "invariant: inscription {inscription} is sent in first output",
      );
    }

    assert!(
      !transaction.input.is_empty(),
      "invariant: transaction has inputs"
    );

    log::debug!(
      "built transaction {} with {} inputs and {} outputs",
      transaction.compute_txid(),
      transaction.input.len(),
      transaction.output.len(),
    );

    transaction
  }

  /// Wraps the transaction in a PSBT ready for an external signer. Every
  /// input is assumed to be locked to `sender`.
  pub fn build_psbt(&self, sender: &Address) -> Result<Psbt> {
    let mut psbt = Psbt::from_unsigned_tx(self.build_transaction())
      .context("failed to create PSBT from unsigned transaction")?;

    let script_pubkey = sender.script_pubkey();

    for (input, utxo) in psbt.inputs.iter_mut().zip(&self.selection.inputs) {
      input.witness_utxo = Some(TxOut {
        value: utxo.value,
        script_pubkey: script_pubkey.clone(),
      });
    }

    Ok(psbt)
  }
}
