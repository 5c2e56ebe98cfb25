use super::*;

#[test]
fn fee_only() {
  CommandBuilder::new("estimate --fee-rate 1")
    .expected_stdout(
      "{
  \"inputs\": 1,
  \"outputs\": 1,
  \"fee\": 111
}
",
    )
    .run();
}

#[test]
fn inscription_and_payment() {
  pretty_assert_eq!(
    CommandBuilder::new(format!(
      "estimate --fee-rate 2 --amount 1000 --inscription {}",
      inscription_id(1)
    ))
    .run_and_deserialize_output::<subcommand::estimate::Output>(),
    subcommand::estimate::Output {
      inputs: 2,
      outputs: 3,
      fee: 530,
    }
  );
}

#[test]
fn inscription_pays_fee() {
  pretty_assert_eq!(
    CommandBuilder::new(format!(
      "estimate --fee-rate 1 --inscription {} --inscription-pays-fee",
      inscription_id(1)
    ))
    .run_and_deserialize_output::<subcommand::estimate::Output>(),
    subcommand::estimate::Output {
      inputs: 1,
      outputs: 1,
      fee: 111,
    }
  );
}

#[test]
fn inscription_pays_fee_without_inscription_is_ignored() {
  pretty_assert_eq!(
    CommandBuilder::new("estimate --fee-rate 1 --inscription-pays-fee")
      .run_and_deserialize_output::<subcommand::estimate::Output>(),
    subcommand::estimate::Output {
      inputs: 1,
      outputs: 1,
      fee: 111,
    }
  );
}

#[test]
fn yaml() {
  CommandBuilder::new("--format yaml estimate --fee-rate 1")
    .expected_stdout("inputs: 1\noutputs: 1\nfee: 111\n\n")
    .run();
}

#[test]
fn fractional_fee_rate_is_rounded() {
  CommandBuilder::new("--format minify estimate --fee-rate 0.5")
    .expected_stdout("{\"inputs\":1,\"outputs\":1,\"fee\":56}\n")
    .run();
}

#[test]
fn zero_fee_rate_is_rejected() {
  CommandBuilder::new("estimate --fee-rate 0")
    .expected_exit_code(2)
    .stderr_regex("error: invalid value '0' for '--fee-rate <FEE_RATE>': .*")
    .run();
}

#[test]
fn malformed_inscription_id_is_rejected() {
  CommandBuilder::new("estimate --fee-rate 1 --inscription foo")
    .expected_exit_code(2)
    .stderr_regex("error: invalid value 'foo' for '--inscription <INSCRIPTION>': .*")
    .run();
}
