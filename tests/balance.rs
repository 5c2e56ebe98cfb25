use super::*;

#[test]
fn balance() {
  pretty_assert_eq!(
    CommandBuilder::new("balance --snapshot snapshot.json")
      .snapshot(wallet())
      .run_and_deserialize_output::<subcommand::balance::Output>(),
    subcommand::balance::Output {
      cardinal: 9_000,
      ordinal: 11_500,
      total: 20_500,
    }
  );
}

#[test]
fn empty_wallet() {
  CommandBuilder::new("--format minify balance --snapshot snapshot.json")
    .snapshot(snapshot(&[], &[]))
    .expected_stdout("{\"cardinal\":0,\"ordinal\":0,\"total\":0}\n")
    .run();
}

#[test]
fn missing_snapshot() {
  CommandBuilder::new("balance --snapshot snapshot.json")
    .expected_exit_code(1)
    .stderr_regex("error: I/O error at `snapshot.json`\nbecause: .*\n")
    .run();
}

#[test]
fn malformed_snapshot_key() {
  CommandBuilder::new("balance --snapshot snapshot.json")
    .snapshot(r#"{"utxos": [], "inscriptions": {"foo": []}}"#)
    .expected_exit_code(1)
    .expected_stderr(
      "error: failed to parse snapshot `snapshot.json`\n\
       because: invalid input: invalid outpoint `foo` in inscription index\n",
    )
    .run();
}
