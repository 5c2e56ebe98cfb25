#![allow(clippy::too_many_arguments, clippy::result_large_err)]
#![deny(
  clippy::cast_lossless,
  clippy::cast_possible_truncation,
  clippy::cast_possible_wrap,
  clippy::cast_sign_loss
)]

//! Inscription-aware coin selection.
//!
//! Given a wallet snapshot, a list of UTXOs and an index of the inscriptions
//! they carry, `wallet::select_utxos` decides which outputs to spend in order
//! to send an inscription, a plain amount of sats, or both, and how the value
//! of the inputs is split between the inscription output, the payment output,
//! change and the fee.
//!
//! Encoding and broadcasting the resulting transaction are handled by
//! `wallet::TransactionBuilder` and the `wallet::Broadcaster` trait.

use {
  self::{
    arguments::Arguments,
    error::{ResultExt, SnafuError},
    subcommand::{OutputFormat, Subcommand, SubcommandResult},
  },
  anyhow::{anyhow, bail, Context, Error},
  bitcoin::{
    absolute::LockTime,
    address::{Address, NetworkUnchecked},
    consensus,
    psbt::Psbt,
    transaction::Version,
    Amount, Network, OutPoint, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Txid, Witness,
  },
  clap::{ArgGroup, Parser},
  serde::{Deserialize, Serialize},
  serde_with::{DeserializeFromStr, SerializeDisplay},
  snafu::{Backtrace, Snafu},
  std::{
    collections::{BTreeMap, BTreeSet},
    env,
    fmt::{self, Display, Formatter},
    fs::{self, File},
    io,
    path::{Path, PathBuf},
    process,
    str::FromStr,
    thread,
    time::Duration,
  },
};

pub use self::{
  chain::Chain,
  config::Config,
  fee_rate::FeeRate,
  inscription::{Inscription, InscriptionIndex},
  inscription_id::InscriptionId,
  options::Options,
  settings::Settings,
  snapshot::Snapshot,
  utxo::Utxo,
};


#[cfg(test)]
use self::test::*;

pub mod arguments;
pub mod chain;
mod config;
mod error;
mod fee_rate;
mod inscription;
pub mod inscription_id;
mod macros;
pub mod options;
pub mod settings;
pub mod snapshot;
pub mod subcommand;
mod utxo;
pub mod wallet;

type Result<T = (), E = Error> = std::result::Result<T, E>;
type SnafuResult<T = (), E = SnafuError> = std::result::Result<T, E>;

pub fn main() {
  env_logger::init();

  let args = Arguments::parse();

  let format = args.options.format;

  match args.run() {
    Err(err) => {
      eprintln!("error: {err}");

      if let SnafuError::Anyhow { err } = err {
        for cause in err.chain().skip(1) {
          eprintln!("because: {cause}");
        }

        if env::var_os("RUST_BACKTRACE")
          .map(|val| val == "1")
          .unwrap_or_default()
        {
          eprintln!("{}", err.backtrace());
        }
      } else if let Some(backtrace) = snafu::ErrorCompat::backtrace(&err) {
        if env::var_os("RUST_BACKTRACE")
          .map(|val| val == "1")
          .unwrap_or_default()
        {
          eprintln!("{backtrace}");
        }
      }

      process::exit(1);
    }
    Ok(output) => output.print(format.unwrap_or_default()),
  }
}
