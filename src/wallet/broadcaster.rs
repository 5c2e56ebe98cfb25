use super::*;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum BroadcastError {
  #[snafu(display("failed to reach `{url}`"))]
  Request { url: String, source: reqwest::Error },
  #[snafu(display("transaction rejected with status {status}: {message}"))]
  Rejected { status: u16, message: String },
  #[snafu(display("unexpected broadcast response `{response}`"))]
  Response {
    response: String,
    source: bitcoin::hex::HexToArrayError,
  },
}

impl BroadcastError {
  /// Errors worth retrying. A rejection by the node for anything other than
  /// overload or a server fault will not change on resubmission.
  pub fn is_transient(&self) -> bool {
    match self {
      Self::Request { .. } => true,
      Self::Rejected { status, .. } => *status == 429 || *status >= 500,
      Self::Response { .. } => false,
    }
  }
}

pub trait Broadcaster {
  fn broadcast(&self, transaction: &Transaction) -> Result<Txid, BroadcastError>;
}

/// Submits transactions to an Esplora HTTP API.
#[derive(Debug, Clone)]
pub struct Esplora {
  client: reqwest::blocking::Client,
  url: String,
}

impl Esplora {
  pub fn new(url: &str) -> Self {
    Self {
      client: reqwest::blocking::Client::new(),
      url: url.trim_end_matches('/').into(),
    }
  }

  pub fn url(&self) -> &str {
    &self.url
  }
}

impl Broadcaster for Esplora {
  fn broadcast(&self, transaction: &Transaction) -> Result<Txid, BroadcastError> {
    let url = format!("{}/tx", self.url);

    log::info!("broadcasting {} to {url}", transaction.compute_txid());

    let response = self
      .client
      .post(&url)
      .body(hex::encode(consensus::serialize(transaction)))
      .send()
      .snafu_context(Request { url: &url })?;

    let status = response.status();

    let text = response.text().snafu_context(Request { url: &url })?;

    if !status.is_success() {
      return Rejected {
        status: status.as_u16(),
        message: text.trim(),
      }
      .fail();
    }

    text.trim().parse::<Txid>().snafu_context(Response {
      response: text.trim(),
    })
  }
}

/// Submits `transaction` up to `attempts` times, sleeping `delay` between
/// tries. Only transient errors are retried. Resubmitting the same signed
/// transaction cannot double spend, so a broadcast that succeeded without
/// the response arriving is simply accepted again.
pub fn broadcast_with_retry(
  broadcaster: &impl Broadcaster,
  transaction: &Transaction,
  attempts: usize,
  delay: Duration,
) -> Result<Txid, BroadcastError> {
  let attempts = attempts.max(1);
  let mut attempt = 1;

  loop {
    match broadcaster.broadcast(transaction) {
      Ok(txid) => return Ok(txid),
      Err(err) if err.is_transient() && attempt < attempts => {
        log::warn!("broadcast attempt {attempt} of {attempts} failed: {err}");
        thread::sleep(delay);
        attempt += 1;
      }
      Err(err) => return Err(err),
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, std::cell::RefCell};

  struct Scripted {
    calls: RefCell<usize>,
    responses: RefCell<Vec<Result<Txid, BroadcastError>>>,
  }

  impl Scripted {
    fn new(mut responses: Vec<Result<Txid, BroadcastError>>) -> Self {
      responses.reverse();
      Self {
        calls: RefCell::new(0),
        responses: RefCell::new(responses),
      }
    }

    fn calls(&self) -> usize {
      *self.calls.borrow()
    }
  }

  impl Broadcaster for Scripted {
    fn broadcast(&self, _: &Transaction) -> Result<Txid, BroadcastError> {
      *self.calls.borrow_mut() += 1;
      self.responses.borrow_mut().pop().unwrap()
    }
  }

  fn rejected(status: u16) -> Result<Txid, BroadcastError> {
    Err(BroadcastError::Rejected {
      status,
      message: "error".into(),
    })
  }

  fn transaction() -> Transaction {
    Transaction {
      version: Version(2),
      lock_time: LockTime::ZERO,
      input: Vec::new(),
      output: Vec::new(),
    }
  }

  #[test]
  fn transient_errors() {
    assert!(rejected(500).unwrap_err().is_transient());
    assert!(rejected(503).unwrap_err().is_transient());
    assert!(rejected(429).unwrap_err().is_transient());
    assert!(!rejected(400).unwrap_err().is_transient());
    assert!(!rejected(404).unwrap_err().is_transient());
  }

  #[test]
  fn first_success_is_returned() {
    let broadcaster = Scripted::new(vec![Ok(txid(1))]);

    assert_eq!(
      broadcast_with_retry(&broadcaster, &transaction(), 3, Duration::ZERO).unwrap(),
      txid(1)
    );
    assert_eq!(broadcaster.calls(), 1);
  }

  #[test]
  fn transient_errors_are_retried() {
    let broadcaster = Scripted::new(vec![rejected(503), rejected(429), Ok(txid(2))]);

    assert_eq!(
      broadcast_with_retry(&broadcaster, &transaction(), 3, Duration::ZERO).unwrap(),
      txid(2)
    );
    assert_eq!(broadcaster.calls(), 3);
  }

  #[test]
  fn permanent_errors_are_not_retried() {
    let broadcaster = Scripted::new(vec![rejected(400), Ok(txid(1))]);

    assert_matches!(
      broadcast_with_retry(&broadcaster, &transaction(), 3, Duration::ZERO),
      Err(BroadcastError::Rejected { status: 400, .. })
    );
    assert_eq!(broadcaster.calls(), 1);
  }

  #[test]
  fn last_error_is_returned_when_attempts_are_exhausted() {
    let broadcaster = Scripted::new(vec![rejected(500), rejected(502), Ok(txid(1))]);

    assert_matches!(
      broadcast_with_retry(&broadcaster, &transaction(), 2, Duration::ZERO),
      Err(BroadcastError::Rejected { status: 502, .. })
    );
    assert_eq!(broadcaster.calls(), 2);
  }

  #[test]
  fn zero_attempts_tries_once() {
    let broadcaster = Scripted::new(vec![rejected(500)]);

    assert_matches!(
      broadcast_with_retry(&broadcaster, &transaction(), 0, Duration::ZERO),
      Err(BroadcastError::Rejected { status: 500, .. })
    );
    assert_eq!(broadcaster.calls(), 1);
  }

  #[test]
  fn esplora_url_trailing_slash_is_removed() {
    assert_eq!(
      Esplora::new("https://blockstream.info/api/").url(),
      "https://blockstream.info/api"
    );
  }

  #[test]
  fn display() {
    assert_eq!(
      rejected(400).unwrap_err().to_string(),
      "transaction rejected with status 400: error"
    );
  }
}
