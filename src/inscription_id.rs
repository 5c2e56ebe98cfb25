use super::*;

/// Identifies an inscription by the reveal transaction that created it and
/// the position of the inscription within that transaction, written
/// `<TXID>i<INDEX>`.
#[derive(
  Debug, PartialEq, Copy, Clone, Hash, Eq, PartialOrd, Ord, DeserializeFromStr, SerializeDisplay,
)]
pub struct InscriptionId {
  pub txid: Txid,
  pub index: u32,
}

impl Display for InscriptionId {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}i{}", self.txid, self.index)
  }
}

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)))]
pub enum ParseError {
  #[snafu(display("invalid character: '{character}'"))]
  Character { character: char },
  #[snafu(display("invalid length: {length}"))]
  Length { length: usize },
  #[snafu(display("invalid separator: `{separator}`"))]
  Separator { separator: char },
  #[snafu(display("invalid txid: {source}"))]
  InvalidTxid { source: bitcoin::hex::HexToArrayError },
  #[snafu(display("invalid index: {source}"))]
  InvalidIndex { source: std::num::ParseIntError },
}

impl FromStr for InscriptionId {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    const TXID_LEN: usize = 64;

    if let Some(character) = s.chars().find(|c| !c.is_ascii()) {
      return Character { character }.fail();
    }

    if s.len() < TXID_LEN + 2 {
      return Length { length: s.len() }.fail();
    }

    let (txid, rest) = s.split_at(TXID_LEN);

    let separator = rest.chars().next().unwrap_or_default();

    if separator != 'i' {
      return Separator { separator }.fail();
    }

    Ok(Self {
      txid: snafu::ResultExt::context(txid.parse(), InvalidTxid)?,
      index: snafu::ResultExt::context(rest[1..].parse(), InvalidIndex)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    assert_eq!(
      inscription_id(1).to_string(),
      "1111111111111111111111111111111111111111111111111111111111111111i1",
    );
    assert_eq!(
      InscriptionId {
        txid: txid(2),
        index: u32::MAX,
      }
      .to_string(),
      "2222222222222222222222222222222222222222222222222222222222222222i4294967295",
    );
  }

  #[test]
  fn from_str() {
    assert_eq!(
      "1111111111111111111111111111111111111111111111111111111111111111i1"
        .parse::<InscriptionId>()
        .unwrap(),
      inscription_id(1),
    );
    assert_eq!(
      "3333333333333333333333333333333333333333333333333333333333333333i0"
        .parse::<InscriptionId>()
        .unwrap(),
      InscriptionId {
        txid: txid(3),
        index: 0,
      },
    );
  }

  #[test]
  fn from_str_errors() {
    assert_matches!(
      "→".parse::<InscriptionId>(),
      Err(ParseError::Character { character: '→' }),
    );
    assert_matches!(
      "foo".parse::<InscriptionId>(),
      Err(ParseError::Length { length: 3 }),
    );
    assert_matches!(
      "0000000000000000000000000000000000000000000000000000000000000000:0".parse::<InscriptionId>(),
      Err(ParseError::Separator { separator: ':' }),
    );
    assert_matches!(
      "0000000000000000000000000000000000000000000000000000000000000000ifoo"
        .parse::<InscriptionId>(),
      Err(ParseError::InvalidIndex { .. }),
    );
    assert_matches!(
      "x000000000000000000000000000000000000000000000000000000000000000i0".parse::<InscriptionId>(),
      Err(ParseError::InvalidTxid { .. }),
    );
  }

  #[test]
  fn serde_uses_string_form() {
    let id = inscription_id(4);

    let json = serde_json::to_string(&id).unwrap();

    assert_eq!(
      json,
      "\"4444444444444444444444444444444444444444444444444444444444444444i4\""
    );
    assert_eq!(serde_json::from_str::<InscriptionId>(&json).unwrap(), id);
  }
}
