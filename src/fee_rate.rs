use super::*;

/// Fee rate in sats per virtual byte. Always finite and strictly positive.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct FeeRate(f64);

impl FromStr for FeeRate {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self::try_from(f64::from_str(s)?)?)
  }
}

impl TryFrom<f64> for FeeRate {
  type Error = wallet::Error;

  fn try_from(rate: f64) -> Result<Self, Self::Error> {
    if !rate.is_finite() || rate <= 0.0 {
      return wallet::InvalidInput {
        message: format!("fee rate must be a positive number of sats/vB: {rate}"),
      }
      .fail();
    }

    Ok(Self(rate))
  }
}

impl Display for FeeRate {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{} sat/vB", self.0)
  }
}

impl FeeRate {
  pub fn n(self) -> f64 {
    self.0
  }

  pub fn fee(self, vsize: usize) -> Amount {
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    Amount::from_sat((self.0 * vsize as f64).round() as u64)
  }
}
