use {super::*, clap::ValueEnum};

#[derive(Default, ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Chain {
  #[default]
  #[value(alias("main"))]
  Mainnet,
  #[value(alias("test"))]
  Testnet,
  Signet,
  Regtest,
}

impl Chain {
  pub fn network(self) -> Network {
    self.into()
  }

  pub fn default_esplora_url(self) -> &'static str {
    match self {
      Self::Mainnet => "https://blockstream.info/api",
      Self::Testnet => "https://blockstream.info/testnet/api",
      Self::Signet => "https://mempool.space/signet/api",
      Self::Regtest => "http://127.0.0.1:3002",
    }
  }

  pub(crate) fn address(self, address: Address<NetworkUnchecked>) -> Result<Address> {
    address
      .require_network(self.network())
      .with_context(|| format!("address is not valid on {self}"))
  }
}

impl From<Chain> for Network {
  fn from(chain: Chain) -> Network {
    match chain {
      Chain::Mainnet => Network::Bitcoin,
      Chain::Testnet => Network::Testnet,
      Chain::Signet => Network::Signet,
      Chain::Regtest => Network::Regtest,
    }
  }
}

impl Display for Chain {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Self::Mainnet => "mainnet",
        Self::Regtest => "regtest",
        Self::Signet => "signet",
        Self::Testnet => "testnet",
      }
    )
  }
}

impl FromStr for Chain {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "mainnet" | "main" => Ok(Self::Mainnet),
      "regtest" => Ok(Self::Regtest),
      "signet" => Ok(Self::Signet),
      "testnet" | "test" => Ok(Self::Testnet),
      _ => bail!("invalid chain `{s}`"),
    }
  }
}
