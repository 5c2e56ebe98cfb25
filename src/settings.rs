use super::*;

#[derive(Default, Debug, Clone)]
pub struct Settings {
  pub(crate) chain: Chain,
  pub(crate) config: Config,
  pub(crate) options: Options,
}

impl Settings {
  pub(crate) fn load(options: Options) -> SnafuResult<Self> {
    let path = match &options.config {
      Some(path) => Some(path.clone()),
      None => options
        .config_dir
        .as_ref()
        .map(|dir| dir.join("ordsend.yaml"))
        .filter(|path| path.exists()),
    };

    let config = match path {
      Some(path) => {
        let file = File::open(&path).snafu_context(error::Io { path: &path })?;
        serde_yaml::from_reader(file)
          .with_context(|| format!("failed to deserialize config file `{}`", path.display()))?
      }
      None => Config::default(),
    };

    Self::new(options, config)
  }

  pub(crate) fn new(options: Options, config: Config) -> SnafuResult<Self> {
    let chain = Self::setting_typed(
      options
        .signet
        .then_some(Chain::Signet)
        .or(options.regtest.then_some(Chain::Regtest))
        .or(options.testnet.then_some(Chain::Testnet))
        .or(options.chain_argument),
      Some("CHAIN"),
      config.chain,
      Chain::Mainnet,
    )?;

    Ok(Self {
      chain,
      config,
      options,
    })
  }

  pub fn chain(&self) -> Chain {
    self.chain
  }

  pub fn esplora_url(&self) -> SnafuResult<String> {
    Ok(
      Self::setting(
        self.options.esplora_url.as_deref(),
        Some("ESPLORA_URL"),
        self.config.esplora_url.as_deref(),
        Some(self.chain.default_esplora_url()),
      )?
      .unwrap_or_else(|| self.chain.default_esplora_url().into()),
    )
  }

  pub fn policy(&self) -> SnafuResult<wallet::Policy> {
    let input_vbytes = Self::setting_typed(
      None,
      Some("INPUT_VBYTES"),
      self.config.input_vbytes,
      wallet::FeeModel::INPUT_VBYTES,
    )?;

    let output_vbytes = Self::setting_typed(
      None,
      Some("OUTPUT_VBYTES"),
      self.config.output_vbytes,
      wallet::FeeModel::OUTPUT_VBYTES,
    )?;

    let dust_threshold = Self::setting_typed(
      self.options.dust_threshold,
      Some("DUST_THRESHOLD"),
      self.config.dust_threshold,
      wallet::Policy::DUST_THRESHOLD.to_sat(),
    )?;

    let policy = wallet::Policy {
      fee_model: wallet::FeeModel {
        input_vbytes,
        output_vbytes,
      },
      dust_threshold: Amount::from_sat(dust_threshold),
    };

    policy.check().map_err(Error::from)?;

    Ok(policy)
  }

  fn setting_typed<T>(
    arg_value: Option<T>,
    env_key: Option<&str>,
    config_value: Option<T>,
    default_value: T,
  ) -> SnafuResult<T>
  where
    T: FromStr,
    T::Err: Display,
  {
    if let Some(arg_value) = arg_value {
      return Ok(arg_value);
    }

    if let Some(env_value) = Self::env(env_key)? {
      return Ok(
        env_value
          .parse()
          .map_err(|err| anyhow!("failed to parse ORDSEND_{}: {err}", env_key.unwrap_or_default()))?,
      );
    }

    if let Some(config_value) = config_value {
      return Ok(config_value);
    }

    Ok(default_value)
  }

  fn setting(
    arg_value: Option<&str>,
    env_key: Option<&str>,
    config_value: Option<&str>,
    default_value: Option<&str>,
  ) -> SnafuResult<Option<String>> {
    if let Some(arg_value) = arg_value {
      return Ok(Some(arg_value.into()));
    }

    if let Some(env_value) = Self::env(env_key)? {
      return Ok(Some(env_value));
    }

    Ok(config_value.or(default_value).map(str::to_string))
  }

  fn env(key: Option<&str>) -> SnafuResult<Option<String>> {
    let Some(key) = key else {
      return Ok(None);
    };

    let variable = format!("ORDSEND_{key}");

    match env::var(&variable) {
      Ok(value) => Ok(Some(value)),
      Err(env::VarError::NotUnicode(value)) => {
        Err(error::EnvVarUnicode { value, variable }.build())
      }
      Err(env::VarError::NotPresent) => Ok(None),
    }
  }
}
