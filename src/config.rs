use super::*;

#[derive(Deserialize, Default, PartialEq, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
  pub chain: Option<Chain>,
  pub dust_threshold: Option<u64>,
  pub esplora_url: Option<String>,
  pub input_vbytes: Option<usize>,
  pub output_vbytes: Option<usize>,
}
