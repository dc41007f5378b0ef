use std::path::PathBuf;

pub struct Config {
    /// Location of the JSON client list.
    pub data_path: PathBuf,
    /// Suppresses headers and summaries.
    ///
    /// `0` prints everything, `1` drops decoration, `2` prints bare results only.
    pub quiet: u8,
    /// Emits results as JSON instead of formatted text.
    pub json: bool,
}

impl Config {
    pub const DEFAULT_DATA_PATH: &'static str = "data/clients.json";
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(Self::DEFAULT_DATA_PATH),
            quiet: 0,
            json: false,
        }
    }
}
