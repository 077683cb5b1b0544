use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the input file when no argument is given.
pub const DATA_PATH_ENV: &str = "AVOCADASH_DATA";

pub const DEFAULT_DATA_PATH: &str = "avocado.csv";

/// Startup settings for the dashboard binary.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
        }
    }
}

impl DashboardConfig {
    /// Read from the process arguments and environment.
    pub fn from_env() -> Self {
        Self::resolve(std::env::args_os().skip(1), std::env::var_os(DATA_PATH_ENV))
    }

    /// Data path: first positional argument, else `env_path`, else the default.
    pub fn resolve<I>(args: I, env_path: Option<OsString>) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let data_path = args
            .into_iter()
            .next()
            .or(env_path)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        Self {
            data_path,
            ..Self::default()
        }
    }
}
