//! Docker installation through the linuxmirrors install script.

use anyhow::{anyhow, Context};
use clap::ValueEnum;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::error::Result;
use crate::shell::{execute, CommandOptions, CommandResult};

/// Package mirrors accepted by the install script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mirror {
    Cn,
    Aliyun,
    Azure,
    Tencent,
    Netease,
}

impl Mirror {
    /// Value passed to `--mirror`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mirror::Cn => "cn",
            Mirror::Aliyun => "aliyun",
            Mirror::Azure => "azure",
            Mirror::Tencent => "tencent",
            Mirror::Netease => "netease",
        }
    }
}

impl fmt::Display for Mirror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Downloads the install script.
///
/// # Example
///
/// ```no_run
/// use docker_env_init::docker::ScriptFetcher;
/// use std::time::Duration;
///
/// let fetcher = ScriptFetcher::new(Duration::from_secs(30)).unwrap();
/// let script = fetcher.fetch("https://linuxmirrors.cn/docker.sh").unwrap();
/// ```
pub struct ScriptFetcher {
    /// HTTP client.
    client: reqwest::blocking::Client,
}

impl ScriptFetcher {
    /// Create a fetcher with the specified timeout.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("docker-env-init")
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Fetch the script body from a URL.
    pub fn fetch(&self, url: &str) -> anyhow::Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {} fetching {}", response.status(), url));
        }

        response
            .text()
            .with_context(|| format!("Failed to read response from {}", url))
    }
}

/// Arguments after the script path.
pub fn script_args(mirror: Option<Mirror>) -> Vec<String> {
    match mirror {
        Some(m) => vec!["--mirror".to_string(), m.as_str().to_string()],
        None => Vec::new(),
    }
}

/// Environment for the install script.
pub fn script_env() -> HashMap<String, String> {
    HashMap::from([("DEBIAN_FRONTEND".to_string(), "noninteractive".to_string())])
}

static SCRIPT_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Where the downloaded script is written before running it. Unique per call.
pub fn script_path(dir: &Path) -> PathBuf {
    let n = SCRIPT_COUNTER.fetch_add(1, Ordering::Relaxed);
    dir.join(format!(
        "docker-env-init-install-{}-{}.sh",
        std::process::id(),
        n
    ))
}

/// Write `script` into `work_dir` and run it with `bash`.
///
/// stdio stays attached to the terminal so the script can prompt. The file
/// is removed afterwards whatever the outcome.
pub fn run_install_script(
    script: &str,
    mirror: Option<Mirror>,
    work_dir: &Path,
) -> Result<CommandResult> {
    let path = script_path(work_dir);
    fs::write(&path, script)?;

    let mut args = vec![path.display().to_string()];
    args.extend(script_args(mirror));
    let options = CommandOptions {
        env: script_env(),
        ..Default::default()
    };

    let result = execute("bash", &args, &options);

    if let Err(e) = fs::remove_file(&path) {
        tracing::debug!("Could not remove {}: {}", path.display(), e);
    }

    result
}
