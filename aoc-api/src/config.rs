//! Configuration resolution: session cookie and artifacts location

use crate::cli::Args;
use crate::error::CliError;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

const COOKIE_FILE: &str = "cookie.txt";
const ARTIFACTS_PATH_FILE: &str = "artifactspath.txt";

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the cookie and artifacts-path files
    pub config_dir: PathBuf,
    /// Base URL override for the puzzle website
    pub base_url: Option<String>,
}

impl Config {
    /// Build config from CLI args, falling back to the executable's directory
    pub fn from_args(args: &Args) -> Result<Self, CliError> {
        let config_dir = match &args.config_dir {
            Some(dir) => expand_tilde(dir),
            None => executable_dir()?,
        };

        Ok(Config {
            config_dir,
            base_url: args.base_url.clone(),
        })
    }

    pub fn cookie_path(&self) -> PathBuf {
        self.config_dir.join(COOKIE_FILE)
    }

    pub fn artifacts_path_file(&self) -> PathBuf {
        self.config_dir.join(ARTIFACTS_PATH_FILE)
    }

    /// Persist the session cookie, replacing any stored value
    pub fn store_cookie(&self, value: &str) -> Result<(), CliError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(CliError::Config("Session cookie must not be empty".to_string()));
        }
        fs::create_dir_all(&self.config_dir)?;
        fs::write(self.cookie_path(), value)?;
        tracing::debug!(path = %self.cookie_path().display(), "stored session cookie");
        Ok(())
    }

    /// Read the stored session cookie (zeroized on drop)
    pub fn read_cookie(&self) -> Result<Zeroizing<String>, CliError> {
        let path = self.cookie_path();
        if !path.exists() {
            return Err(CliError::MissingCookie(path));
        }
        let raw = Zeroizing::new(fs::read_to_string(&path)?);
        let cookie = Zeroizing::new(raw.trim().to_string());
        if cookie.is_empty() {
            return Err(CliError::MissingCookie(path));
        }
        Ok(cookie)
    }

    /// Resolve the artifacts root, asking for it on first use
    ///
    /// When no location has been stored yet, the question is written to `prompt` and a
    /// single line is read from `input`. A non-empty answer is persisted and used from
    /// then on.
    pub fn artifacts_root(
        &self,
        input: &mut impl BufRead,
        prompt: &mut impl Write,
    ) -> Result<PathBuf, CliError> {
        let file = self.artifacts_path_file();

        if file.exists() {
            let stored = fs::read_to_string(&file)?;
            let stored = stored.trim();
            if stored.is_empty() {
                return Err(CliError::Config(format!("{} is empty", file.display())));
            }
            return Ok(expand_tilde(Path::new(stored)));
        }

        writeln!(
            prompt,
            "It seems like you haven't configured the location of your AOC artifacts."
        )?;
        writeln!(
            prompt,
            "Please enter an absolute path to where these should be stored and press enter:"
        )?;
        prompt.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        let answer = line.trim();
        if answer.is_empty() {
            return Err(CliError::Config("Input was empty.".to_string()));
        }

        fs::create_dir_all(&self.config_dir)?;
        fs::write(&file, answer)?;
        tracing::info!(path = answer, "stored artifacts location");
        Ok(expand_tilde(Path::new(answer)))
    }
}

/// Prompt user for session token
pub fn prompt_session() -> Result<Zeroizing<String>, CliError> {
    let s = rpassword::prompt_password("Enter AOC session cookie: ")
        .map_err(|e| CliError::Config(format!("Failed to read session: {}", e)))?;
    Ok(Zeroizing::new(s))
}

/// Directory of the running executable
fn executable_dir() -> Result<PathBuf, CliError> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        CliError::Config(format!("Cannot determine directory of {}", exe.display()))
    })
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.get(2..).unwrap_or_default());
    }
    path.to_path_buf()
}
