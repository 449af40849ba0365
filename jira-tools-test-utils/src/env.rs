//! Environment variable management for testing
//!
//! Tests that read credentials from the process environment mutate global
//! state. [`EnvVarGuard`] serializes those tests on a process-wide lock, clears
//! the variables it manages, and restores their original values on drop.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard over a set of environment variables
pub struct EnvVarGuard {
  originals: Vec<(String, Option<String>)>,
  _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
  /// Take the environment lock and clear `names` for the guard's lifetime.
  pub fn new(names: &[&str]) -> Self {
    let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let originals = names
      .iter()
      .map(|name| ((*name).to_string(), env::var(name).ok()))
      .collect();

    for name in names {
      unsafe {
        env::remove_var(name);
      }
    }

    Self {
      originals,
      _lock: lock,
    }
  }

  /// Set a variable. Only names passed to [`EnvVarGuard::new`] are restored.
  pub fn set(&self, name: &str, value: &str) {
    unsafe {
      env::set_var(name, value);
    }
  }

  pub fn remove(&self, name: &str) {
    unsafe {
      env::remove_var(name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    for (name, original) in &self.originals {
      match original {
        Some(val) => unsafe {
          env::set_var(name, val);
        },
        None => unsafe {
          env::remove_var(name);
        },
      }
    }
  }
}

/// A dotenv-style file in a temporary directory
pub struct EnvFileGuard {
  temp_dir: TempDir,
  path: PathBuf,
}

impl EnvFileGuard {
  /// Write `content` to `<tempdir>/<file_name>`
  pub fn new(file_name: &str, content: &str) -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(file_name);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).expect("Failed to create env file directory");
    }
    fs::write(&path, content).expect("Failed to write test env file");

    Self { temp_dir, path }
  }

  /// Get the path to the env file
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Get the path to the temporary directory, usable as a fake home
  pub fn dir(&self) -> &Path {
    self.temp_dir.path()
  }
}
