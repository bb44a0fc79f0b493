//! Platform-specific shell detection.

use std::path::PathBuf;

/// The shell used to run probe and build commands, with its command flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellInfo {
    /// Shell executable path.
    pub executable: PathBuf,

    /// Flag that makes the shell run the next argument as a command.
    pub command_flag: &'static str,
}

/// Detect the shell to run commands with.
///
/// `$SHELL` is honoured on Unix so tools installed through the user's
/// shell setup resolve the same way as in their terminal; Windows uses
/// `%COMSPEC%`.
pub fn detect_shell() -> ShellInfo {
    detect_shell_with_env(|key| std::env::var(key))
}

/// Detect the shell with a custom env var lookup (for testing).
pub fn detect_shell_with_env<F>(env_fn: F) -> ShellInfo
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    if cfg!(target_os = "windows") {
        ShellInfo {
            executable: env_fn("COMSPEC")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("cmd.exe")),
            command_flag: "/C",
        }
    } else {
        ShellInfo {
            executable: env_fn("SHELL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/bin/sh")),
            command_flag: "-c",
        }
    }
}

/// Environment variables set by common CI services.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
///
/// Used to force non-interactive output in `main()`.
pub fn is_ci() -> bool {
    is_ci_with_env(|key| std::env::var(key))
}

/// CI detection with a custom env var lookup (for testing).
pub fn is_ci_with_env<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    CI_VARS.iter().any(|key| env_fn(key).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::VarError;

    #[test]
    fn detect_shell_returns_info() {
        let info = detect_shell();
        assert!(!info.executable.as_os_str().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn uses_shell_env_var() {
        let info = detect_shell_with_env(|key| match key {
            "SHELL" => Ok("/usr/bin/zsh".to_string()),
            _ => Err(VarError::NotPresent),
        });
        assert_eq!(info.executable, PathBuf::from("/usr/bin/zsh"));
        assert_eq!(info.command_flag, "-c");
    }

    #[cfg(unix)]
    #[test]
    fn falls_back_to_bin_sh() {
        let info = detect_shell_with_env(|_| Err(VarError::NotPresent));
        assert_eq!(info.executable, PathBuf::from("/bin/sh"));
    }

    #[cfg(unix)]
    #[test]
    fn empty_shell_var_falls_back() {
        let info = detect_shell_with_env(|_| Ok(String::new()));
        assert_eq!(info.executable, PathBuf::from("/bin/sh"));
    }

    #[test]
    fn ci_variables_are_detected() {
        for var in CI_VARS {
            assert!(
                is_ci_with_env(|key| if key == *var {
                    Ok("true".to_string())
                } else {
                    Err(VarError::NotPresent)
                }),
                "{var} should mark CI"
            );
        }
    }

    #[test]
    fn no_ci_variables_is_not_ci() {
        assert!(!is_ci_with_env(|_| Err(VarError::NotPresent)));
        assert!(!is_ci_with_env(|key| match key {
            "HOME" => Ok("/home/dev".to_string()),
            _ => Err(VarError::NotPresent),
        }));
    }
}
