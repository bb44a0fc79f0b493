//! Output verbosity.

/// How much of a run is shown on the terminal.
///
/// Results (saved reports, conflicts, errors) and plain messages are shown in
/// every mode; the mode only decides what surrounds them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Progress plus the raw output of `docker build`.
    Verbose,
    /// Header, environment summary and spinners.
    #[default]
    Normal,
    /// Results only.
    Quiet,
}

impl OutputMode {
    /// Pick the mode from the global `--quiet` / `--verbose` flags.
    ///
    /// `--quiet` wins when both are given.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, true) => Self::Verbose,
            (false, false) => Self::Normal,
        }
    }

    /// Header, spinners and the environment summary.
    pub fn shows_progress(self) -> bool {
        self != Self::Quiet
    }

    /// Lines printed by commands run under a spinner.
    pub fn streams_commands(self) -> bool {
        self == Self::Verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(OutputMode::from_flags(true, true), OutputMode::Quiet);
        assert_eq!(OutputMode::from_flags(false, true), OutputMode::Verbose);
        assert_eq!(OutputMode::from_flags(false, false), OutputMode::Normal);
    }

    #[test]
    fn quiet_hides_progress() {
        assert!(OutputMode::Verbose.shows_progress());
        assert!(OutputMode::Normal.shows_progress());
        assert!(!OutputMode::Quiet.shows_progress());
    }

    #[test]
    fn only_verbose_streams_commands() {
        assert!(OutputMode::Verbose.streams_commands());
        assert!(!OutputMode::Normal.streams_commands());
        assert!(!OutputMode::Quiet.streams_commands());
    }
}
