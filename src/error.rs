//! Error Types
//!
//! Everything fallible in the crate (settings files, directories, color
//! strings) reports through [`Error`].

use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum Error {
    /// No home directory to derive config/data directories from
    #[snafu(display("Could not determine project directories"))]
    ProjectDirs,

    /// Color string that is not `#rgb` or `#rrggbb`
    #[snafu(display("Invalid color: {input:?}"))]
    Color { input: String },

    /// Settings file or directory access failed
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// Settings file is not valid TOML for the settings schema
    #[snafu(display("Settings parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    #[snafu(display("Settings serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_name_their_cause() {
        let err = Error::Color { input: "#12".into() };
        assert_eq!(err.to_string(), "Invalid color: \"#12\"");

        let err: Error = toml::from_str::<toml::Table>("= broken").expect_err("invalid toml").into();
        assert!(err.to_string().starts_with("Settings parse error"));
    }
}
