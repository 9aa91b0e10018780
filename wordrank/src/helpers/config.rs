use crate::{args::Args, models::config::Config};
use std::{fs::File, path::Path};
use tracing::debug;
use wordrank_error::{Error, ErrorType, IoError, Result, UsageError};
use wordrank_tokenizer::stopwords::StopWords;

/// Reads a YAML configuration file.
pub fn read(path: &Path) -> Result<Config> {
    let file = File::open(path).map_err(|error| {
        Error::new(
            ErrorType::InputOutput(IoError::SourceUnavailable),
            Some(Box::new(error)),
            Some(format!("configuration '{}'", path.display())),
        )
    })?;

    serde_yaml::from_reader(file).map_err(|error| {
        Error::new(
            ErrorType::InputOutput(IoError::DeserializationError),
            Some(Box::new(error)),
            Some(format!("configuration '{}'", path.display())),
        )
    })
}

/// Builds the settings of a run: defaults, then the configuration file if
/// any, then command line options.
pub fn resolve(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => read(path)?,
        None => Config::default(),
    };

    if let Some(capacity) = args.capacity {
        config.table.capacity = capacity;
    }
    if let Some(max_word_length) = args.max_word_length {
        config.table.max_word_length = max_word_length;
    }
    if let Some(algorithm) = args.algorithm {
        config.service.algorithm = algorithm;
    }
    if args.stopwords.is_some() {
        config.service.stopwords.clone_from(&args.stopwords);
    }
    config.service.exclude.extend(args.exclude.iter().cloned());

    validate(&config)?;
    debug!(?config, "Resolved configuration.");

    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.table.capacity == 0 {
        return Err(Error::new(
            ErrorType::Usage(UsageError::InvalidCapacity),
            None,
            Some("got `0`".to_string()),
        ));
    }
    if config.table.max_word_length == 0 {
        return Err(Error::new(
            ErrorType::Usage(UsageError::InvalidWordLength),
            None,
            Some("got `0`".to_string()),
        ));
    }

    Ok(())
}

/// Collects every excluded word of the configuration.
pub fn stop_words(config: &Config) -> Result<StopWords> {
    let mut stop_words = StopWords::default();
    stop_words.extend(&config.service.exclude);

    if let Some(path) = &config.service.stopwords {
        stop_words.load(path)?;
    }

    Ok(stop_words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::Algorithm;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["wordrank", "book.txt", "5"]).unwrap();
        let config = resolve(&args).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.table.capacity, 2000);
        assert_eq!(config.table.max_word_length, 99);
        assert_eq!(config.service.algorithm, Algorithm::Probing);
    }

    #[test]
    fn test_command_line_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "table:\n  capacity: 50\nservice:\n  algorithm: hashmap\n  exclude: [the]"
        )
        .unwrap();

        let args = Args::try_parse_from([
            "wordrank",
            "book.txt",
            "5",
            "--config",
            file.path().to_str().unwrap(),
            "--capacity",
            "10",
            "--exclude",
            "a",
        ])
        .unwrap();
        let config = resolve(&args).unwrap();

        assert_eq!(config.table.capacity, 10);
        assert_eq!(config.table.max_word_length, 99);
        assert_eq!(config.service.algorithm, Algorithm::Hashmap);
        assert_eq!(config.service.exclude, ["the", "a"]);
    }

    #[test]
    fn test_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "table: [not, a, map]").unwrap();

        assert_eq!(
            read(file.path()).unwrap_err().etype,
            ErrorType::InputOutput(IoError::DeserializationError)
        );
    }

    #[test]
    fn test_zero_sizes_are_refused() {
        let args = Args::try_parse_from([
            "wordrank",
            "book.txt",
            "5",
            "--max-word-length",
            "0",
        ])
        .unwrap();

        assert_eq!(
            resolve(&args).unwrap_err().etype,
            ErrorType::Usage(UsageError::InvalidWordLength)
        );
    }

    #[test]
    fn test_stop_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Of\nand").unwrap();

        let mut config = Config::default();
        config.service.exclude = vec!["THE".to_string()];
        config.service.stopwords = Some(file.path().to_path_buf());

        let stop_words = stop_words(&config).unwrap();
        assert!(stop_words.contains(b"the"));
        assert!(stop_words.contains(b"of"));
        assert!(stop_words.contains(b"and"));
        assert_eq!(stop_words.len(), 3);
    }
}
