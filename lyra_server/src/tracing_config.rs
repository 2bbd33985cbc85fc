use crate::config::*;

use tracing::Subscriber;
use tracing_core::LevelFilter;
use tracing_subscriber::{
    filter::filter_fn,
    prelude::*,
    registry::LookupSpan,
    Layer,
};

use std::{
    io::Error as IoError,
    path::Path,
};

fn build_target<S>(conf: LogEntry, dir: impl AsRef<Path>) -> Result<Box<dyn Layer<S> + Send + Sync + 'static>, IoError>
    where S: Subscriber + Send + Sync,
          for<'span> S: LookupSpan<'span>,
{
    let layer = match &conf.target
    {
        LogTarget::File { filename } =>
        {
            std::fs::create_dir_all(dir.as_ref())?;
            tracing_subscriber::fmt::layer()
                .with_writer(tracing_appender::rolling::daily(dir, filename))
                .with_ansi(false)
                .boxed()
        }
        LogTarget::Builtin(BuiltinLogTarget::Stdout) =>
        {
            tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
        }
        LogTarget::Builtin(BuiltinLogTarget::Stderr) =>
        {
            tracing_subscriber::fmt::layer().with_writer(std::io::stderr).boxed()
        }
    };

    let level: LevelFilter = conf.level.map_or(LevelFilter::TRACE, Into::into);
    let modules = conf.modules;

    let filter = filter_fn(move |metadata| {
        metadata.level() <= &level &&
            (modules.is_empty() ||
                metadata.module_path().map_or(true, |module| modules.iter().any(|m| module.starts_with(m))))
    });

    Ok(layer.with_filter(filter).boxed())
}

/// Build a subscriber writing to every target in `conf`.
///
/// The caller installs it, usually with `SubscriberInitExt::init`.
pub fn build_subscriber(conf: LoggingConfig) -> Result<impl Subscriber + Send + Sync, IoError>
{
    let mut layers = Vec::new();

    for target in conf.targets
    {
        layers.push(build_target(target, &conf.dir)?);
    }

    // Per-target filters do the real work; the global one only excludes noisy dependencies
    let filter = tracing_subscriber::filter::Targets::new()
        .with_default(LevelFilter::from(conf.default_level.unwrap_or(LogLevel::Trace)))
        .with_targets(conf.module_levels.into_iter().map(|(module, level)| (module, LevelFilter::from(level))));

    Ok(tracing_subscriber::registry()
        .with(filter)
        .with(layers))
}

#[cfg(test)]
mod tests
{
    use super::*;
    use std::{collections::HashMap, path::PathBuf};

    fn file_entry(filename: &str, modules: &[&str]) -> LogEntry
    {
        LogEntry {
            target: LogTarget::File { filename: filename.into() },
            modules: modules.iter().map(|m| m.to_string()).collect(),
            level: Some(LogLevel::Debug),
        }
    }

    fn written_to(dir: &Path, prefix: &str) -> String
    {
        let mut contents = String::new();
        for entry in std::fs::read_dir(dir).unwrap()
        {
            let path = entry.unwrap().path();
            if path.file_name().unwrap().to_string_lossy().starts_with(prefix)
            {
                contents.push_str(&std::fs::read_to_string(&path).unwrap());
            }
        }
        contents
    }

    #[test]
    fn file_targets_are_created_and_filtered()
    {
        let dir: PathBuf = std::env::temp_dir().join(format!("lyra-log-test-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let conf = LoggingConfig {
            dir: dir.clone(),
            default_level: None,
            module_levels: HashMap::new(),
            targets: vec![
                file_entry("everything.log", &[]),
                file_entry("elsewhere.log", &["some_other_crate"]),
            ],
        };

        let subscriber = build_subscriber(conf).unwrap();
        assert!(dir.is_dir());

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("written to the log directory");
            tracing::trace!("below the target level");
        });

        let everything = written_to(&dir, "everything.log");
        assert!(everything.contains("written to the log directory"));
        assert!(!everything.contains("below the target level"));
        assert!(!everything.contains("\x1b["));

        assert!(!written_to(&dir, "elsewhere.log").contains("written to the log directory"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
