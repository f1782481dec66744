//! Load-and-normalize pipeline shared by every subcommand.
//!
//! A load failure (unreadable file, HTTP error, undecodable sheet) is
//! returned as an error; a sheet that decodes to zero usable rows is a
//! successful, empty [`Dataset`].

use anyhow::Context;
use landscan_core::{AppConfig, FieldAliases};
use landscan_loader::{load_sheet, DatasetSource, SheetClient};
use landscan_normalize::{Dataset, Normalizer, RowPolicy};

use crate::SourceArgs;

/// Built-in aliases, overridden by `LANDSCAN_ALIASES_PATH` when set.
pub(crate) fn field_aliases(config: &AppConfig) -> anyhow::Result<FieldAliases> {
    match &config.aliases_path {
        Some(path) => {
            let aliases = landscan_core::load_aliases(path)
                .with_context(|| format!("failed to load alias file {}", path.display()))?;
            tracing::info!(path = %path.display(), "using alias overrides");
            Ok(aliases)
        }
        None => Ok(FieldAliases::builtin()),
    }
}

/// The command-line flag can only tighten the configured policy.
pub(crate) fn row_policy(config: &AppConfig, args: &SourceArgs) -> RowPolicy {
    RowPolicy {
        require_positive_price: config.require_positive_price || args.require_positive_price,
    }
}

pub(crate) fn resolve_source(
    config: &AppConfig,
    args: &SourceArgs,
) -> anyhow::Result<DatasetSource> {
    if let Some(path) = &args.file {
        return Ok(DatasetSource::File(path.clone()));
    }
    if let Some(url) = &args.url {
        return Ok(DatasetSource::Url(url.clone()));
    }
    let name = args.dataset.as_deref().unwrap_or(&config.default_dataset);
    Ok(DatasetSource::for_dataset(name, config)?)
}

pub(crate) async fn load_dataset(config: &AppConfig, args: &SourceArgs) -> anyhow::Result<Dataset> {
    let normalizer = Normalizer::new(field_aliases(config)?, row_policy(config, args));
    let source = resolve_source(config, args)?;
    let client = SheetClient::from_config(config).context("failed to build sheet client")?;

    let sheet = load_sheet(&source, &client)
        .await
        .with_context(|| format!("load failed for {source}"))?;

    let dataset = normalizer.normalize(&source.label(), sheet.rows(), &sheet);
    if dataset.is_empty() {
        tracing::warn!(
            %source,
            rows_read = dataset.rows_read(),
            "sheet loaded but no rows had usable coordinates"
        );
    }
    Ok(dataset)
}
