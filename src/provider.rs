use std::path::Path;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use anyhow::Result;

use crate::config::{DataSource, ProviderConfig};
use crate::dataset_file::FileProvider;
use crate::export;
use crate::mock_data::MockProvider;
use crate::state::{Country, Delta, ProviderCommand};

/// Source of the country → league → season → match hierarchy.
///
/// Calls block for as long as the source needs; the UI only ever calls this
/// from the loader thread.
pub trait DataProvider: Send {
    fn fetch_countries(&self) -> Result<Vec<Country>>;

    fn name(&self) -> &'static str;
}

pub fn provider_from_config(cfg: &ProviderConfig) -> Box<dyn DataProvider> {
    match cfg.source {
        DataSource::Mock => Box::new(MockProvider::new(cfg.load_delay, cfg.mock_seed)),
        DataSource::File => Box::new(FileProvider::new(cfg.dataset_path.clone())),
    }
}

pub fn spawn_loader(
    provider: Box<dyn DataProvider>,
    tx: Sender<Delta>,
    cmd_rx: Receiver<ProviderCommand>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let _ = tx.send(Delta::Log(format!(
            "[INFO] Data source: {}",
            provider.name()
        )));

        while let Ok(cmd) = cmd_rx.recv() {
            let delta = handle_command(provider.as_ref(), cmd);
            if tx.send(delta).is_err() {
                break;
            }
        }
    })
}

fn handle_command(provider: &dyn DataProvider, cmd: ProviderCommand) -> Delta {
    match cmd {
        ProviderCommand::LoadCountries { request } => {
            let result = provider
                .fetch_countries()
                .map_err(|err| format!("{err:#}"));
            Delta::CountriesLoaded { request, result }
        }
        ProviderCommand::ExportMatches {
            path,
            season,
            matches,
        } => match export::export_matches(Path::new(&path), &season, &matches) {
            Ok(rows) => Delta::ExportFinished { path, rows },
            Err(err) => Delta::Log(format!("[WARN] Export failed: {err:#}")),
        },
    }
}
