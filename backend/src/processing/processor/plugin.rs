use crate::model::{CleanupConfig, MovieJobConfig, SeriesJobConfig};
use crate::processing::processor::{cleanup_movies, cleanup_series, generate_movies, generate_series, scan_vods};
use crate::repository::VodSource;
use crate::utils::{log_banner, log_separator, StepMeasure};
use log::{error, info};
use shared::error::{PluginError, PluginErrorKind};
use shared::model::{ActionResult, PluginAction, PluginSettingsDto};

async fn dispatch<S: VodSource>(source: &S, action: PluginAction, settings: &PluginSettingsDto) -> Result<ActionResult, PluginError> {
    match action {
        PluginAction::ScanAllVods => scan_vods(source).await,
        PluginAction::GenerateMovies => {
            let cfg = MovieJobConfig::try_from(settings)?;
            generate_movies(source, &cfg).await
        }
        PluginAction::GenerateSeries => {
            let cfg = SeriesJobConfig::try_from(settings)?;
            generate_series(source, &cfg).await
        }
        PluginAction::CleanupMovies => cleanup_movies(&CleanupConfig::movies(settings)).await,
        PluginAction::CleanupSeries => cleanup_series(&CleanupConfig::series(settings)).await,
    }
}

fn log_error(err: &PluginError) {
    if err.kind == PluginErrorKind::Config {
        log_separator('!');
        error!("CONFIGURATION ERROR!");
        error!("{err}");
        log_separator('!');
    } else {
        error!("{err}");
    }
}

/// Runs one action against `source` and turns every failure into an error result.
pub async fn run_action<S: VodSource>(source: &S, action: PluginAction, settings: &PluginSettingsDto) -> ActionResult {
    log_banner(action.label());
    let mut measure = StepMeasure::new(action.id());
    let result = dispatch(source, action, settings).await;
    measure.stop();
    match result {
        Ok(result) => {
            info!("{}", result.message);
            result
        }
        Err(err) => {
            log_error(&err);
            err.into()
        }
    }
}

/// Like [`run_action`], for an action id sent by the host.
pub async fn run_action_by_id<S: VodSource>(source: &S, action_id: &str, settings: &PluginSettingsDto) -> ActionResult {
    match action_id.parse::<PluginAction>() {
        Ok(action) => run_action(source, action, settings).await,
        Err(err) => {
            log_error(&err);
            err.into()
        }
    }
}
