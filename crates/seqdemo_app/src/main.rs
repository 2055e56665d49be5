#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::sync::Arc;

use gpui::*;
use tracing::{error, info, warn};

use seqdemo_connect::ConnectProvider;
use seqdemo_core::{ConnectConfig, DemoError};
use seqdemo_core::config::{ACCESS_KEY_ENV, resolve_access_key};
use seqdemo_core::logging;
use seqdemo_ui::actions::CloseConnectPrompt;
use seqdemo_ui::globals::{AppConfig, AppOnboarding, AppRuntime, AppSession};
use seqdemo_ui::workspace::DemoWorkspace;

const VERSION: &str = env!("CARGO_PKG_VERSION");

actions!(seqdemo, [Quit]);

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

/// Load the config, falling back to defaults when the file is unreadable.
fn load_config() -> ConnectConfig {
    match ConnectConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Config load failed, using defaults: {e:#}");
            ConnectConfig {
                project_access_key: resolve_access_key(std::env::var(ACCESS_KEY_ENV).ok()),
                ..ConnectConfig::default()
            }
        }
    }
}

/// Build the wallet session. A config that fails validation is replaced by
/// the defaults so the demo still starts.
fn build_provider(config: &ConnectConfig) -> anyhow::Result<Arc<ConnectProvider>> {
    match ConnectProvider::new(config.clone()) {
        Ok(provider) => Ok(Arc::new(provider)),
        Err(e) => {
            match e.downcast_ref::<DemoError>() {
                Some(err) => error!(
                    category = ?err.category(),
                    "{}; falling back to defaults",
                    err.user_message()
                ),
                None => error!("Connect config rejected, falling back to defaults: {e:#}"),
            }
            let fallback = ConnectConfig {
                project_access_key: config.project_access_key.clone(),
                ..ConnectConfig::default()
            };
            Ok(Arc::new(ConnectProvider::new(fallback)?))
        }
    }
}

fn init_services(cx: &mut App, runtime: tokio::runtime::Handle) -> anyhow::Result<()> {
    let config = load_config();
    info!(
        "Config loaded (app_name={}, chains={:?}, default_chain={})",
        config.app_name, config.chain_ids, config.default_chain_id
    );

    let provider = build_provider(&config)?;
    info!("Connect provider ready ({} chains)", provider.registry().len());

    cx.set_global(AppSession(provider.clone()));
    cx.set_global(AppOnboarding(provider));
    cx.set_global(AppRuntime(runtime));
    cx.set_global(AppConfig(config));
    Ok(())
}

// ---------------------------------------------------------------------------
// Actions and window
// ---------------------------------------------------------------------------

fn register_actions(cx: &mut App) {
    #[cfg(target_os = "macos")]
    cx.bind_keys([
        KeyBinding::new("cmd-q", Quit, None),
        KeyBinding::new("escape", CloseConnectPrompt, None),
    ]);
    #[cfg(not(target_os = "macos"))]
    cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("escape", CloseConnectPrompt, None),
    ]);

    cx.on_action(|_: &Quit, cx: &mut App| {
        info!("Quit action triggered");
        cx.quit();
    });
}

fn window_options(cx: &App) -> WindowOptions {
    WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None,
            size(px(1180.0), px(820.0)),
            cx,
        ))),
        titlebar: Some(gpui_component::TitleBar::title_bar_options()),
        ..Default::default()
    }
}

fn open_main_window(cx: &mut App) -> anyhow::Result<()> {
    cx.open_window(window_options(cx), |window, cx| {
        let workspace = cx.new(|cx| DemoWorkspace::new(window, cx));
        cx.new(|cx| gpui_component::Root::new(workspace.clone(), window, cx))
    })?;

    info!("seqdemo v{VERSION} window opened");
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    let _log_guard = logging::init_logging().expect("Failed to initialize logging");
    info!("Starting seqdemo v{VERSION}");

    // Session calls (signing, RPC, transaction submission) run here; the UI
    // thread only awaits their results.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("seqdemo-rt")
        .build()
        .expect("Failed to start tokio runtime");
    let handle = runtime.handle().clone();

    Application::new().run(move |cx| {
        gpui_component::init(cx);

        if let Err(e) = init_services(cx, handle) {
            error!("Service initialization failed: {e:#}");
            cx.quit();
            return;
        }

        register_actions(cx);

        open_main_window(cx).expect("Failed to open window");
        cx.activate(true);
    });

    runtime.shutdown_background();
}
