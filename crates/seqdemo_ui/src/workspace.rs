use std::future::Future;
use std::sync::Arc;

use gpui::prelude::FluentBuilder;
use gpui::*;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use seqdemo_connect::{
    ConnectError, WalletConnector, WalletExperience, WalletOnboarding, sign_demo_message,
    submit_mint, switch_chain,
};
use seqdemo_core::DemoError;

use crate::actions::*;
use crate::connect_prompt::{ConnectPromptView, ImportKey};
use crate::globals::{AppConfig, AppOnboarding, AppRuntime, AppSession};
use crate::panels::{WalletExperiencePanel, WalletPanelData};
use crate::theme::DemoTheme;

/// Root view of the demo window: the wallet page plus the connect prompt
/// overlay.
pub struct DemoWorkspace {
    theme: DemoTheme,
    app_name: String,
    session: Arc<dyn WalletConnector>,
    onboarding: Arc<dyn WalletOnboarding>,
    runtime: tokio::runtime::Handle,
    experience: WalletExperience,
    connect_prompt: Entity<ConnectPromptView>,
    focus_handle: FocusHandle,
}

impl DemoWorkspace {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let session = cx.global::<AppSession>().0.clone();
        let onboarding = cx.global::<AppOnboarding>().0.clone();
        let runtime = cx.global::<AppRuntime>().0.clone();
        let (mode, app_name) = {
            let config = &cx.global::<AppConfig>().0;
            (config.default_theme, config.app_name.clone())
        };

        let connect_prompt = cx.new(|cx| ConnectPromptView::new(mode, window, cx));
        cx.subscribe_in(&connect_prompt, window, Self::on_import_key)
            .detach();

        let mut experience = WalletExperience::new();
        experience.sync(session.snapshot().identity());

        Self {
            theme: DemoTheme::from_mode(mode),
            app_name,
            session,
            onboarding,
            runtime,
            experience,
            connect_prompt,
            focus_handle: cx.focus_handle(),
        }
    }

    /// Run `fut` on the tokio runtime and hand its output to `done` on the UI
    /// thread. Completions for a dropped workspace are discarded.
    fn run_in_background<T, F>(
        &self,
        fut: F,
        cx: &mut Context<Self>,
        done: impl FnOnce(&mut Self, Result<T, ConnectError>, &mut Context<Self>) + 'static,
    ) where
        T: Send + 'static,
        F: Future<Output = Result<T, ConnectError>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        self.runtime.spawn(async move {
            let _ = tx.send(fut.await);
        });

        cx.spawn(async move |this, app: &mut AsyncApp| {
            let outcome = rx
                .await
                .unwrap_or_else(|_| Err(ConnectError::Rpc("Background task was cancelled".into())));
            let _ = this.update(app, |ws, cx| {
                done(ws, outcome, cx);
                cx.notify();
            });
        })
        .detach();
    }

    // -- Connect prompt ---------------------------------------------------

    fn handle_open_connect_prompt(
        &mut self,
        _action: &OpenConnectPrompt,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        info!("Connect prompt opened");
        self.session.set_connect_modal_open(true);
        self.connect_prompt
            .update(cx, |prompt, cx| prompt.reset(window, cx));
        cx.notify();
    }

    fn handle_close_connect_prompt(
        &mut self,
        _action: &CloseConnectPrompt,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.session.is_connect_modal_open() {
            debug!("Connect prompt closed");
            self.session.set_connect_modal_open(false);
            cx.notify();
        }
    }

    fn handle_create_test_wallet(
        &mut self,
        _action: &CreateTestWallet,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let name = self.next_wallet_name();
        let address = self.onboarding.connect_new_wallet(Some(name.clone()));
        info!("Created {name} ({address})");
        cx.notify();
    }

    fn on_import_key(
        &mut self,
        prompt: &Entity<ConnectPromptView>,
        event: &ImportKey,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let name = self.next_wallet_name();
        match self.onboarding.import_wallet(&event.0, Some(name)) {
            Ok(address) => info!("Imported wallet {address}"),
            Err(e) => {
                let err = DemoError::from(e);
                warn!("Wallet import failed ({:?}): {err}", err.category());
                let message = err.user_message();
                prompt.update(cx, |prompt, cx| prompt.set_error(message, cx));
            }
        }
        cx.notify();
    }

    fn next_wallet_name(&self) -> String {
        format!("Test Wallet {}", self.session.wallets().len() + 1)
    }

    // -- Wallets and chains -----------------------------------------------

    fn handle_select_wallet(
        &mut self,
        action: &SelectWallet,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match self.session.set_active_wallet(action.address) {
            Ok(()) => info!("Active wallet: {}", action.address),
            Err(e) => warn!("Select wallet failed: {e}"),
        }
        cx.notify();
    }

    fn handle_disconnect_wallet(
        &mut self,
        action: &DisconnectWallet,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match self.session.disconnect_wallet(action.address) {
            Ok(()) => info!("Disconnected {}", action.address),
            Err(e) => warn!("Disconnect failed: {e}"),
        }
        cx.notify();
    }

    fn handle_switch_chain(
        &mut self,
        action: &SwitchChain,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let chain_id = action.chain_id;
        let snapshot = self.session.snapshot();
        match self.experience.begin_switch(&snapshot, chain_id) {
            Ok(true) => info!("Switch chain requested: {chain_id}"),
            Ok(false) => {
                debug!("Chain {chain_id} already active or unavailable");
                return;
            }
            Err(e) => {
                debug!("Switch to {chain_id} ignored: {e}");
                return;
            }
        }

        let session = self.session.clone();
        self.run_in_background(
            async move { switch_chain(&*session, chain_id).await },
            cx,
            move |ws, outcome, _cx| {
                ws.experience.finish_switch(chain_id, outcome);
            },
        );
        cx.notify();
    }

    // -- Sign and mint ----------------------------------------------------

    fn handle_sign_message(
        &mut self,
        _action: &SignMessage,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let snapshot = self.session.snapshot();
        let Some(ticket) = self.experience.begin_sign(&snapshot) else {
            cx.notify();
            return;
        };

        info!("Signing demo message");
        let session = self.session.clone();
        self.run_in_background(
            async move { sign_demo_message(&*session).await },
            cx,
            move |ws, outcome, _cx| {
                ws.experience.finish_sign(ticket, outcome);
            },
        );
        cx.notify();
    }

    fn handle_mint_nft(&mut self, _action: &MintNft, _window: &mut Window, cx: &mut Context<Self>) {
        let snapshot = self.session.snapshot();
        let Some((ticket, request)) = self.experience.begin_mint(&snapshot) else {
            cx.notify();
            return;
        };

        info!("Minting on chain {}", request.chain_id);
        let session = self.session.clone();
        self.run_in_background(
            async move { submit_mint(&*session, request).await },
            cx,
            move |ws, outcome, _cx| {
                ws.experience.finish_mint(ticket, outcome);
            },
        );
        cx.notify();
    }

    fn handle_open_explorer(
        &mut self,
        action: &OpenExplorer,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        info!("Opening {}", action.url);
        cx.open_url(&action.url);
    }

    fn render_connect_overlay(&self) -> AnyElement {
        div()
            .id("connect-overlay")
            .absolute()
            .inset_0()
            .flex()
            .items_center()
            .justify_center()
            .bg(self.theme.overlay)
            .on_mouse_down(MouseButton::Left, |_event, window, cx| {
                window.dispatch_action(Box::new(CloseConnectPrompt), cx);
            })
            .child(
                div()
                    .id("connect-overlay-content")
                    .on_mouse_down(MouseButton::Left, |_event, _window, cx| {
                        cx.stop_propagation();
                    })
                    .child(self.connect_prompt.clone()),
            )
            .into_any_element()
    }
}

impl Render for DemoWorkspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        // Session changes made outside this view (wallet removed, chain
        // switched) reset the per-identity results before drawing.
        let snapshot = self.session.snapshot();
        let data = WalletPanelData::observe(&self.app_name, &snapshot, &mut self.experience);

        if window.focused(cx).is_none() {
            window.focus(&self.focus_handle);
        }

        let modal_open = snapshot.connect_modal_open;
        let overlay = modal_open.then(|| self.render_connect_overlay());
        let theme = &self.theme;

        div()
            .id("workspace-root")
            .track_focus(&self.focus_handle)
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .bg(theme.bg_primary)
            .text_color(theme.text_primary)
            .font_family(theme.font_ui.clone())
            .on_action(cx.listener(Self::handle_open_connect_prompt))
            .on_action(cx.listener(Self::handle_close_connect_prompt))
            .on_action(cx.listener(Self::handle_create_test_wallet))
            .on_action(cx.listener(Self::handle_select_wallet))
            .on_action(cx.listener(Self::handle_disconnect_wallet))
            .on_action(cx.listener(Self::handle_switch_chain))
            .on_action(cx.listener(Self::handle_sign_message))
            .on_action(cx.listener(Self::handle_mint_nft))
            .on_action(cx.listener(Self::handle_open_explorer))
            .child(WalletExperiencePanel::render(&data, theme))
            .when_some(overlay, |el, overlay| el.child(overlay))
    }
}
