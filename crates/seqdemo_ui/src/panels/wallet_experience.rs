use gpui::*;
use gpui_component::{Icon, IconName};

use seqdemo_chain::DEMO_MESSAGE;
use seqdemo_connect::view::{self, ButtonState, ChainButton, EMPTY_WALLETS_TITLE};
use seqdemo_connect::{MintStatus, SessionSnapshot, WalletExperience};

use crate::actions::{MintNft, OpenConnectPrompt, OpenExplorer, SignMessage, SwitchChain};
use crate::components::{WalletRowData, render_wallet_row};
use crate::theme::DemoTheme;

// ---------------------------------------------------------------------------
// Data
// ---------------------------------------------------------------------------

/// Everything the demo page draws, derived from one session snapshot and the
/// experience state.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletPanelData {
    pub app_name: String,
    pub chain_count: usize,
    pub wallets: Vec<WalletRowData>,
    pub show_empty_state: bool,
    pub connect_label: &'static str,
    pub show_chain_selector: bool,
    pub chain_buttons: Vec<ChainButton>,
    pub sign_button: ButtonState,
    pub signature: Option<String>,
    pub signature_valid: Option<bool>,
    pub sign_error: Option<String>,
    pub mint_button: ButtonState,
    pub mint_notice: Option<&'static str>,
    pub tx_status: Option<String>,
    pub tx_is_error: bool,
    pub explorer_url: Option<String>,
}

impl WalletPanelData {
    /// Adopt the snapshot's identity first, so results that belong to a
    /// previous wallet or chain are never drawn against the current one.
    pub fn observe(
        app_name: &str,
        snapshot: &SessionSnapshot,
        experience: &mut WalletExperience,
    ) -> Self {
        experience.sync(snapshot.identity());
        Self::from_session(app_name, snapshot, experience)
    }

    pub fn from_session(
        app_name: &str,
        snapshot: &SessionSnapshot,
        experience: &WalletExperience,
    ) -> Self {
        let sign = experience.sign_status();
        let tx_is_error = matches!(
            experience.mint_status(),
            Some(MintStatus::Failed(_) | MintStatus::Blocked(_))
        );

        Self {
            app_name: app_name.to_string(),
            chain_count: snapshot.chains.len(),
            wallets: snapshot.wallets.iter().map(WalletRowData::from).collect(),
            show_empty_state: view::shows_empty_state(snapshot),
            connect_label: view::connect_button_label(snapshot),
            show_chain_selector: view::show_chain_selector(snapshot),
            chain_buttons: view::chain_buttons(snapshot, experience),
            sign_button: view::sign_button(experience),
            signature: sign.signature().map(str::to_string),
            signature_valid: sign.is_valid(),
            sign_error: sign.error().map(str::to_string),
            mint_button: view::mint_button(experience, snapshot),
            mint_notice: view::mint_notice(snapshot),
            tx_status: experience.tx_status(),
            tx_is_error,
            explorer_url: experience.explorer_link(),
        }
    }
}

// ---------------------------------------------------------------------------
// Panel
// ---------------------------------------------------------------------------

pub struct WalletExperiencePanel;

impl WalletExperiencePanel {
    pub fn render(data: &WalletPanelData, theme: &DemoTheme) -> impl IntoElement {
        let mut page = div()
            .id("wallet-experience-panel")
            .flex()
            .flex_col()
            .size_full()
            .overflow_y_scroll()
            .p(theme.space_6)
            .gap(theme.space_4)
            .bg(theme.bg_primary)
            .child(render_hero(data, theme));

        if data.show_chain_selector {
            page = page.child(render_chain_selector(data, theme));
        }

        if data.show_empty_state {
            page.child(render_empty_card(data, theme))
        } else {
            page.child(
                div()
                    .flex()
                    .flex_row()
                    .items_start()
                    .gap(theme.space_4)
                    .child(render_wallet_list(data, theme))
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .flex_1()
                            .gap(theme.space_4)
                            .child(render_sign_card(data, theme))
                            .child(render_mint_card(data, theme)),
                    ),
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn card(theme: &DemoTheme) -> Div {
    div()
        .flex()
        .flex_col()
        .p(theme.space_4)
        .gap(theme.space_3)
        .rounded(theme.radius_lg)
        .bg(theme.bg_surface)
        .border_1()
        .border_color(theme.border)
}

/// Eyebrow, title and optional muted description.
fn card_header(eyebrow: &str, title: &str, desc: Option<&str>, theme: &DemoTheme) -> AnyElement {
    let mut header = div()
        .flex()
        .flex_col()
        .gap(theme.space_1)
        .child(
            div()
                .text_size(theme.font_size_xs)
                .text_color(theme.text_muted)
                .font_weight(FontWeight::SEMIBOLD)
                .child(eyebrow.to_uppercase()),
        )
        .child(
            div()
                .text_size(theme.font_size_lg)
                .text_color(theme.text_primary)
                .font_weight(FontWeight::BOLD)
                .child(title.to_string()),
        );
    if let Some(desc) = desc {
        header = header.child(
            div()
                .text_size(theme.font_size_sm)
                .text_color(theme.text_muted)
                .child(desc.to_string()),
        );
    }
    header.into_any_element()
}

fn separator(theme: &DemoTheme) -> AnyElement {
    div()
        .w_full()
        .h(px(1.0))
        .bg(theme.border)
        .into_any_element()
}

fn chip(label: String, theme: &DemoTheme) -> AnyElement {
    div()
        .px(theme.space_3)
        .py(theme.space_1)
        .rounded(theme.radius_full)
        .bg(theme.bg_tertiary)
        .text_size(theme.font_size_xs)
        .text_color(theme.text_secondary)
        .child(label)
        .into_any_element()
}

/// A clickable button that dispatches `action`, or a muted inert one when
/// `disabled`.
fn action_button(
    id: &'static str,
    label: &str,
    disabled: bool,
    primary: bool,
    action: impl Action + Clone,
    theme: &DemoTheme,
) -> AnyElement {
    let base = div()
        .id(id)
        .flex()
        .justify_center()
        .px(theme.space_4)
        .py(theme.space_2)
        .rounded(theme.radius_md)
        .text_size(theme.font_size_base)
        .font_weight(FontWeight::SEMIBOLD)
        .child(label.to_string());

    if disabled {
        return base
            .bg(theme.bg_tertiary)
            .text_color(theme.text_muted)
            .into_any_element();
    }

    let styled = if primary {
        base.bg(theme.accent).text_color(theme.text_on_accent)
    } else {
        base.bg(theme.bg_secondary)
            .border_1()
            .border_color(theme.border)
            .text_color(theme.text_primary)
            .hover(|el| el.bg(theme.bg_tertiary))
    };

    styled
        .cursor_pointer()
        .on_mouse_down(MouseButton::Left, move |_event, window, cx| {
            window.dispatch_action(Box::new(action.clone()), cx);
        })
        .into_any_element()
}

fn alert(text: &str, color: Hsla, theme: &DemoTheme) -> AnyElement {
    div()
        .px(theme.space_3)
        .py(theme.space_2)
        .rounded(theme.radius_md)
        .border_1()
        .border_color(color)
        .text_size(theme.font_size_sm)
        .text_color(color)
        .child(text.to_string())
        .into_any_element()
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

fn render_hero(data: &WalletPanelData, theme: &DemoTheme) -> AnyElement {
    div()
        .flex()
        .flex_row()
        .items_center()
        .gap(theme.space_4)
        .child(
            div()
                .flex()
                .items_center()
                .justify_center()
                .w(px(48.0))
                .h(px(48.0))
                .rounded(theme.radius_lg)
                .bg(theme.bg_surface)
                .border_1()
                .border_color(theme.border)
                .child(Icon::new(IconName::Globe).size_4()),
        )
        .child(
            div()
                .flex()
                .flex_col()
                .gap(theme.space_1)
                .child(
                    div()
                        .text_size(theme.font_size_xs)
                        .text_color(theme.accent)
                        .font_weight(FontWeight::SEMIBOLD)
                        .child(data.app_name.clone()),
                )
                .child(
                    div()
                        .text_size(theme.font_size_2xl)
                        .text_color(theme.text_primary)
                        .font_weight(FontWeight::BOLD)
                        .child("Sequence Web SDK demo workspace"),
                )
                .child(
                    div()
                        .text_size(theme.font_size_sm)
                        .text_color(theme.text_muted)
                        .child(
                            "Connect wallets, switch networks, sign messages, and send test transactions in a simple testbed.",
                        ),
                )
                .child(
                    div()
                        .flex()
                        .flex_row()
                        .gap(theme.space_2)
                        .child(chip(format!("{} chains", data.chain_count), theme))
                        .child(chip("Multiple concurrent wallets".into(), theme)),
                ),
        )
        .into_any_element()
}

fn render_chain_selector(data: &WalletPanelData, theme: &DemoTheme) -> AnyElement {
    let buttons: Vec<AnyElement> = data
        .chain_buttons
        .iter()
        .map(|button| render_chain_button(button, theme))
        .collect();

    card(theme)
        .child(card_header("Chains", "Select a chain to make it active", None, theme))
        .child(div().flex().flex_row().flex_wrap().gap(theme.space_2).children(buttons))
        .into_any_element()
}

fn render_chain_button(button: &ChainButton, theme: &DemoTheme) -> AnyElement {
    let chain_id = button.chain_id;
    let base = div()
        .id(SharedString::from(format!("chain-{chain_id}")))
        .px(theme.space_3)
        .py(theme.space_2)
        .rounded(theme.radius_md)
        .border_1()
        .text_size(theme.font_size_sm)
        .child(button.label());

    if button.is_active {
        return base
            .bg(theme.accent)
            .border_color(theme.accent)
            .text_color(theme.text_on_accent)
            .into_any_element();
    }
    if button.disabled() {
        return base
            .bg(theme.bg_tertiary)
            .border_color(theme.border)
            .text_color(theme.text_muted)
            .into_any_element();
    }

    base.bg(theme.bg_secondary)
        .border_color(theme.border)
        .text_color(theme.text_secondary)
        .cursor_pointer()
        .hover(|el| el.bg(theme.bg_tertiary))
        .on_mouse_down(MouseButton::Left, move |_event, window, cx| {
            window.dispatch_action(Box::new(SwitchChain { chain_id }), cx);
        })
        .into_any_element()
}

fn render_empty_card(data: &WalletPanelData, theme: &DemoTheme) -> AnyElement {
    card(theme)
        .items_center()
        .py(theme.space_8)
        .child(
            div()
                .text_size(theme.font_size_lg)
                .text_color(theme.text_primary)
                .font_weight(FontWeight::BOLD)
                .child(EMPTY_WALLETS_TITLE),
        )
        .child(
            div()
                .text_size(theme.font_size_sm)
                .text_color(theme.text_muted)
                .child("Connect your wallet to start exploring the features."),
        )
        .child(action_button(
            "connect-wallet",
            data.connect_label,
            false,
            true,
            OpenConnectPrompt,
            theme,
        ))
        .into_any_element()
}

fn render_wallet_list(data: &WalletPanelData, theme: &DemoTheme) -> AnyElement {
    let rows: Vec<AnyElement> = data
        .wallets
        .iter()
        .map(|row| render_wallet_row(row, theme))
        .collect();

    card(theme)
        .flex_1()
        .child(card_header(
            "Wallets",
            "Your connections",
            Some("Select a wallet to make it active."),
            theme,
        ))
        .child(div().flex().flex_col().gap(theme.space_2).children(rows))
        .child(action_button(
            "connect-another",
            data.connect_label,
            false,
            false,
            OpenConnectPrompt,
            theme,
        ))
        .into_any_element()
}

fn render_sign_card(data: &WalletPanelData, theme: &DemoTheme) -> AnyElement {
    let mut section = card(theme)
        .child(card_header(
            "Sign Message",
            "Verify ownership",
            Some("Sign a quick message to confirm control."),
            theme,
        ))
        .child(
            div()
                .flex()
                .flex_col()
                .gap(theme.space_1)
                .p(theme.space_3)
                .rounded(theme.radius_md)
                .bg(theme.bg_primary)
                .child(
                    div()
                        .text_size(theme.font_size_xs)
                        .text_color(theme.text_muted)
                        .child("MESSAGE"),
                )
                .child(
                    div()
                        .text_size(theme.font_size_sm)
                        .text_color(theme.text_primary)
                        .child(DEMO_MESSAGE),
                ),
        )
        .child(
            div().flex().justify_end().child(action_button(
                "sign-message",
                data.sign_button.label,
                data.sign_button.disabled,
                true,
                SignMessage,
                theme,
            )),
        );

    if data.signature.is_some() || data.sign_error.is_some() {
        section = section.child(separator(theme));
    }
    if let Some(err) = &data.sign_error {
        section = section.child(alert(err, theme.accent_red, theme));
    }
    if let Some(signature) = &data.signature {
        let (badge, color) = if data.signature_valid == Some(true) {
            ("Valid", theme.accent_green)
        } else {
            ("Invalid", theme.accent_yellow)
        };
        section = section.child(
            div()
                .flex()
                .flex_col()
                .gap(theme.space_2)
                .child(
                    div()
                        .flex()
                        .justify_between()
                        .items_center()
                        .child(
                            div()
                                .text_size(theme.font_size_sm)
                                .text_color(theme.text_muted)
                                .font_weight(FontWeight::BOLD)
                                .child("Signature Result"),
                        )
                        .child(
                            div()
                                .px(theme.space_2)
                                .py(px(2.0))
                                .rounded(theme.radius_full)
                                .border_1()
                                .border_color(color)
                                .text_size(theme.font_size_xs)
                                .text_color(color)
                                .child(badge),
                        ),
                )
                .child(
                    div()
                        .p(theme.space_3)
                        .rounded(theme.radius_md)
                        .bg(theme.bg_primary)
                        .font_family(theme.font_mono.clone())
                        .text_size(theme.font_size_xs)
                        .text_color(theme.text_secondary)
                        .child(signature.clone()),
                ),
        );
    }
    section.into_any_element()
}

fn render_mint_card(data: &WalletPanelData, theme: &DemoTheme) -> AnyElement {
    let mut section = card(theme).child(card_header(
        "Mint NFT",
        "Mint demo token",
        Some("Call awardItem on the demo contract to mint to your active wallet and test sending a transaction."),
        theme,
    ));

    if let Some(notice) = data.mint_notice {
        section = section.child(alert(notice, theme.accent_yellow, theme));
    }

    section = section.child(action_button(
        "mint-nft",
        data.mint_button.label,
        data.mint_button.disabled,
        false,
        MintNft,
        theme,
    ));

    if let Some(status) = &data.tx_status {
        let color = if data.tx_is_error {
            theme.accent_red
        } else {
            theme.text_primary
        };
        let mut row = div()
            .flex()
            .flex_row()
            .items_center()
            .gap(theme.space_3)
            .p(theme.space_3)
            .rounded(theme.radius_md)
            .bg(theme.bg_primary)
            .child(
                div()
                    .flex_1()
                    .font_family(theme.font_mono.clone())
                    .text_size(theme.font_size_xs)
                    .text_color(color)
                    .child(status.clone()),
            );
        if let Some(url) = &data.explorer_url {
            row = row.child(action_button(
                "view-on-explorer",
                "View on explorer",
                false,
                false,
                OpenExplorer { url: url.clone() },
                theme,
            ));
        }
        section = section.child(row);
    }
    section.into_any_element()
}
