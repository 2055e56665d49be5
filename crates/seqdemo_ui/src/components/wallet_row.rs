use alloy::primitives::Address;
use gpui::*;

use seqdemo_connect::Wallet;
use seqdemo_connect::view::{format_address, wallet_display_name};

use crate::actions::{DisconnectWallet, SelectWallet};
use crate::theme::DemoTheme;

/// Display data for one connected wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletRowData {
    pub address: Address,
    pub name: String,
    pub short_address: String,
    pub is_active: bool,
}

impl From<&Wallet> for WalletRowData {
    fn from(wallet: &Wallet) -> Self {
        Self {
            address: wallet.address,
            name: wallet_display_name(wallet).to_string(),
            short_address: format_address(&wallet.address),
            is_active: wallet.is_active,
        }
    }
}

/// Render a wallet row: avatar initial, name, short address, and the
/// select / disconnect controls.
pub fn render_wallet_row(row: &WalletRowData, theme: &DemoTheme) -> AnyElement {
    let address = row.address;
    let border = if row.is_active {
        theme.accent
    } else {
        theme.border
    };

    let select: AnyElement = if row.is_active {
        div()
            .px(theme.space_2)
            .py(px(2.0))
            .rounded(theme.radius_full)
            .bg(theme.accent)
            .text_size(theme.font_size_xs)
            .text_color(theme.text_on_accent)
            .child("Active")
            .into_any_element()
    } else {
        div()
            .id(element_id("wallet-select", &address))
            .px(theme.space_3)
            .py(theme.space_1)
            .rounded(theme.radius_md)
            .border_1()
            .border_color(theme.border)
            .text_size(theme.font_size_sm)
            .text_color(theme.text_secondary)
            .cursor_pointer()
            .hover(|el| el.bg(theme.bg_tertiary))
            .on_mouse_down(MouseButton::Left, move |_event, window, cx| {
                window.dispatch_action(Box::new(SelectWallet { address }), cx);
            })
            .child("Set active")
            .into_any_element()
    };

    div()
        .flex()
        .items_center()
        .gap(theme.space_3)
        .w_full()
        .px(theme.space_4)
        .py(theme.space_3)
        .bg(theme.bg_surface)
        .border_1()
        .border_color(border)
        .rounded(theme.radius_lg)
        .child(
            div()
                .flex()
                .items_center()
                .justify_center()
                .w(px(36.0))
                .h(px(36.0))
                .rounded(theme.radius_full)
                .bg(theme.bg_tertiary)
                .text_size(theme.font_size_sm)
                .text_color(theme.text_primary)
                .child(name_initial(&row.name)),
        )
        .child(
            div()
                .flex()
                .flex_col()
                .flex_1()
                .gap(px(2.0))
                .child(
                    div()
                        .text_size(theme.font_size_sm)
                        .text_color(theme.text_primary)
                        .font_weight(FontWeight::SEMIBOLD)
                        .child(row.name.clone()),
                )
                .child(
                    div()
                        .text_size(theme.font_size_xs)
                        .font_family(theme.font_mono.clone())
                        .text_color(theme.text_muted)
                        .child(row.short_address.clone()),
                ),
        )
        .child(select)
        .child(
            div()
                .id(element_id("wallet-disconnect", &address))
                .px(theme.space_3)
                .py(theme.space_1)
                .rounded(theme.radius_md)
                .text_size(theme.font_size_sm)
                .text_color(theme.accent_red)
                .cursor_pointer()
                .hover(|el| el.bg(theme.bg_tertiary))
                .on_mouse_down(MouseButton::Left, move |_event, window, cx| {
                    window.dispatch_action(Box::new(DisconnectWallet { address }), cx);
                })
                .child("Disconnect"),
        )
        .into_any_element()
}

/// Keyed on the full address; short forms can collide.
fn element_id(prefix: &str, address: &Address) -> SharedString {
    SharedString::from(format!("{prefix}-{address:#x}"))
}

/// First character of the wallet name, uppercased.
fn name_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}
