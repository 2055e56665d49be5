use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::input::{Input, InputEvent, InputState};

use seqdemo_core::ThemeMode;

use crate::actions::{CloseConnectPrompt, CreateTestWallet};
use crate::theme::DemoTheme;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Emitted when the user submits a private key to import.
#[derive(Debug, Clone)]
pub struct ImportKey(pub String);

// ---------------------------------------------------------------------------
// ConnectPromptView
// ---------------------------------------------------------------------------

/// The local connect prompt: create a throwaway test wallet, or import one
/// from a hex private key. The key field is masked.
pub struct ConnectPromptView {
    key_input: Entity<InputState>,
    error: Option<String>,
    theme: DemoTheme,
}

impl EventEmitter<ImportKey> for ConnectPromptView {}

impl ConnectPromptView {
    pub fn new(mode: ThemeMode, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let key_input = cx.new(|cx| {
            InputState::new(window, cx)
                .masked(true)
                .placeholder("0x… private key")
        });

        cx.subscribe_in(&key_input, window, Self::on_input_event)
            .detach();

        Self {
            key_input,
            error: None,
            theme: DemoTheme::from_mode(mode),
        }
    }

    /// Show an import failure under the key field.
    pub fn set_error(&mut self, message: impl Into<String>, cx: &mut Context<Self>) {
        self.error = Some(message.into());
        cx.notify();
    }

    /// Clear the key field and any error.
    pub fn reset(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.error = None;
        self.key_input.update(cx, |state, cx| {
            state.replace("", window, cx);
        });
        cx.notify();
    }

    fn on_input_event(
        &mut self,
        _state: &Entity<InputState>,
        event: &InputEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match event {
            InputEvent::PressEnter { .. } => self.submit(window, cx),
            InputEvent::Change => {
                if self.error.take().is_some() {
                    cx.notify();
                }
            }
            _ => {}
        }
    }

    fn submit(&mut self, _window: &mut Window, cx: &mut Context<Self>) {
        let key = self.key_input.read(cx).value().trim().to_string();
        if key.is_empty() {
            self.set_error("Paste a private key to import.", cx);
            return;
        }
        cx.emit(ImportKey(key));
    }
}

impl Render for ConnectPromptView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let error = self.error.clone();

        div()
            .flex()
            .flex_col()
            .w(px(420.0))
            .p(theme.space_6)
            .gap(theme.space_4)
            .bg(theme.bg_surface)
            .border_1()
            .border_color(theme.border)
            .rounded(theme.radius_lg)
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_size(theme.font_size_xl)
                            .text_color(theme.text_primary)
                            .font_weight(FontWeight::BOLD)
                            .child("Connect a wallet"),
                    )
                    .child(
                        div()
                            .id("connect-prompt-close")
                            .px(theme.space_2)
                            .text_color(theme.text_muted)
                            .cursor_pointer()
                            .hover(|el| el.text_color(theme.text_primary))
                            .on_mouse_down(MouseButton::Left, |_event, window, cx| {
                                window.dispatch_action(Box::new(CloseConnectPrompt), cx);
                            })
                            .child("\u{2715}"),
                    ),
            )
            .child(
                div()
                    .id("connect-prompt-create")
                    .flex()
                    .justify_center()
                    .py(theme.space_3)
                    .rounded(theme.radius_md)
                    .bg(theme.accent)
                    .text_size(theme.font_size_base)
                    .text_color(theme.text_on_accent)
                    .font_weight(FontWeight::SEMIBOLD)
                    .cursor_pointer()
                    .on_mouse_down(MouseButton::Left, |_event, window, cx| {
                        window.dispatch_action(Box::new(CreateTestWallet), cx);
                    })
                    .child("Create test wallet"),
            )
            .child(
                div()
                    .text_size(theme.font_size_sm)
                    .text_color(theme.text_muted)
                    .child("Or import an existing key"),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(theme.space_2)
                    .child(div().flex_1().child(Input::new(&self.key_input).cleanable(true)))
                    .child(
                        div()
                            .id("connect-prompt-import")
                            .px(theme.space_4)
                            .py(theme.space_2)
                            .rounded(theme.radius_md)
                            .border_1()
                            .border_color(theme.border)
                            .text_size(theme.font_size_base)
                            .text_color(theme.text_secondary)
                            .cursor_pointer()
                            .hover(|el| el.bg(theme.bg_tertiary))
                            .on_mouse_down(
                                MouseButton::Left,
                                cx.listener(|this, _event, window, cx| {
                                    this.submit(window, cx);
                                }),
                            )
                            .child("Import"),
                    ),
            )
            .when_some(error, |el, msg| {
                el.child(
                    div()
                        .text_size(theme.font_size_sm)
                        .text_color(theme.accent_red)
                        .child(msg),
                )
            })
    }
}
