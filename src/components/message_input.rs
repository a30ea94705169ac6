//! Message composer with Enter-to-send and IME-aware key handling.

#[cfg(test)]
#[path = "message_input_test.rs"]
mod message_input_test;

use leptos::prelude::*;

use crate::state::conversation::ConversationState;

/// True when a keydown should submit: plain Enter, outside IME composition.
/// Shift+Enter inserts a newline instead.
fn should_submit(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}

/// Composer row: textarea plus send button, disabled while a send is in
/// flight. Whitespace-only input never submits.
#[component]
pub fn MessageInput(on_send: Callback<String>) -> impl IntoView {
    let conversation = expect_context::<RwSignal<ConversationState>>();

    let input = RwSignal::new(String::new());

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() || conversation.get().busy {
            return;
        }
        on_send.run(text.trim().to_owned());
        input.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if should_submit(&ev.key(), ev.shift_key(), ev.is_composing()) {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !conversation.get().busy;

    view! {
        <form class="message-input" on:submit=on_submit>
            <textarea
                class="message-input__field"
                rows="2"
                placeholder="Type a message. Enter sends, Shift+Enter adds a line."
                disabled=move || conversation.get().busy
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            ></textarea>
            <button class="btn btn--primary message-input__send" type="submit" disabled=move || !can_send()>
                "Send"
            </button>
        </form>
    }
}
