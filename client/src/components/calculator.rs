//! Two-field integer calculator.

#[cfg(test)]
#[path = "calculator_test.rs"]
mod calculator_test;

use leptos::prelude::*;

/// Parse the leading integer of `text`, like a lenient `parseInt`.
///
/// Leading whitespace and one sign are allowed, parsing stops at the first
/// non-digit. No digits, or a value outside `i64`, yields 0.
pub fn parse_operand(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digit_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digit_len == 0 {
        return 0;
    }
    trimmed[..sign_len + digit_len].parse().unwrap_or(0)
}

pub fn sum(a: i64, b: i64) -> i64 {
    a.saturating_add(b)
}

#[component]
pub fn Calculator() -> impl IntoView {
    let a = RwSignal::new(0_i64);
    let b = RwSignal::new(0_i64);
    let total = RwSignal::new(0_i64);

    view! {
        <div class="calculator">
            <hr/>
            <h2>"Hi, I am a Calculator!"</h2>
            <input
                class="calculator__input"
                inputmode="numeric"
                prop:value=move || a.get().to_string()
                on:input=move |ev| a.set(parse_operand(&event_target_value(&ev)))
            />
            <input
                class="calculator__input"
                inputmode="numeric"
                prop:value=move || b.get().to_string()
                on:input=move |ev| b.set(parse_operand(&event_target_value(&ev)))
            />
            <button class="calculator__button" on:click=move |_| total.set(sum(a.get(), b.get()))>
                "sum"
            </button>
            <h2>"sum is " {move || total.get()}</h2>
        </div>
    }
}
