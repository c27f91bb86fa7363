use leptos::prelude::*;

pub const DEFAULT_ROWS: u32 = 4;

pub fn effective_rows(rows: Option<u32>) -> u32 {
    rows.unwrap_or(DEFAULT_ROWS)
}

/// Text shown by the field: always the caller's current `value`.
pub fn displayed_value(value: Signal<String>) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || value.get()
}

/// Controlled multi-line text field with an optional label.
///
/// The displayed text always mirrors `value`; edits are only reported
/// through `on_change`, the caller decides whether to write them back.
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value, owned by the caller
    #[prop(into)]
    value: Signal<String>,
    /// Called with the native input event on every keystroke
    on_change: Callback<leptos::ev::Event>,
    /// Form field name; also used as the element id when `id` is absent
    #[prop(into)]
    name: String,
    /// Rows attribute, 4 when omitted
    #[prop(optional)]
    rows: Option<u32>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Forwarded to the element; no local validation
    #[prop(optional)]
    required: bool,
    /// ID for the textarea element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let fallback_id = name.clone();
    let textarea_id = Signal::derive(move || id.get().unwrap_or_else(|| fallback_id.clone()));
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let textarea_rows = effective_rows(rows);

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=move || textarea_id.get()>
                    {l}
                </label>
            })}
            <textarea
                id=move || textarea_id.get()
                name=name
                class=move || format!("form__textarea {}", additional_class()).trim_end().to_string()
                placeholder=textarea_placeholder
                required=required
                rows=textarea_rows
                prop:value=displayed_value(value)
                on:input=move |ev| on_change.run(ev)
            ></textarea>
        </div>
    }
}
