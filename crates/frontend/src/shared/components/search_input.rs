use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const DEBOUNCE_MS: u32 = 300;

/// Search box with debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Current filter value (for the clear-button state)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new value once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    // Local state so keystrokes render immediately while the catalog query
    // only reruns after the debounce window.
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Keep the box in sync when the filter value changes from outside,
    // e.g. the reset button clearing every criterion.
    Effect::new(move |_| {
        let outside = value.get();
        if outside != input_value.get_untracked() {
            set_input_value.set(outside);
        }
    });

    // Replacing the stored handle drops, and thereby cancels, the previous
    // timer.
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(DEBOUNCE_MS, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        set_input_value.set(String::new());
        pending.set_value(None);
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            {move || {
                (!input_value.get().is_empty())
                    .then(|| {
                        view! {
                            <button class="search-input__clear" on:click=clear title="Xóa tìm kiếm">
                                {icon("x")}
                            </button>
                        }
                    })
            }}
        </div>
    }
}
