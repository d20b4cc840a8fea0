use crate::api::ApiError;
use leptos::*;

/// Shows the most recent form error under a form. Validation errors list the
/// offending fields when the error carries them.
#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="form-error" role="alert">
                <div class="form-error-title">
                    <i class="fas fa-exclamation-circle"></i>
                    " "
                    {move || error.get().map(|e| e.error).unwrap_or_default()}
                </div>
                {move || {
                    error
                        .get()
                        .map(|e| {
                            let fields = e
                                .details
                                .as_ref()
                                .and_then(|d| d.get("fields"))
                                .and_then(|v| v.as_array())
                                .cloned()
                                .unwrap_or_default();
                            if e.code == "VALIDATION_ERROR" && !fields.is_empty() {
                                view! {
                                    <ul class="form-error-fields">
                                        {fields
                                            .iter()
                                            .filter_map(|f| f.as_str().map(str::to_string))
                                            .map(|f| view! { <li>{f}</li> })
                                            .collect_view()}
                                    </ul>
                                }
                                .into_view()
                            } else if e.code.starts_with("HTTP_") {
                                view! { <div class="form-error-code">{"Code: "}{e.code}</div> }
                                    .into_view()
                            } else {
                                ().into_view()
                            }
                        })
                        .unwrap_or_else(|| ().into_view())
                }}
            </div>
        </Show>
    }
}
