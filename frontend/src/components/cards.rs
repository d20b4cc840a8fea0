use leptos::*;

/// Summary tile on a dashboard: icon, label and a reactive value.
#[component]
pub fn StatCard(
    #[prop(into)] icon: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] tone: Option<String>,
) -> impl IntoView {
    let icon_class = format!("stat-icon {}", tone.unwrap_or_else(|| "primary".into()));
    view! {
        <div class="stat-card">
            <div class=icon_class>
                <i class=format!("fas {}", icon)></i>
            </div>
            <div class="stat-info">
                <h3>{move || value.get()}</h3>
                <p>{label}</p>
            </div>
        </div>
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] class: String, #[prop(into)] label: String) -> impl IntoView {
    view! { <span class=format!("status-badge {}", class)>{label}</span> }
}
