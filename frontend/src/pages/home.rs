use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="landing">
            <div class="landing-header">
                <h1>"HR Portal"</h1>
                <p>"Self-service for employees and administration for HR"</p>
            </div>
            <div class="landing-links">
                <a href="/employee" class="landing-card">
                    <i class="fas fa-user"></i>
                    <span>"Employee Portal"</span>
                </a>
                <a href="/hr" class="landing-card">
                    <i class="fas fa-user-tie"></i>
                    <span>"HR Dashboard"</span>
                </a>
            </div>
        </div>
    }
}
