use crate::api::HrProfile;
use crate::components::layout::PortalShell;
use crate::pages::hr::utils::{HrStats, HrTab};
use leptos::*;

#[component]
pub fn HrFrame(
    active_tab: RwSignal<HrTab>,
    profile: RwSignal<HrProfile>,
    stats: Signal<HrStats>,
    search: RwSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <PortalShell
            portal_name="HR Dashboard"
            portal_icon="fa-user-tie"
            active_tab=active_tab
            user_name=Signal::derive(move || profile.with(|p| p.name.clone()))
            user_detail=Signal::derive(move || profile.with(|p| p.email.clone()))
            notification_count=Signal::derive(move || stats.with(|s| s.pending_leaves).to_string())
            search=search
        >
            {children()}
        </PortalShell>
    }
}
