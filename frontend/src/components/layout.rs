use crate::utils::dialog;
use leptos::*;

/// A sidebar tab of one of the portals. Implementors are closed enums.
pub trait PortalTab: Copy + Eq + 'static {
    /// Sidebar order.
    fn all() -> &'static [Self];
    fn id(self) -> &'static str;
    fn label(self) -> &'static str;
    fn icon(self) -> &'static str;
    /// Heading shown above the active panel.
    fn title(self) -> &'static str;
}

#[component]
pub fn SidebarMenu<T>(active_tab: RwSignal<T>) -> impl IntoView
where
    T: PortalTab,
{
    view! {
        <ul class="sidebar-menu">
            {T::all()
                .iter()
                .copied()
                .map(|tab| {
                    view! {
                        <li
                            class=move || if active_tab.get() == tab { "active" } else { "" }
                            data-tab=tab.id()
                            on:click=move |_| active_tab.set(tab)
                        >
                            <i class=format!("fas {}", tab.icon())></i>
                            " "
                            {tab.label()}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn PortalShell<T>(
    #[prop(into)] portal_name: String,
    #[prop(into)] portal_icon: String,
    active_tab: RwSignal<T>,
    user_name: Signal<String>,
    user_detail: Signal<String>,
    notification_count: Signal<String>,
    #[prop(optional)] avatar: Option<Signal<String>>,
    #[prop(optional)] search: Option<RwSignal<String>>,
    children: Children,
) -> impl IntoView
where
    T: PortalTab,
{
    let on_logout = move |_| dialog::navigate_to("/");
    let dashboard_class = portal_name.to_lowercase().replace(' ', "-");
    let icon_class = format!("fas {}", portal_icon);

    view! {
        <div class=dashboard_class>
            <div class="sidebar">
                <div class="sidebar-header">
                    <i class=icon_class.clone()></i>
                    <h2>{portal_name}</h2>
                </div>
                <SidebarMenu active_tab=active_tab/>
                <div class="sidebar-footer">
                    <div class="user-info">
                        <div class="user-avatar">
                            {match avatar {
                                Some(initial) => view! { <span>{move || initial.get()}</span> }.into_view(),
                                None => view! { <i class=icon_class></i> }.into_view(),
                            }}
                        </div>
                        <div class="user-details">
                            <h4>{move || user_name.get()}</h4>
                            <p>{move || user_detail.get()}</p>
                        </div>
                    </div>
                    <button class="logout-btn" on:click=on_logout>
                        <i class="fas fa-sign-out-alt"></i>
                        " Logout"
                    </button>
                </div>
            </div>

            <div class="main-content">
                <div class="content-header">
                    <h1>{move || active_tab.get().title()}</h1>
                    <div class="header-actions">
                        {search.map(|query| view! {
                            <div class="search-box">
                                <i class="fas fa-search"></i>
                                <input
                                    type="text"
                                    placeholder="Search..."
                                    prop:value=move || query.get()
                                    on:input=move |ev| query.set(event_target_value(&ev))
                                />
                            </div>
                        })}
                        <div class="notifications">
                            <i class="fas fa-bell"></i>
                            <span class="badge">{move || notification_count.get()}</span>
                        </div>
                    </div>
                </div>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="form-success" role="status">
            <i class="fas fa-check-circle"></i>
            " "
            {message}
        </div>
    }
}
