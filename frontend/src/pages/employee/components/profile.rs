use crate::api::PersonalInfo;
use crate::pages::employee::utils::ProfileFormState;
use leptos::*;

#[component]
pub fn ProfilePanel(
    form: ProfileFormState,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<ev::SubmitEvent>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = form.draft_signal();
    let is_editing = form.editing_signal();
    let field = move |read: fn(&PersonalInfo) -> String| move || draft.with(read);

    view! {
        <div class="profile-content" id="panel-profile">
            <div class="content-section">
                <h2>"Personal Information"</h2>
                <form class="profile-form" on:submit=move |ev| on_submit.call(ev)>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"Full Name"</label>
                            <input
                                type="text"
                                name="name"
                                prop:value=field(|info| info.name.clone())
                                on:input=move |ev| form.set_name(event_target_value(&ev))
                                disabled=move || !is_editing.get()
                            />
                        </div>
                        <div class="form-group">
                            <label>"Email"</label>
                            <input
                                type="email"
                                name="email"
                                prop:value=field(|info| info.email.clone())
                                on:input=move |ev| form.set_email(event_target_value(&ev))
                                disabled=move || !is_editing.get()
                            />
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label>"Phone"</label>
                            <input
                                type="text"
                                name="phone"
                                prop:value=field(|info| info.phone.clone())
                                on:input=move |ev| form.set_phone(event_target_value(&ev))
                                disabled=move || !is_editing.get()
                            />
                        </div>
                        <div class="form-group">
                            <label>"Employee ID"</label>
                            <input type="text" prop:value=field(|info| info.emp_id.clone()) disabled=true/>
                        </div>
                    </div>
                    <Show
                        when=move || is_editing.get()
                        fallback=move || view! {
                            <button type="button" class="edit-btn" on:click=move |_| form.begin_edit()>
                                <i class="fas fa-edit"></i>
                                " Edit Information"
                            </button>
                        }
                    >
                        <div class="form-actions">
                            <button type="button" on:click=move |_| on_cancel.call(())>"Cancel"</button>
                            <button type="submit" disabled=move || pending.get()>"Save Changes"</button>
                        </div>
                    </Show>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn read_only_until_edit() {
        let html = render_to_string(|| {
            let form = ProfileFormState::default();
            form.load(PersonalInfo {
                name: "Ana Souza".into(),
                ..Default::default()
            });
            view! {
                <ProfilePanel
                    form=form
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Edit Information"));
        assert!(!html.contains("Save Changes"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn edit_mode_shows_save_and_cancel() {
        let html = render_to_string(|| {
            let form = ProfileFormState::default();
            form.begin_edit();
            view! {
                <ProfilePanel
                    form=form
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Save Changes"));
        assert!(html.contains("Cancel"));
        assert!(!html.contains("Edit Information"));
    }
}
