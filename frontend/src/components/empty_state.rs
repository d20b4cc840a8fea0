use leptos::*;

/// Single full-width table row shown when a table has no records.
#[component]
pub fn EmptyTableRow(colspan: u32, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <tr class="empty-row">
            <td colspan=colspan.to_string()>
                <i class="fas fa-inbox"></i>
                " "
                {message}
            </td>
        </tr>
    }
}

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <i class="fas fa-folder-open"></i>
            <h3>{title}</h3>
            {description.map(|desc| view! { <p>{desc}</p> })}
        </div>
    }
}
