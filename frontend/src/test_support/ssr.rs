use leptos::*;

/// Fresh reactive runtime for one test body.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

struct ResumeResourceLoads;

impl Drop for ResumeResourceLoads {
    fn drop(&mut self) {
        leptos_reactive::suppress_resource_load(false);
    }
}

/// Renders a view tree to HTML. Effects never run here, so pages render the
/// placeholders they show before their mount-time fetchers complete.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let _resume = ResumeResourceLoads;
    with_runtime(|| view().into_view().render_to_string().into_owned())
}
