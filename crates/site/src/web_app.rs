use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

const DESKTOP_CSS: &str = include_str!("desktop.css");

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Desktop" />
        <Meta name="description" content="A desktop-style window manager running in the browser." />
        <Style>{DESKTOP_CSS}</Style>

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}
