use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use platform_host_web::build_host_services;

const DESKTOP_STYLES: &str = include_str!("../assets/desktop.css");

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Web Desktop" />
        <Meta name="description" content="A desktop-style window manager running in the browser." />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />
        <Style>{DESKTOP_STYLES}</Style>

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host_services=build_host_services()>
            <DesktopShell />
        </DesktopProvider>
    }
}
