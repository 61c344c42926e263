use leptos::{create_effect, spawn_local, Callable, Callback};

use crate::{host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn install_boot(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        dispatch.call(DesktopAction::ViewportResized {
            viewport: host.viewport(),
        });
        dispatch.call(DesktopAction::PowerOn);

        let prefs = host.prefs_store();
        spawn_local(async move {
            let background = persistence::load_wallpaper_background(prefs.as_ref()).await;
            if background.is_some() {
                dispatch.call(DesktopAction::ApplyWallpaper { background });
            }
        });
    });
}
