use leptos::{component, view, IntoView, ReadSignal, WriteSignal, SignalWith, SignalUpdate, event_target_checked};

use crate::models::MapSettings;

#[component]
#[must_use]
pub fn MapControls(
    settings: ReadSignal<MapSettings>,
    set_settings: WriteSignal<MapSettings>,
) -> impl IntoView {
    view! {
        <div class="map-controls">
            <button
                on:click=move |_| set_settings.update(|s| s.projection = s.projection.toggled())
                title="Switch between real coordinates and an evenly spaced grid"
            >
                {move || format!("Projection: {}", settings.with(|s| s.projection.as_str()))}
            </button>
            <label>
                <input
                    type="checkbox"
                    checked=move || settings.with(|s| s.show_base_map)
                    on:change=move |ev| {
                        let show = event_target_checked(&ev);
                        set_settings.update(|s| s.show_base_map = show);
                    }
                />
                "Base map"
            </label>
        </div>
    }
}
