use leptos::{
    component, create_effect, create_local_resource, create_memo, create_signal, view, Callback,
    IntoView, SignalGet, SignalSet, SignalWith,
};
use leptos_meta::{provide_meta_context, Stylesheet, Title};

use super::map_controls::MapControls;
use super::rail_map::RailMap;
use super::tooltip::{Hover, Tooltip};
use crate::api::fetch_sheet_tsv;
use crate::import::parse_tsv;
use crate::layout::MapLayout;
use crate::models::MapSettings;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (settings, set_settings) = create_signal(MapSettings::load());

    create_effect(move |_| {
        settings.with(|s| {
            if let Err(e) = s.save() {
                leptos::logging::error!("Failed to save map settings: {}", e);
            }
        });
    });

    // Fetched once per sheet URL, never revalidated
    let sheet_url = create_memo(move |_| settings.with(|s| s.sheet_url.clone()));
    let sheet_text = create_local_resource(
        move || sheet_url.get(),
        |url| async move {
            match fetch_sheet_tsv(&url).await {
                Ok(text) => Some(text),
                Err(e) => {
                    leptos::logging::error!("Failed to load rail sheet: {}", e);
                    None
                }
            }
        },
    );

    let world = create_memo(move |_| {
        let text = sheet_text.get().flatten();
        parse_tsv(text.as_deref())
    });

    let projection_kind = create_memo(move |_| settings.with(|s| s.projection));
    let layout = create_memo(move |_| {
        world.with(|world| {
            world
                .as_ref()
                .map(|world| MapLayout::compute(world, projection_kind.get()))
        })
    });

    let (hover_node, set_hover_node) = create_signal(None::<Hover>);
    let (hover_region, set_hover_region) = create_signal(None::<Hover>);
    let on_hover_node = Callback::new(move |hover: Option<Hover>| set_hover_node.set(hover));
    let on_hover_region = Callback::new(move |hover: Option<Hover>| set_hover_region.set(hover));

    let node_count = move || world.with(|world| world.as_ref().map_or(0, crate::models::World::len));
    let nodes_json = move || {
        world.with(|world| {
            world
                .as_ref()
                .and_then(|world| serde_json::to_string_pretty(world).ok())
                .unwrap_or_default()
        })
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/rail_map.css"/>
        <Title text="Rail Map"/>

        <div class="app">
            {move || {
                if world.with(Option::is_none) {
                    return view! { <div>"Loading rails ..."</div> }.into_view();
                }

                view! {
                    <div>
                        <p>{move || format!("found {} nodes", node_count())}</p>
                        <MapControls settings=settings set_settings=set_settings/>
                        {move || layout.get().map(|layout| view! {
                            <RailMap
                                layout=layout
                                settings=settings
                                on_hover_node=on_hover_node
                                on_hover_region=on_hover_region
                            />
                        })}
                        <pre>{nodes_json}</pre>
                        {move || {
                            hover_node
                                .get()
                                .or_else(|| hover_region.get())
                                .map(|hover| view! {
                                    <Tooltip anchor=hover.anchor>{hover.id}</Tooltip>
                                })
                        }}
                    </div>
                }.into_view()
            }}
        </div>
    }
}
