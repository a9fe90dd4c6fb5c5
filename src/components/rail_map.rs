use leptos::{component, view, Callable, Callback, IntoView, ReadSignal, SignalWith};

use super::base_map_tiles::BaseMapTiles;
use super::tooltip::Hover;
use crate::layout::MapLayout;
use crate::logging::log;
use crate::models::MapSettings;
use crate::projection::ProjectionKind;

/// SVG map of all nodes: Voronoi regions underneath, markers and labels on top
#[component]
#[must_use]
pub fn RailMap(
    layout: MapLayout,
    settings: ReadSignal<MapSettings>,
    on_hover_node: Callback<Option<Hover>>,
    on_hover_region: Callback<Option<Hover>>,
) -> impl IntoView {
    let view_box = layout.view_box;
    let radius = layout.marker_radius();
    let (label_dx, label_dy) = layout.label_offset();
    let scale = layout.scale;
    let stroke_width = layout.stroke_width;
    let draws_real_coordinates = layout.projection.kind() == ProjectionKind::Real;

    // Tiles are in world units and only line up with the real projection
    let base_map = move || {
        settings.with(|s| {
            (draws_real_coordinates && s.show_base_map).then(|| {
                view! {
                    <BaseMapTiles
                        bounds=view_box
                        zoom=s.tile_zoom
                        base_map_id=s.base_map_id.clone()
                        tiles_root=s.tiles_root.clone()
                    />
                }
            })
        })
    };

    let regions = layout
        .nodes
        .iter()
        .filter_map(|placed| {
            let cell = layout.regions.get(&placed.node.id)?;
            let id = placed.node.id.clone();
            Some(view! {
                <polygon
                    points=cell.svg_points()
                    fill="blue"
                    fill-opacity=0.3
                    stroke="black"
                    stroke-width=stroke_width
                    on:mousemove=move |ev| on_hover_region.call(Some(Hover::from_event(&id, &ev)))
                    on:mouseleave=move |_| on_hover_region.call(None)
                />
            })
        })
        .collect::<Vec<_>>();

    let markers = layout
        .nodes
        .iter()
        .map(|placed| {
            let id = placed.node.id.clone();
            let class = if placed.node.is_station() { "node station" } else { "node junction" };
            #[cfg(any(debug_assertions, feature = "console_logging"))]
            let clicked = placed.node.clone();
            view! {
                <circle
                    class=class
                    cx=placed.position.0
                    cy=placed.position.1
                    r=radius
                    fill="red"
                    stroke="none"
                    on:click=move |_| {
                        log!("clicked {:?}", clicked);
                    }
                    on:mousemove=move |ev| on_hover_node.call(Some(Hover::from_event(&id, &ev)))
                    on:mouseleave=move |_| on_hover_node.call(None)
                />
            }
        })
        .collect::<Vec<_>>();

    let labels = layout
        .nodes
        .iter()
        .map(|placed| {
            view! {
                <text
                    x=placed.position.0
                    y=placed.position.1
                    dx=label_dx
                    dy=label_dy
                    font-size=scale
                    fill="black"
                >
                    {placed.node.id.clone()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <svg
            class="rail-map"
            width="100%"
            height="80vh"
            viewBox=view_box.view_box()
        >
            {base_map}
            <g class="regions">{regions}</g>
            <g class="markers">{markers}</g>
            <g class="labels">{labels}</g>
        </svg>
    }
}
