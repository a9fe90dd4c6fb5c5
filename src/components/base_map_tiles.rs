use leptos::{component, view, IntoView};

use crate::projection::Bounds;
use crate::tiles::{covering_tiles, tile_rect, tile_url};

/// Base-map images behind the map, one per tile covering `bounds`
#[component]
#[must_use]
pub fn BaseMapTiles(
    bounds: Bounds,
    zoom: i32,
    base_map_id: String,
    tiles_root: String,
) -> impl IntoView {
    let tiles = covering_tiles(&bounds, zoom);

    view! {
        <g class="base-map-tiles">
            {tiles
                .into_iter()
                .map(|tile| {
                    let rect = tile_rect(tile, zoom);
                    view! {
                        <image
                            href=tile_url(&tiles_root, &base_map_id, zoom, tile)
                            x=rect.west
                            y=rect.north
                            width=rect.width
                            height=rect.height
                        />
                    }
                })
                .collect::<Vec<_>>()}
        </g>
    }
}
