use chrono::Local;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_leaflet::{leaflet::Map, prelude::*};
use shared_types::EventFeed;

use crate::{
    config::AppConfig,
    events::{fit_to_bounds, tile_attribution, MapScene, ProjectionContext},
    server::fetch_event_feed,
    views::map::event_marker::EventMarkerPin,
};

#[component]
pub fn EventMap() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let settings = config.map.clone();
    let strings = config.strings.clone();
    let timestamp_format = config.timestamp_format.clone();
    let context = StoredValue::new(ProjectionContext::from_config(
        &config,
        Local::now().date_naive(),
    ));

    let feed = Resource::new(|| (), |_| async move { fetch_event_feed().await });

    Effect::new(move |_| {
        if let Some(Err(err)) = feed.get() {
            warn!("Error occurred while fetching events: {}", err);
        }
    });

    // A failed fetch renders like an empty table.
    let snapshot: Memo<EventFeed> = Memo::new(move |_| match feed.get() {
        Some(Ok(feed)) => feed,
        _ => EventFeed::default(),
    });

    let scene: Memo<MapScene> = Memo::new(move |_| {
        snapshot.with(|feed| context.with_value(|ctx| MapScene::build(&feed.events, ctx)))
    });
    let bounds = Memo::new(move |_| scene.with(|scene| scene.bounds));

    let attribution = Memo::new(move |_| {
        snapshot.with(|feed| {
            tile_attribution(
                &settings.attribution,
                &strings.last_updated,
                feed.updated_at.as_deref(),
                &timestamp_format,
            )
        })
    });

    let map: JsRwSignal<Option<Map>> = JsRwSignal::new_local(None::<Map>);

    Effect::new(move |_| {
        let Some(map) = map.get() else {
            return;
        };
        let bounds = bounds.get();
        if fit_to_bounds(&map, &bounds) {
            log!("Fitting map to {:?}", bounds);
        }
    });

    let (lat, lon) = config.map.center;
    let tile_url = config.map.tile_url.clone();

    view! {
        <div class="event-map" style=format!("height: {}; width: 100%", config.map.height)>
            <MapContainer
                style="height: 100%; width: 100%"
                center=Position::new(lat, lon)
                zoom=config.map.zoom
                set_view=true
                map=map.write_only()
            >
                {move || view! {
                    <TileLayer url=tile_url.clone() attribution=attribution.get() />
                }}
                {move || {
                    scene
                        .with(|scene| scene.markers.clone())
                        .into_iter()
                        .map(|marker| view! { <EventMarkerPin marker /> })
                        .collect_view()
                }}
            </MapContainer>
        </div>
    }
}
