use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes, A},
    StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::*;

use crate::components::error::ConfigErrorView;
use crate::config::AppConfig;
use crate::views::{legend::LegendPage, map::event_map::EventMap};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let body_class = AppConfig::embedded()
        .map(|config| config.body_class)
        .unwrap_or_default();

    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="fr">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"
                />
                <script
                    src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"
                    defer
                ></script>
                <body class=body_class>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = AppConfig::embedded();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/kitchen-map.css"/>

        <ConfigProvider>
            {match config {
                Ok(config) => {
                    let title = config.strings.page_title.clone();
                    let not_found = config.strings.not_found.clone();
                    provide_context(config);
                    view! {
                        <Title text=title/>
                        <Router>
                            <main>
                                <Routes fallback=move || not_found.clone()>
                                    <Route path=StaticSegment("") view=HomePage/>
                                    <Route path=StaticSegment("legende") view=LegendPage/>
                                </Routes>
                            </main>
                        </Router>
                    }
                    .into_any()
                }
                Err(error) => view! {
                    <ConfigErrorView error />
                }
                .into_any(),
            }}
        </ConfigProvider>
    }
}

/// Title, the event map, and a link to the icon legend.
#[component]
fn HomePage() -> impl IntoView {
    let strings = expect_context::<AppConfig>().strings;

    view! {
        <div class="home-page">
            <h1 class="page-title">{strings.page_title}</h1>
            <EventMap/>
            <p class="legend-link">
                <A href="/legende">{strings.legend_title}</A>
            </p>
        </div>
    }
}
