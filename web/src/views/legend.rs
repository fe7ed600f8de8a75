use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

use crate::config::AppConfig;
use crate::events::{MarkerIcon, MarkerIcons};

/// One line of the legend: how a type looks before and after its date.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    pub label: String,
    pub past: MarkerIcon,
    pub upcoming: MarkerIcon,
}

/// Configured types in configuration order, then the fallback icon, then
/// the undated pin. Undated events are neither past nor upcoming and share
/// one neutral pin whatever their type, so that row shows it in both columns.
pub fn legend_rows(config: &AppConfig) -> Vec<LegendRow> {
    let icons = MarkerIcons::from_settings(&config.icons);
    config
        .icons
        .types
        .iter()
        .map(|entry| LegendRow {
            label: entry.event_type.clone(),
            past: icons.past.lookup(&entry.event_type).clone(),
            upcoming: icons.upcoming.lookup(&entry.event_type).clone(),
        })
        .chain([
            LegendRow {
                label: config.strings.legend_default.clone(),
                past: icons.past.default_icon().clone(),
                upcoming: icons.upcoming.default_icon().clone(),
            },
            LegendRow {
                label: config.strings.legend_undated.clone(),
                past: icons.undated.default_icon().clone(),
                upcoming: icons.undated.default_icon().clone(),
            },
        ])
        .collect()
}

#[component]
fn LegendIcon(icon: MarkerIcon, alt: String) -> impl IntoView {
    let (width, height) = icon.size;
    view! {
        <img src=icon.url alt=alt width=width.to_string() height=height.to_string() class=icon.class_name />
    }
}

#[component]
pub fn LegendPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let strings = config.strings.clone();
    let rows = legend_rows(&config);

    view! {
        <div class="legend-page">
            <h1 class="page-title">{strings.legend_title.clone()}</h1>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>{strings.legend_past.clone()}</TableHeaderCell>
                        <TableHeaderCell>{strings.legend_upcoming.clone()}</TableHeaderCell>
                        <TableHeaderCell>{strings.legend_type.clone()}</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let alt = format!("{} {}", strings.icon_alt, row.label);
                            let alt_past = alt.clone();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <LegendIcon icon=row.past alt=alt_past />
                                    </TableCell>
                                    <TableCell>
                                        <LegendIcon icon=row.upcoming alt />
                                    </TableCell>
                                    <TableCell>{row.label}</TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
            <A href="/">{strings.legend_back.clone()}</A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_type_plus_fallback_and_undated() {
        let config = AppConfig::embedded().unwrap();
        let icons = MarkerIcons::from_settings(&config.icons);
        let rows = legend_rows(&config);

        assert_eq!(rows.len(), config.icons.types.len() + 2);
        assert_eq!(rows[0].label, config.icons.types[0].event_type);

        let (dated, tail) = rows.split_at(rows.len() - 1);
        for row in dated {
            assert_ne!(row.past.url, row.upcoming.url);
            assert_eq!(row.past.class_name, config.icons.past_class);
            assert_eq!(row.upcoming.class_name, config.icons.active_class);
        }
        assert_eq!(dated.last().unwrap().label, config.strings.legend_default);
        assert_eq!(&dated.last().unwrap().past, icons.past.default_icon());

        let undated = &tail[0];
        assert_eq!(undated.label, config.strings.legend_undated);
        assert_eq!(&undated.past, icons.undated.default_icon());
        assert_eq!(&undated.upcoming, icons.undated.default_icon());
        assert_eq!(undated.past.class_name, config.icons.undated_class);
    }

    #[test]
    fn legend_pins_are_the_map_pins() {
        let config = AppConfig::embedded().unwrap();
        let icons = MarkerIcons::from_settings(&config.icons);
        let first = &config.icons.types[0].event_type;
        let row = &legend_rows(&config)[0];

        assert_eq!(&row.past, icons.past.lookup(first));
        assert_eq!(&row.upcoming, icons.upcoming.lookup(first));
    }
}
