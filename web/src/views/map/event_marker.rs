use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor, Label, LabelSize};

use crate::events::{EventMarker, PopupBlock, PopupContent, Visibility};

#[component]
pub fn EventMarkerPin(marker: EventMarker) -> impl IntoView {
    let EventMarker {
        position: (lat, lon),
        icon,
        popup,
        ..
    } = marker;

    view! {
        <Marker
            position=Position::new(lat, lon)
            draggable=false
            icon_url=Some(icon.url)
            icon_size=Some(icon.size)
            icon_anchor=Some(icon.anchor)
        >
            <Popup>
                <EventPopup content=popup class_name=icon.class_name />
            </Popup>
        </Marker>
    }
}

#[component]
pub fn EventPopup(content: PopupContent, #[prop(into)] class_name: String) -> impl IntoView {
    view! {
        <div class=format!("event-popup {class_name}")>
            {content.blocks.into_iter().map(popup_block).collect_view()}
        </div>
    }
}

fn popup_block(block: PopupBlock) -> AnyView {
    match block {
        PopupBlock::Badge { visibility, label } => {
            let color = match visibility {
                Visibility::Public => BadgeColor::Success,
                Visibility::Private => BadgeColor::Informative,
            };
            view! {
                <div class="popup-badge">
                    <Badge appearance=BadgeAppearance::Filled color>{label}</Badge>
                </div>
            }
            .into_any()
        }
        PopupBlock::Title(title) => view! {
            <Label size=LabelSize::Large>{title}</Label>
        }
        .into_any(),
        PopupBlock::Date(date) => view! {
            <p class="popup-date">{date}</p>
        }
        .into_any(),
        PopupBlock::Description(description) => view! {
            <p class="popup-description">{description}</p>
        }
        .into_any(),
        PopupBlock::RemainingSeats { label, count } => view! {
            <p class="popup-seats">{format!("{}: {}", label, count)}</p>
        }
        .into_any(),
        PopupBlock::Municipality(municipality) => view! {
            <div class="popup-municipality">
                <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24"
                     fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <path d="M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0"/>
                    <circle cx="12" cy="10" r="3"/>
                </svg>
                <span>{municipality}</span>
            </div>
        }
        .into_any(),
        PopupBlock::Actions(actions) => view! {
            <div class="popup-actions">
                {actions
                    .into_iter()
                    .map(|action| view! {
                        <a href=action.href target="_blank" rel="noopener" class="popup-action">
                            {action.label}
                        </a>
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}
