//! Popup content as an ordered list of optional blocks.
//!
//! | block            | shown when                                         |
//! |------------------|----------------------------------------------------|
//! | badge            | always                                             |
//! | title            | event name non-empty                               |
//! | date             | assembly date non-empty                            |
//! | description      | description non-empty                              |
//! | remaining seats  | seat count present, primary type and upcoming      |
//! | municipality     | municipality non-empty                             |
//! | view event       | event URL non-empty                                |
//! | ticketing        | ticketing URL non-empty                            |
//! | contact          | public action and confirmation email provided      |
//! | register         | primary event type and upcoming                    |

use shared_types::EventFields;

use crate::config::{FormLinks, Strings};
use crate::events::classify::{parse_event_date, TemporalStatus, Visibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    ViewEvent,
    Ticketing,
    Contact,
    Register,
}

impl ActionKind {
    pub const ALL: [ActionKind; 4] = [
        ActionKind::ViewEvent,
        ActionKind::Ticketing,
        ActionKind::Contact,
        ActionKind::Register,
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionLink {
    pub kind: ActionKind,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupBlock {
    Badge {
        visibility: Visibility,
        label: String,
    },
    Title(String),
    Date(String),
    Description(String),
    RemainingSeats {
        label: String,
        count: u32,
    },
    Municipality(String),
    Actions(Vec<ActionLink>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopupContent {
    pub blocks: Vec<PopupBlock>,
}

/// Inputs the gates look at when building one popup.
pub struct PopupInput<'a> {
    pub fields: &'a EventFields,
    pub status: TemporalStatus,
    pub primary_event_type: &'a str,
    pub date_format: &'a str,
    pub forms: &'a FormLinks,
    pub strings: &'a Strings,
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn non_empty_opt(value: Option<&String>) -> Option<&str> {
    value.and_then(|v| non_empty(v))
}

impl PopupInput<'_> {
    fn is_open_primary(&self) -> bool {
        self.fields.event_type == self.primary_event_type
            && self.status == TemporalStatus::Upcoming
    }

    fn formatted_date(&self) -> Option<String> {
        let raw = non_empty(&self.fields.assembly_date)?;
        Some(match parse_event_date(raw) {
            Some(date) => date.format(self.date_format).to_string(),
            None => raw.to_string(),
        })
    }

    /// Target of an action button, or `None` when its gate is closed.
    fn action_href(&self, kind: ActionKind) -> Option<String> {
        let fields = self.fields;
        match kind {
            ActionKind::ViewEvent => non_empty_opt(fields.event_url.as_ref()).map(str::to_string),
            ActionKind::Ticketing => {
                non_empty_opt(fields.ticketing_url.as_ref()).map(str::to_string)
            }
            ActionKind::Contact => (fields.is_public_action && fields.confirmed_email_provided)
                .then(|| self.forms.contact_url.clone()),
            ActionKind::Register => self
                .is_open_primary()
                .then(|| self.forms.registration_url.clone()),
        }
    }

    fn action_label(&self, kind: ActionKind) -> &str {
        match kind {
            ActionKind::ViewEvent => &self.strings.view_event,
            ActionKind::Ticketing => &self.strings.ticketing,
            ActionKind::Contact => &self.strings.contact,
            ActionKind::Register => &self.strings.register,
        }
    }
}

impl PopupContent {
    pub fn build(input: &PopupInput<'_>) -> Self {
        let fields = input.fields;
        let mut blocks = Vec::new();

        let visibility = Visibility::from_public_action(fields.is_public_action);
        let badge_label = match visibility {
            Visibility::Public => &input.strings.badge_public,
            Visibility::Private => &input.strings.badge_private,
        };
        blocks.push(PopupBlock::Badge {
            visibility,
            label: badge_label.clone(),
        });

        if let Some(name) = non_empty(&fields.event_name) {
            blocks.push(PopupBlock::Title(name.to_string()));
        }
        if let Some(date) = input.formatted_date() {
            blocks.push(PopupBlock::Date(date));
        }
        if let Some(description) = non_empty(&fields.description) {
            blocks.push(PopupBlock::Description(description.to_string()));
        }
        if let Some(count) = fields.remaining_seats.filter(|_| input.is_open_primary()) {
            blocks.push(PopupBlock::RemainingSeats {
                label: input.strings.remaining_seats.clone(),
                count,
            });
        }
        if let Some(municipality) = non_empty(&fields.municipality) {
            blocks.push(PopupBlock::Municipality(municipality.to_string()));
        }

        let actions: Vec<ActionLink> = ActionKind::ALL
            .into_iter()
            .filter_map(|kind| {
                input.action_href(kind).map(|href| ActionLink {
                    kind,
                    label: input.action_label(kind).to_string(),
                    href,
                })
            })
            .collect();
        if !actions.is_empty() {
            blocks.push(PopupBlock::Actions(actions));
        }

        Self { blocks }
    }

    pub fn actions(&self) -> &[ActionLink] {
        self.blocks
            .iter()
            .find_map(|block| match block {
                PopupBlock::Actions(actions) => Some(actions.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn has_action(&self, kind: ActionKind) -> bool {
        self.actions().iter().any(|action| action.kind == kind)
    }

    pub fn remaining_seats(&self) -> Option<u32> {
        self.blocks.iter().find_map(|block| match block {
            PopupBlock::RemainingSeats { count, .. } => Some(*count),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    const PRIMARY: &str = "Assemblée de cuisine";

    fn build(fields: &EventFields, status: TemporalStatus) -> PopupContent {
        let config = AppConfig::embedded().unwrap();
        PopupContent::build(&PopupInput {
            fields,
            status,
            primary_event_type: PRIMARY,
            date_format: "%d/%m/%Y",
            forms: &config.forms,
            strings: &config.strings,
        })
    }

    #[test]
    fn contact_only_when_public_with_confirmed_email() {
        let fields = EventFields {
            is_public_action: true,
            confirmed_email_provided: true,
            event_url: Some(String::new()),
            ticketing_url: Some(String::new()),
            event_type: "Atelier".to_string(),
            ..EventFields::default()
        };
        let popup = build(&fields, TemporalStatus::Upcoming);

        let kinds: Vec<ActionKind> = popup.actions().iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![ActionKind::Contact]);
        assert_eq!(
            popup.actions()[0].href,
            AppConfig::embedded().unwrap().forms.contact_url
        );
    }

    #[test]
    fn contact_hidden_without_confirmed_email() {
        let fields = EventFields {
            is_public_action: true,
            ..EventFields::default()
        };
        let popup = build(&fields, TemporalStatus::Upcoming);
        assert!(!popup.has_action(ActionKind::Contact));
        assert!(popup.actions().is_empty());
    }

    #[test]
    fn links_follow_their_urls() {
        let fields = EventFields {
            event_url: Some("https://example.org/evenement".to_string()),
            ticketing_url: Some("https://example.org/billets".to_string()),
            ..EventFields::default()
        };
        let popup = build(&fields, TemporalStatus::Past);
        let hrefs: Vec<&str> = popup.actions().iter().map(|a| a.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec!["https://example.org/evenement", "https://example.org/billets"]
        );
    }

    #[test]
    fn seats_and_registration_only_for_upcoming_primary_events() {
        let fields = EventFields {
            event_type: PRIMARY.to_string(),
            remaining_seats: Some(0),
            ..EventFields::default()
        };

        let upcoming = build(&fields, TemporalStatus::Upcoming);
        assert_eq!(upcoming.remaining_seats(), Some(0));
        assert!(upcoming.has_action(ActionKind::Register));

        for status in [TemporalStatus::Past, TemporalStatus::Unknown] {
            let popup = build(&fields, status);
            assert_eq!(popup.remaining_seats(), None);
            assert!(!popup.has_action(ActionKind::Register));
        }

        let other = EventFields {
            event_type: "Atelier".to_string(),
            remaining_seats: Some(12),
            ..EventFields::default()
        };
        let popup = build(&other, TemporalStatus::Upcoming);
        assert_eq!(popup.remaining_seats(), None);
        assert!(!popup.has_action(ActionKind::Register));
    }

    #[test]
    fn absent_seat_count_hides_the_seats_block() {
        let unknown = EventFields {
            event_type: PRIMARY.to_string(),
            remaining_seats: None,
            ..EventFields::default()
        };
        let popup = build(&unknown, TemporalStatus::Upcoming);
        assert_eq!(popup.remaining_seats(), None);
        assert!(!popup
            .blocks
            .iter()
            .any(|block| matches!(block, PopupBlock::RemainingSeats { .. })));
        // Registration does not depend on the seat column.
        assert!(popup.has_action(ActionKind::Register));

        let sold_out = EventFields {
            remaining_seats: Some(0),
            ..unknown
        };
        assert_eq!(
            build(&sold_out, TemporalStatus::Upcoming).remaining_seats(),
            Some(0)
        );
    }

    #[test]
    fn empty_record_still_gets_a_badge() {
        let popup = build(&EventFields::default(), TemporalStatus::Unknown);
        assert_eq!(
            popup.blocks,
            vec![PopupBlock::Badge {
                visibility: Visibility::Private,
                label: "Privé".to_string(),
            }]
        );
    }

    #[test]
    fn blocks_keep_display_order() {
        let fields = EventFields {
            event_name: "Soupe populaire".to_string(),
            event_type: PRIMARY.to_string(),
            assembly_date: "2024-06-20".to_string(),
            municipality: "Rimouski".to_string(),
            description: "  Apportez vos bols.  ".to_string(),
            remaining_seats: Some(3),
            is_public_action: true,
            ..EventFields::default()
        };
        let popup = build(&fields, TemporalStatus::Upcoming);

        assert_eq!(popup.blocks[1], PopupBlock::Title("Soupe populaire".to_string()));
        assert_eq!(popup.blocks[2], PopupBlock::Date("20/06/2024".to_string()));
        assert_eq!(
            popup.blocks[3],
            PopupBlock::Description("Apportez vos bols.".to_string())
        );
        assert!(matches!(
            popup.blocks[4],
            PopupBlock::RemainingSeats { count: 3, .. }
        ));
        assert_eq!(popup.blocks[5], PopupBlock::Municipality("Rimouski".to_string()));
        assert!(matches!(popup.blocks[6], PopupBlock::Actions(_)));
    }

    #[test]
    fn unparsable_date_is_shown_verbatim() {
        let fields = EventFields {
            assembly_date: "fin juin".to_string(),
            ..EventFields::default()
        };
        let popup = build(&fields, TemporalStatus::Unknown);
        assert!(popup.blocks.contains(&PopupBlock::Date("fin juin".to_string())));
    }
}
