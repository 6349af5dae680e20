use askama::Template;

use crate::types::activity::ActivityCatalog;
use crate::types::form::RemovalTarget;

pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load activities. Please try again later.";
pub const OPTION_PLACEHOLDER: &str = "-- Select an activity --";

/// Matches the removal button rendered next to each participant.
pub const REMOVAL_CONTROL_SELECTOR: &str = ".participant-delete";
pub const DATA_ACTIVITY: &str = "data-activity";
pub const DATA_EMAIL: &str = "data-email";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityListView {
    pub cards: Vec<ActivityCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    pub removal: RemovalTarget,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityOption {
    pub value: String,
    pub label: String,
}

impl ActivityOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: OPTION_PLACEHOLDER.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

impl ActivityListView {
    pub fn from_catalog(catalog: &ActivityCatalog) -> Self {
        let cards = catalog
            .iter()
            .map(|(name, activity)| ActivityCard {
                name: name.to_string(),
                description: activity.description.clone(),
                schedule: activity.schedule.clone(),
                spots_left: activity.spots_left(),
                participants: activity
                    .participants
                    .iter()
                    .map(|email| ParticipantRow {
                        email: email.clone(),
                        removal: RemovalTarget::new(name, email.as_str()),
                    })
                    .collect(),
            })
            .collect();
        Self { cards }
    }

    pub fn removal_controls(&self) -> impl Iterator<Item = &RemovalTarget> {
        self.cards
            .iter()
            .flat_map(|card| card.participants.iter().map(|row| &row.removal))
    }

    pub fn find_removal(&self, activity: &str, email: &str) -> Option<&RemovalTarget> {
        self.removal_controls()
            .find(|target| target.activity == activity && target.email == email)
    }
}

/// Selector options for a catalog: the placeholder followed by one option per
/// activity.
pub fn activity_options(catalog: &ActivityCatalog) -> Vec<ActivityOption> {
    std::iter::once(ActivityOption::placeholder())
        .chain(catalog.names().map(|name| ActivityOption {
            value: name.to_string(),
            label: name.to_string(),
        }))
        .collect()
}

/// Reads back the target a rendered removal control was bound to. `attribute`
/// looks up an attribute of the control by name and yields its decoded value.
pub fn removal_target_from_attributes(
    attribute: impl Fn(&str) -> Option<String>,
) -> Option<RemovalTarget> {
    Some(RemovalTarget::new(
        attribute(DATA_ACTIVITY)?,
        attribute(DATA_EMAIL)?,
    ))
}

#[derive(Template)]
#[template(path = "activities.html")]
pub(crate) struct ActivityListHtml<'a> {
    pub(crate) view: &'a ActivityListView,
}

#[derive(Template)]
#[template(path = "activities.txt", escape = "none")]
pub(crate) struct ActivityListText<'a> {
    pub(crate) view: &'a ActivityListView,
}

pub fn render_html(view: &ActivityListView) -> askama::Result<String> {
    ActivityListHtml { view }.render()
}

pub fn render_text(view: &ActivityListView) -> askama::Result<String> {
    ActivityListText { view }.render()
}
