use dioxus::prelude::*;

use crate::types::ContentItem;

/// Capabilities the surrounding dashboard framework injects: the design
/// flag that turns every grid editable, and the dispatch that renders one
/// content item. Provided once at the app root with
/// `use_context_provider`, never read from a global.
#[derive(Clone, PartialEq)]
pub struct DashboardHost {
    pub design: bool,
    pub render_component: Callback<ContentItem, Element>,
}

pub fn use_dashboard_host() -> DashboardHost {
    use_context::<DashboardHost>()
}
