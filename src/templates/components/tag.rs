use crate::domain::labels::AGENT_POST_LABEL;
use maud::{html, Markup};

/// Agent posts are green, everything else gold.
pub fn status_tag(label: &str) -> Markup {
    let color = if label == AGENT_POST_LABEL { "green" } else { "gold" };
    html! {
        span class=(format!("tag {color}")) { (label) }
    }
}
