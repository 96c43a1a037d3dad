use maud::{html, Markup};

pub mod error;
pub mod tag;

pub use error::error_page;
pub use tag::status_tag;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
