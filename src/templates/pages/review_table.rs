use crate::domain::{CellDisplay, Review, ReviewColumn, ReviewRow};
use crate::templates::components::status_tag;
use maud::{html, Markup};

pub fn review_table(review: &Review) -> Markup {
    html! {
        div style="overflow-x: auto;" {
            table class="review" {
                thead {
                    tr {
                        th {}
                        @for column in ReviewColumn::ALL {
                            th { (column.title()) }
                        }
                    }
                }
                tbody {
                    @for row in &review.rows {
                        (review_row(row))
                    }
                }
            }
        }
    }
}

fn review_row(row: &ReviewRow) -> Markup {
    html! {
        tr data-valid=(if row.valid { "true" } else { "false" }) {
            td style="text-align: center; width: 50px;" {
                span class=(if row.valid { "row-number" } else { "row-number error" }) { (row.number) }
            }
            @for column in ReviewColumn::ALL {
                td { (cell(column, row.display(column))) }
            }
        }
    }
}

fn cell(column: ReviewColumn, display: CellDisplay<'_>) -> Markup {
    html! {
        @match display {
            CellDisplay::Text(text) => { (text) }
            CellDisplay::PerMonth(text) => { (text) span class="muted" { "/month" } }
            CellDisplay::NotFound => { span class="not-found" { "not found" } }
            CellDisplay::Blank => {}
            CellDisplay::Image(url) => {
                img class="thumb" src=(url) alt=(url) onerror="this.style.display='none'";
            }
            CellDisplay::Tags(tags) => {
                @if column == ReviewColumn::Amenities {
                    (tags.len())
                    @if !tags.is_empty() {
                        details style="display: inline-block; margin-left: 4px;" {
                            summary { "Amenities" }
                            ul style="margin: 4px 0; padding-left: 16px;" {
                                @for tag in tags {
                                    li { (tag) }
                                }
                            }
                        }
                    }
                } @else {
                    @for tag in tags {
                        (status_tag(tag))
                    }
                }
            }
        }
    }
}
