use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f5f5f5; color: #000; }
header { display: flex; align-items: center; gap: 12px; padding: 12px 24px; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
main.container { max-width: 1400px; margin: 24px auto; padding: 0 16px; }
.card { background: #fff; border: 1px solid #f0f0f0; padding: 24px; margin-bottom: 24px; }
.card h2 { margin-top: 0; }
.banner-error { background: #fff1f0; border: 1px solid #ffa39e; color: #cf1322; padding: 12px 16px; margin-bottom: 16px; }
.overview { display: flex; align-items: center; gap: 16px; }
.overview .count { min-width: 72px; text-align: center; font-size: 1.5rem; font-weight: 700; background: rgba(0,0,0,0.05); padding: 16px 0; }
.overview .grow { flex: 1; }
table.review { width: 100%; border-collapse: collapse; background: #fff; font-weight: 500; }
table.review th { text-align: left; color: rgba(0,0,0,0.3); font-size: 0.85em; padding: 12px 8px; border-bottom: 2px solid #f0f0f0; }
table.review td { padding: 8px; border-bottom: 1px solid #f3f4f6; max-width: 300px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.row-number { color: rgba(0,0,0,0.3); }
.row-number.error { color: #fff; background: #f5222d; border-radius: 8px; padding: 4px 8px; }
.not-found { color: #f5222d; }
.muted { color: rgba(0,0,0,0.3); }
.tag { display: inline-block; border-radius: 8px; padding: 4px 8px; margin-right: 4px; font-size: 0.85em; }
.tag.green { background: #f6ffed; color: #389e0d; }
.tag.gold { background: #fffbe6; color: #d48806; }
.thumb { width: 34px; height: 34px; border-radius: 8px; object-fit: cover; }
button.text { background: none; border: none; cursor: pointer; color: #1890ff; font-size: 1rem; }
button.text:disabled { color: rgba(0,0,0,0.25); cursor: not-allowed; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { "Listing Bulk Upload" }
                }
                (content)
            }
        }
    }
}
