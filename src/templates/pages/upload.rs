use crate::domain::Review;
use crate::templates::{card, desktop_layout, pages::review_table};
use maud::{html, Markup, PreEscaped};

/// Posts the picked file straight to the server and swaps in the new page body.
/// `main` is replaced on every upload, which also resets the file input.
const UPLOAD_SCRIPT: &str = r#"
(function () {
  let lastFile = null;
  const post = (path, file) =>
    fetch(path + '?filename=' + encodeURIComponent(file.name), { method: 'POST', body: file });

  document.addEventListener('change', async (e) => {
    if (e.target.id !== 'csv-file') return;
    const file = e.target.files[0];
    if (!file) return;
    const resp = await post('/upload', file);
    const doc = new DOMParser().parseFromString(await resp.text(), 'text/html');
    document.querySelector('main').replaceWith(doc.querySelector('main'));
    lastFile = resp.ok ? file : null;
    document.getElementById('export-btn').disabled = !lastFile;
  });

  document.addEventListener('click', async (e) => {
    if (e.target.closest('#update-btn')) {
      document.getElementById('csv-file').click();
    }
    if (e.target.closest('#export-btn') && lastFile) {
      const resp = await post('/export', lastFile);
      if (!resp.ok) return;
      const match = /filename="([^"]+)"/.exec(resp.headers.get('Content-Disposition') || '');
      const link = document.createElement('a');
      link.href = URL.createObjectURL(await resp.blob());
      link.download = match ? match[1] : 'review.xlsx';
      link.click();
      URL.revokeObjectURL(link.href);
    }
  });
})();
"#;

#[derive(Debug, Default)]
pub struct UploadVm {
    pub review: Option<Review>,
    pub error: Option<String>,
}

pub fn upload_page(vm: &UploadVm) -> Markup {
    let file_name = vm.review.as_ref().map(|r| r.summary.file_name.as_str());
    let total = vm.review.as_ref().map(|r| r.summary.total).unwrap_or(0);
    let publishable = vm.review.as_ref().map(|r| r.summary.publishable).unwrap_or(0);

    desktop_layout(
        "Bulk Upload",
        html! {
            main class="container" {
                (card("Bulk Upload form", html! {
                    h4 { "Choose an input method" }

                    @if let Some(err) = &vm.error {
                        div class="banner-error" role="alert" { (err) }
                    }

                    div class="upload" {
                        label for="csv-file" style="cursor: pointer;" {
                            strong { "CSV file" }
                            br;
                            span { (file_name.unwrap_or("Update listings from a CSV file")) }
                        }
                        input type="file" id="csv-file" name="file" accept=".csv" style="display: none;";
                    }
                }))

                div class="card overview" {
                    div class="count" title=(total) { (total) }
                    div class="grow" {
                        strong { "listings uploaded" }
                        @if total > 0 {
                            span class="muted" { " · " (publishable) " ready to publish" }
                        }
                    }
                    button type="button" id="update-btn" class="text" { "Update data" }
                    button type="button" id="export-btn" class="text" disabled[vm.review.is_none()] { "Export review" }
                    button type="button" class="text" disabled { "Published" }
                }

                @if let Some(review) = &vm.review {
                    (review_table(review))
                }
            }
            script { (PreEscaped(UPLOAD_SCRIPT)) }
        },
    )
}
