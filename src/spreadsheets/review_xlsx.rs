use crate::domain::{Review, ReviewColumn};
use crate::errors::ServerError;
use crate::responses::{xlsx_response, ResultResp};
use chrono::{NaiveDate, Utc};
use rust_xlsxwriter::Workbook;

/// `listings.csv` on 2026-10-17 becomes `listings_review_20261017.xlsx`.
/// Quotes, slashes and control characters are replaced so the name is safe
/// inside a `Content-Disposition` header.
pub fn review_filename(upload_name: &str, date: NaiveDate) -> String {
    let stem: String = upload_name
        .strip_suffix(".csv")
        .unwrap_or(upload_name)
        .chars()
        .map(|c| match c {
            '"' | '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{stem}_review_{}.xlsx", date.format("%Y%m%d"))
}

/// Writes the review table to an in-memory workbook: row number, verdict,
/// then one column per review column.
pub fn write_review_workbook(review: &Review) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let mut headers = vec!["#", "Ready to publish"];
    headers.extend(ReviewColumn::ALL.iter().map(|c| c.title()));

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, row) in review.rows.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_number(r, 0, row.number as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write row number: {}", e)))?;

        worksheet
            .write_string(r, 1, if row.valid { "Yes" } else { "No" })
            .map_err(|e| ServerError::XlsxError(format!("Failed to write verdict: {}", e)))?;

        for (offset, column) in ReviewColumn::ALL.into_iter().enumerate() {
            let text = row.display(column).plain_text();
            worksheet
                .write_string(r, (offset + 2) as u16, &text)
                .map_err(|e| {
                    ServerError::XlsxError(format!("Failed to write {}: {}", column.title(), e))
                })?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_review_xlsx(review: &Review) -> ResultResp {
    let buffer = write_review_workbook(review)?;
    let filename = review_filename(&review.summary.file_name, Utc::now().date_naive());
    xlsx_response(buffer, &filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{build_review, RawListingRecord};

    #[test]
    fn filename_uses_upload_stem_and_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        assert_eq!(
            review_filename("listings.csv", date),
            "listings_review_20261017.xlsx"
        );
        assert_eq!(
            review_filename("a\"b.csv", date),
            "a_b_review_20261017.xlsx"
        );
        assert_eq!(
            review_filename("line\r\nbreak\t.csv", date),
            "line__break__review_20261017.xlsx"
        );
    }

    #[test]
    fn workbook_is_a_zip_archive() {
        let review = build_review(
            "a.csv",
            vec![RawListingRecord {
                name: Some("Ideo Q".into()),
                agent_post: Some(true),
                ..Default::default()
            }],
        );
        let bytes = write_review_workbook(&review).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
