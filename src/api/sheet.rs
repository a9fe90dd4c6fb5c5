/// Fetch the tab-separated export of the rail spreadsheet
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP request fails
/// - The response status is not ok
/// - The response body cannot be read as text
pub async fn fetch_sheet_tsv(sheet_url: &str) -> Result<String, String> {
    let response = reqwest::get(sheet_url)
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.status().is_success() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response body: {e}"))
}
