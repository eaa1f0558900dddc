//! URL building utilities for API endpoints

/// Builds the URL of one page of the competitions listing.
///
/// # Example
/// ```
/// use fina_export::data_fetcher::api::build_competitions_page_url;
///
/// let url = build_competitions_page_url("https://api.example.com/fina", 3, 100);
/// assert_eq!(url, "https://api.example.com/fina/competitions?page=3&pageSize=100");
/// ```
pub fn build_competitions_page_url(api_base: &str, page: u32, page_size: u32) -> String {
    format!("{api_base}/competitions?page={page}&pageSize={page_size}")
}

/// Builds the URL listing the sports and disciplines of one competition.
///
/// # Example
/// ```
/// use fina_export::data_fetcher::api::build_competition_events_url;
///
/// let url = build_competition_events_url("https://api.example.com/fina", "2965");
/// assert_eq!(url, "https://api.example.com/fina/competitions/2965/events");
/// ```
pub fn build_competition_events_url(api_base: &str, comp_id: &str) -> String {
    format!("{api_base}/competitions/{comp_id}/events")
}

/// Builds the URL of the results of a single discipline.
///
/// # Example
/// ```
/// use fina_export::data_fetcher::api::build_discipline_results_url;
///
/// let url = build_discipline_results_url("https://api.example.com/fina", "abc-123");
/// assert_eq!(url, "https://api.example.com/fina/events/abc-123");
/// ```
pub fn build_discipline_results_url(api_base: &str, discipline_id: &str) -> String {
    format!("{api_base}/events/{discipline_id}")
}
