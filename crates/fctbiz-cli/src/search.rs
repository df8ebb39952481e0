use std::time::Duration;

use fctbiz_places::{Business, BusinessDetails};
use fctbiz_search::{SearchOrchestrator, SearchOutcome, SearchRequest, TextSearchRequest};

/// Upper bound on pages fetched by `--all-pages`.
const MAX_PAGES: usize = 10;

/// A fresh continuation token is rejected by the provider until it has
/// propagated, so consecutive page requests are spaced out.
const PAGE_TOKEN_DELAY: Duration = Duration::from_secs(2);

/// Run a location-and-category search, optionally following every page.
///
/// # Errors
///
/// Returns an error if the search fails or the provider answers with an
/// error status.
pub(crate) async fn run_search(
    orchestrator: &SearchOrchestrator,
    mut request: SearchRequest,
    all_pages: bool,
    json: bool,
) -> anyhow::Result<()> {
    for page_number in 1..=MAX_PAGES {
        let outcome = orchestrator.search_nearby(&request).await?;
        print_outcome(&outcome, json)?;

        let Some(token) = outcome.next_page_token() else {
            break;
        };
        if !all_pages {
            if !json {
                println!("more results: --page-token {token}");
            }
            break;
        }
        if page_number == MAX_PAGES {
            tracing::warn!(max_pages = MAX_PAGES, "stopping pagination at page limit");
            break;
        }
        request = request.next_page(token);
        tokio::time::sleep(PAGE_TOKEN_DELAY).await;
    }
    Ok(())
}

/// Run a free-text search and print one page.
///
/// # Errors
///
/// Returns an error if the query is blank, the search fails, or the provider
/// answers with an error status.
pub(crate) async fn run_text(
    orchestrator: &SearchOrchestrator,
    request: &TextSearchRequest,
    json: bool,
) -> anyhow::Result<()> {
    let outcome = orchestrator.search_by_text(request).await?;
    print_outcome(&outcome, json)?;
    if let (false, Some(token)) = (json, outcome.next_page_token()) {
        println!("more results: --page-token {token}");
    }
    Ok(())
}

/// Print the details of one business.
///
/// # Errors
///
/// Returns an error if the id is blank or the lookup fails.
pub(crate) async fn run_details(
    orchestrator: &SearchOrchestrator,
    place_id: &str,
    json: bool,
) -> anyhow::Result<()> {
    let details = orchestrator.get_details(place_id).await?;
    if json {
        let envelope = serde_json::json!({ "status": "success", "data": details });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        for line in details_lines(&details) {
            println!("{line}");
        }
    }
    Ok(())
}

fn print_outcome(outcome: &SearchOutcome, json: bool) -> anyhow::Result<()> {
    if let SearchOutcome::Error { status } = outcome {
        anyhow::bail!("Google Places API error: {status}");
    }

    if json {
        let envelope = serde_json::json!({
            "status": "success",
            "data": {
                "results": outcome.results(),
                "next_page_token": outcome.next_page_token(),
                "totalResults": outcome.total_results(),
            }
        });
        println!("{}", serde_json::to_string_pretty(&envelope)?);
        return Ok(());
    }

    if outcome.results().is_empty() {
        println!("no businesses found");
        return Ok(());
    }

    println!("{:<42}{:<8}{:<30}ADDRESS", "NAME", "RATING", "PLACE ID");
    for business in outcome.results() {
        println!("{}", business_row(business));
    }
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_owned()
    }
}

fn business_row(business: &Business) -> String {
    let rating = business
        .rating
        .map_or_else(|| "-".to_owned(), |r| format!("{r:.1}"));
    let address = business
        .vicinity
        .as_deref()
        .or(business.formatted_address.as_deref())
        .unwrap_or("");
    format!(
        "{:<42}{:<8}{:<30}{}",
        truncate(&business.name, 38),
        rating,
        truncate(&business.place_id, 27),
        address
    )
}

fn details_lines(details: &BusinessDetails) -> Vec<String> {
    let mut lines = vec![details.name.clone()];
    let mut push = |label: &str, value: Option<&str>| {
        if let Some(value) = value {
            lines.push(format!("  {label:<10}{value}"));
        }
    };
    push("address", details.formatted_address.as_deref());
    push(
        "phone",
        details
            .formatted_phone_number
            .as_deref()
            .or(details.international_phone_number.as_deref()),
    );
    push("website", details.website.as_deref());
    let rating = details.rating.map(|r| match details.user_ratings_total {
        Some(total) => format!("{r:.1} ({total} reviews)"),
        None => format!("{r:.1}"),
    });
    push("rating", rating.as_deref());
    if let Some(hours) = &details.opening_hours {
        let open_now = hours.open_now.map(|o| if o { "open now" } else { "closed now" });
        push("hours", open_now);
        for day in &hours.weekday_text {
            lines.push(format!("  {:<10}{day}", ""));
        }
    }
    lines
}
