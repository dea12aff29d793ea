//! News vertical results page

use scraper::{ElementRef, Html};

use super::{attr, selector, text_of};
use crate::error::{Context, Operation, Result};
use crate::types::{News, NewsSearchResult};

/// Parse a Yahoo news search results page
pub fn parse_news(html: &str, query: &str) -> Result<NewsSearchResult> {
    let ctx = Context::new(Operation::News, query);
    let document = Html::parse_document(html);

    let page = document
        .select(selector!("#main #web"))
        .next()
        .ok_or_else(|| ctx.missing("'#main #web' (news results)"))?;

    let news: Vec<News> = page
        .select(selector!("li .dd.NewsArticle li"))
        .filter_map(parse_article)
        .collect();

    tracing::debug!(count = news.len(), "parsed news articles");
    Ok(NewsSearchResult { news })
}

fn parse_article(item: ElementRef<'_>) -> Option<News> {
    let heading = item.select(selector!("h4 a")).next();

    let Some(title) = heading.and_then(text_of) else {
        tracing::debug!("dropping news item without a title");
        return None;
    };

    let link = heading.and_then(|a| attr(a, "href"));

    // Lazy-loaded thumbnails carry an inline placeholder until scrolled into view
    let thumbnail = item
        .select(selector!("img"))
        .next()
        .and_then(|img| attr(img, "src"))
        .filter(|src| !src.starts_with("data:image/"));

    let source = item.select(selector!("span.s-source")).next().and_then(text_of);

    let last_updated = item
        .select(selector!("span.fc-2nd.s-time"))
        .next()
        .and_then(text_of)
        .and_then(|time| strip_separator(&time));

    let text = item.select(selector!("p.s-desc")).next().and_then(text_of);

    Some(News {
        title,
        link,
        thumbnail,
        source,
        last_updated,
        text,
    })
}

/// Drop the "· " Yahoo puts between the source and the time
fn strip_separator(time: &str) -> Option<String> {
    let trimmed = time.trim_start_matches(|c: char| c == '·' || c == '•' || c.is_whitespace());
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
