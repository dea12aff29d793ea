//! Video vertical results page

use scraper::{ElementRef, Html};
use serde::Deserialize;
use url::Url;

use super::{attr, child_elements, selector, text_of};
use crate::error::{Context, Operation, Result};
use crate::types::{Video, VideoSearchResult};

/// JSON carried in the result anchor's `data` attribute
#[derive(Debug, Deserialize)]
struct AnchorData {
    #[serde(default)]
    m: Option<AnchorMedia>,
}

#[derive(Debug, Deserialize)]
struct AnchorMedia {
    #[serde(default)]
    u: Option<String>,
}

/// Parse a Yahoo video search results page
///
/// Relative result links are resolved against `video_host`.
pub fn parse_videos(html: &str, query: &str, video_host: &Url) -> Result<VideoSearchResult> {
    let ctx = Context::new(Operation::Videos, query);
    let document = Html::parse_document(html);

    let items: Vec<ElementRef<'_>> = document.select(selector!("#search li.vr.vres")).collect();

    if items.is_empty() {
        return Err(ctx.missing("'#search li.vr.vres' (video results)"));
    }

    let videos: Vec<Video> = items
        .into_iter()
        .filter_map(|item| parse_video(item, video_host))
        .collect();

    tracing::debug!(count = videos.len(), "parsed videos");
    Ok(VideoSearchResult { videos })
}

fn parse_video(item: ElementRef<'_>, video_host: &Url) -> Option<Video> {
    let anchor = item.select(selector!("a")).next();

    let link = anchor
        .and_then(|a| attr(a, "href"))
        .and_then(|href| video_host.join(&href).ok())
        .map(String::from);

    let video_preview = anchor.and_then(|a| attr(a, "data")).and_then(|data| preview_url(&data));

    let thumbnail = item
        .select(selector!("img"))
        .next()
        .and_then(|img| attr(img, "src"));

    let duration = item
        .select(selector!("div.pos-box .vthm .stack.grad span.v-time"))
        .next()
        .and_then(text_of);

    let meta = item.select(selector!("div.v-meta")).next();

    let children: Vec<ElementRef<'_>> = meta.map(|m| child_elements(m).collect()).unwrap_or_default();

    let title = children.first().copied().and_then(text_of);
    let age = meta
        .and_then(|m| m.select(selector!(".v-age")).next())
        .and_then(text_of);
    // The source label closes the meta block; a lone child is the title
    let cite = match children.as_slice() {
        [_, .., last] => text_of(*last),
        _ => None,
    };

    let (Some(title), Some(link)) = (title, link) else {
        tracing::debug!("dropping video without title or link");
        return None;
    };

    Some(Video {
        age,
        cite,
        thumbnail,
        video_preview,
        duration,
        title,
        link,
    })
}

/// The still-image preview URL from an anchor's `data` JSON, if it has one
fn preview_url(data: &str) -> Option<String> {
    match serde_json::from_str::<AnchorData>(data) {
        Ok(parsed) => parsed.m.and_then(|m| m.u).filter(|u| !u.is_empty()),
        Err(e) => {
            tracing::debug!(error = %e, "unreadable video anchor data");
            None
        }
    }
}
