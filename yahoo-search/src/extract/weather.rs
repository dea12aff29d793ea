//! Weather page
//!
//! Yahoo picks the location from the request itself (IP geolocation), so
//! the page carries everything: current conditions up top and a forecast
//! table with one row per day.

use scraper::{ElementRef, Html};
use std::collections::BTreeMap;

use super::{attr, child_elements, last_child_text, selector, text_of};
use crate::error::{Context, Operation, Result};
use crate::types::{
    HighLowTemperature, Precipitation, WeatherForecast, WeatherForecastInner, WeatherInformation, Weekday,
};

const FORECAST_DAYS: usize = 7;

/// Parse the Yahoo weather page
pub fn parse_weather(html: &str) -> Result<WeatherInformation> {
    let ctx = Context::new(Operation::Weather, "");
    let document = Html::parse_document(html);
    let root = document.root_element();

    let location = required(root.select(selector!(r"div.M\(10px\) h1")).next(), "location", &ctx)?;
    let country = required(root.select(selector!(r"h2.D\(b\)")).next(), "country", &ctx)?;
    let time = required(root.select(selector!("time")).next(), "local time", &ctx)?;

    let celsius_raw = required(root.select(selector!(r".celsius.celsius_D\(b\)")).next(), "celsius reading", &ctx)?;
    let celsius = parse_temperature(&celsius_raw)
        .ok_or_else(|| ctx.parse(format!("celsius reading is not a number: {celsius_raw:?}")))?;

    let fahrenheit_raw = required(root.select(selector!(".fahrenheit")).next(), "fahrenheit reading", &ctx)?;
    let fahrenheit = parse_temperature(&fahrenheit_raw)
        .ok_or_else(|| ctx.parse(format!("fahrenheit reading is not a number: {fahrenheit_raw:?}")))?;

    let heading = root
        .select(selector!("div#module-location-heading"))
        .next()
        .ok_or_else(|| ctx.missing("'div#module-location-heading' (current conditions)"))?;

    let weather_icon = heading
        .select(selector!("img"))
        .next()
        .and_then(|img| attr(img, "src"))
        .ok_or_else(|| ctx.missing("current condition icon"))?;
    let weather = required(heading.select(selector!("p")).next(), "current condition", &ctx)?;

    let mut forecast = BTreeMap::new();
    for row in root
        .select(selector!(r#"table[data-slk="sec:forecast;"] tbody tr"#))
        .take(FORECAST_DAYS)
    {
        let (day, entry) = parse_forecast_row(row, &ctx)?;
        if forecast.insert(day, entry).is_some() {
            tracing::warn!(%day, "duplicate forecast row, keeping the later one");
        }
    }

    tracing::debug!(days = forecast.len(), %location, "parsed weather");

    Ok(WeatherInformation {
        location,
        country,
        time,
        celsius,
        fahrenheit,
        weather,
        weather_icon,
        forecast,
    })
}

fn required(element: Option<ElementRef<'_>>, what: &str, ctx: &Context<'_>) -> Result<String> {
    element.and_then(text_of).ok_or_else(|| ctx.missing(what))
}

fn parse_forecast_row(row: ElementRef<'_>, ctx: &Context<'_>) -> Result<(Weekday, WeatherForecast)> {
    let day_name = child_elements(row)
        .next()
        .and_then(last_child_text)
        .ok_or_else(|| ctx.missing("forecast day name"))?;
    let day = day_name.parse::<Weekday>().map_err(|e| ctx.parse(e.to_string()))?;

    let condition = row
        .select(selector!(r"td.Ta\(c\) img"))
        .next()
        .and_then(|img| Some(WeatherForecastInner {
            text: attr(img, "alt")?,
            icon: attr(img, "src")?,
        }))
        .ok_or_else(|| ctx.missing(format!("forecast condition for {day}")))?;

    let precipitation = row
        .select(selector!(r"td.D\(f\).Jc\(c\)"))
        .next()
        .and_then(|cell| Some(Precipitation {
            icon: cell.select(selector!("img")).next().and_then(|img| attr(img, "src"))?,
            percentage: child_elements(cell).next_back().and_then(text_of)?,
        }))
        .ok_or_else(|| ctx.missing(format!("forecast precipitation for {day}")))?;

    // Blank cells stay in place so a missing reading cannot shift the others
    let readings: Vec<String> = row
        .select(selector!(r"td.D\(f\).Jc\(fe\).Ta\(end\) dl dd"))
        .map(|dd| dd.text().collect())
        .collect();

    let [f_high, c_high, f_low, c_low] = readings.as_slice() else {
        return Err(ctx.missing(format!(
            "forecast temperatures for {day} (expected 4 cells, found {})",
            readings.len()
        )));
    };

    let number = |raw: &String| {
        parse_temperature(raw).ok_or_else(|| ctx.parse(format!("{day} temperature is not a number: {raw:?}")))
    };

    let fahrenheit = high_low(number(f_high)?, number(f_low)?, day, "fahrenheit", ctx)?;
    let celsius = high_low(number(c_high)?, number(c_low)?, day, "celsius", ctx)?;

    Ok((
        day,
        WeatherForecast {
            fahrenheit,
            celsius,
            weather: condition,
            precipitation,
        },
    ))
}

fn high_low(highest: i32, lowest: i32, day: Weekday, unit: &str, ctx: &Context<'_>) -> Result<HighLowTemperature> {
    if highest < lowest {
        return Err(ctx.parse(format!(
            "{day} {unit} high {highest} is below low {lowest}"
        )));
    }
    Ok(HighLowTemperature { highest, lowest })
}

/// Read a temperature such as "31", "+31°", "-4°C" or "88 °F"
///
/// Only a sign, degree marks, whitespace and one `C`/`F` unit letter are
/// stripped. Anything else left over means the reading is not a number.
pub fn parse_temperature(raw: &str) -> Option<i32> {
    let normalized = raw.trim().replace('\u{2212}', "-");
    let value = normalized
        .strip_suffix(['C', 'c', 'F', 'f'])
        .unwrap_or(&normalized)
        .trim_end()
        .trim_end_matches(['°', 'º'])
        .trim_end();

    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, value.strip_prefix('+').unwrap_or(value)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<i32>().ok().map(|n| sign * n)
}
