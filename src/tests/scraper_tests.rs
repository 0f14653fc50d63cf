use crate::domain::schema::keys;
use crate::scraper::ListingScraper;

const LISTING_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta name="geo.placename" content="San Francisco">
<meta name="geo.region" content="US-CA">
<meta name="geo.position" content="37.77;-122.41">
</head>
<body>
<h1 class="postingtitle">
  <span id="titletextonly">2015 Honda Civic EX</span> - <span class="price">$9,800</span>
</h1>
<div class="postinginfos">
  <p class="postinginfo">posted: <time class="date timeago" datetime="2024-03-08T09:30:12-0800">a while ago</time></p>
</div>
<p class="attrgroup">
  <span>condition: <b>excellent</b></span>
  <span>odometer: <b>54000 mi</b></span>
  <span>cylinders: <b>4 cylinders</b></span>
  <span>title status: <b>clean</b></span>
  <span>drive: <b>fwd</b></span>
  <span>VIN: <b>19XFB2F5XFE000001</b></span>
  <span>fuel: <b>gas</b></span>
</p>
<script id="ld_posting_data" type="application/ld+json">
  {"name": "should not win over the markup", "offers": {"price": 1}}
</script>
</body>
</html>"#;

fn parse(html: &str) -> crate::scraper::ScrapedDefaults {
    ListingScraper::new().unwrap().parse(html)
}

#[test]
fn extracts_title_and_price() {
    let defaults = parse(LISTING_PAGE);
    assert_eq!(defaults.get(keys::CAR), "2015 Honda Civic EX");
    assert_eq!(defaults.get(keys::PRICE), "9,800");
}

#[test]
fn builds_location_from_the_geo_meta_pair() {
    let defaults = parse(LISTING_PAGE);
    assert_eq!(defaults.get(keys::LOCATION), "San Francisco, CA");
}

#[test]
fn splits_geo_position_into_latitude_and_longitude() {
    let defaults = parse(LISTING_PAGE);
    assert_eq!(defaults.get(keys::LATITUDE), "37.77");
    assert_eq!(defaults.get(keys::LONGITUDE), "-122.41");
}

#[test]
fn remaps_attr_labels_through_the_rename_table() {
    let defaults = parse(LISTING_PAGE);
    assert_eq!(defaults.get(keys::MILEAGE), "54000 mi");
    assert_eq!(defaults.get(keys::ENGINE), "4 cylinders");
    assert_eq!(defaults.get(keys::ACCIDENTS), "clean");
    assert_eq!(defaults.get(keys::CONDITION), "excellent");
    assert_eq!(defaults.get(keys::DRIVE), "fwd");
    assert_eq!(defaults.get(keys::VIN), "19XFB2F5XFE000001");
}

#[test]
fn unlisted_attr_labels_are_dropped() {
    let defaults = parse(LISTING_PAGE);
    assert_eq!(defaults.get("fuel"), "");
}

#[test]
fn derives_posted_status_without_zero_padding() {
    let defaults = parse(LISTING_PAGE);
    assert_eq!(defaults.get(keys::STATUS), "posted 3/8");
}

#[test]
fn empty_page_yields_empty_defaults() {
    assert!(parse("").is_empty());
}

#[test]
fn garbage_html_yields_empty_defaults() {
    let defaults = parse("<<<< not actually <html <p>>>");
    assert!(defaults.is_empty());
}

#[test]
fn posting_data_script_backfills_missing_title_and_price() {
    let page = r#"<html><body>
        <script id="ld_posting_data" type="application/ld+json">
          {"name": "2012 Toyota Camry LE", "offers": {"price": 6500}}
        </script>
    </body></html>"#;
    let defaults = parse(page);
    assert_eq!(defaults.get(keys::CAR), "2012 Toyota Camry LE");
    assert_eq!(defaults.get(keys::PRICE), "6500");
}

#[test]
fn invalid_url_is_an_error_not_a_panic() {
    let scraper = ListingScraper::new().unwrap();
    assert!(scraper.scrape_listing("not a url at all").is_err());
}

#[test]
fn rfc3339_timestamps_also_parse() {
    let page = r#"<html><body>
        <time class="date timeago" datetime="2024-11-02T08:00:00-07:00">x</time>
    </body></html>"#;
    let defaults = parse(page);
    assert_eq!(defaults.get(keys::STATUS), "posted 11/2");
}
