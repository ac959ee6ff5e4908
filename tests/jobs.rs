// tests/jobs.rs
//
// Whole jobs against fixture sites: roster file in, JSON and PNGs out.
//
mod common;

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde_json::{Value, json};

use hoops_scrape::ScrapeError;
use hoops_scrape::config::{JobKind, Politeness, RunOptions};
use hoops_scrape::scrape::{collect_colors, collect_logos, collect_positions};

use common::{FixtureFetch, corrupt_data_uri, logo_page, png_bytes, png_data_uri};

fn options(job: JobKind, root: &Path, roster: &Value) -> RunOptions {
    let input = root.join("roster.json");
    fs::write(&input, roster.to_string()).unwrap();

    let mut opts = RunOptions::new(job);
    opts.input = Some(input);
    opts.out = root.join("out").join("result.json");
    opts.asset_dir = root.join("logos");
    opts.politeness = Politeness::none();
    opts
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn letter(l: char) -> String {
    format!("https://1000logos.net/american-colleges-ncaa/?az={l}")
}

#[test]
fn logos_job_writes_pngs_and_mapping_in_roster_order() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(JobKind::Logos, dir.path(), &json!(["Texas Tech", "Duke", "Connecticut", "Ghost U"]));

    let fetch = FixtureFetch::new()
        .page(&letter('d'), &logo_page(&[("Duke Blue Devils Logo", png_data_uri([1, 2, 3, 255]).as_str())]))
        .page(&letter('t'), &logo_page(&[
            ("Texas Longhorns Logo", corrupt_data_uri().as_str()),
            ("Texas Tech Red Raiders Logo", "https://cdn.test/ttu.png"),
        ]))
        .page(&letter('u'), &logo_page(&[("UConn Huskies Logo", corrupt_data_uri().as_str())]))
        .page(
            "https://1000logos.net/uconn-logo/",
            &logo_page(&[("UConn Logo", png_data_uri([9, 9, 9, 255]).as_str())]),
        )
        .bytes("https://cdn.test/ttu.png", png_bytes([4, 5, 6, 255]));

    let res = collect_logos(&opts, &fetch, None).unwrap();
    assert_eq!(res.matched(), 3);
    assert_eq!(res.unresolved(), vec!["Ghost U"]);

    let text = fs::read_to_string(&opts.out).unwrap();
    assert!(text.ends_with('\n'));
    let keys: Vec<String> = read_json(&opts.out).as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["Texas Tech", "Duke", "Connecticut", "Ghost U"]);
    assert_eq!(
        read_json(&opts.out),
        json!({
            "Texas Tech": "Texas_Tech.png",
            "Duke": "Duke.png",
            "Connecticut": "Connecticut.png",
            "Ghost U": "Unknown",
        })
    );

    for file in ["Texas_Tech.png", "Duke.png", "Connecticut.png"] {
        let img = image::open(opts.asset_dir.join(file)).unwrap();
        assert_eq!(img.color(), image::ColorType::Rgba8);
    }
    assert!(!opts.asset_dir.join("Ghost_U.png").exists());
}

#[test]
fn positions_job_reads_profiles_through_the_index() {
    let dir = tempfile::tempdir().unwrap();
    let roster = json!([
        { "name": "Cooper Flagg", "school": "Duke" },
        { "name": "Walter Clayton Jr." },
        { "name": "Cooper Flagg" },
    ]);
    let opts = options(JobKind::Positions, dir.path(), &roster);

    let site = "https://www.sports-reference.com";
    let fetch = FixtureFetch::new()
        .page(
            &format!("{site}/cbb/players/c-index.html"),
            r#"<p><a href="/cbb/players/cooper-flagg-1.html">Cooper Flagg</a></p>"#,
        )
        .page(
            &format!("{site}/cbb/players/w-index.html"),
            r#"<p><a href="/cbb/players/walter-claytonjr-1.html">Walter Clayton Jr</a></p>"#,
        )
        .page(
            &format!("{site}/cbb/players/cooper-flagg-1.html"),
            r#"<div id="meta"><p><strong>Position:</strong> Forward &#9642; <strong>Shoots:</strong> Right</p></div>"#,
        )
        .page(
            &format!("{site}/cbb/players/walter-claytonjr-1.html"),
            r#"<div id="meta"><p><strong>Class:</strong> Senior</p></div>"#,
        );

    let res = collect_positions(&opts, &fetch, None).unwrap();
    assert_eq!(res.total(), 2);
    assert_eq!(
        read_json(&opts.out),
        json!({ "Cooper Flagg": "Forward", "Walter Clayton Jr.": "Unknown" })
    );
    // positions never write images
    assert!(!opts.asset_dir.exists());
}

#[test]
fn colors_job_builds_the_school_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(JobKind::Colors, dir.path(), &json!(["Duke", "Colorado State", "Ghost U"]));

    let fetch = FixtureFetch::new()
        .page("https://teamcolorcodes.com/duke", "<p>Duke Blue #003087</p><p>White #FFFFFF</p>")
        .page("https://teamcolorcodes.com/colorado-state", "<p>Green #1E4D2B</p>");

    let manifest = collect_colors(&opts, &fetch, None).unwrap();
    assert_eq!(manifest.schools.len(), 3);

    assert_eq!(
        read_json(&opts.out),
        json!({
            "schools": {
                "Duke": {
                    "colors": { "primary": "#003087", "secondary": "#FFFFFF" },
                    "logo": "Duke.png",
                },
                "Colorado State": {
                    "colors": { "primary": "#1E4D2B", "secondary": "#ffffff" },
                    "logo": "Colorado_St.png",
                },
                "Ghost U": {
                    "colors": { "primary": "#e0e7ff", "secondary": "#ffffff" },
                    "logo": "Ghost_U.png",
                },
            }
        })
    );
}

#[test]
fn unreadable_roster_aborts_before_any_request() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = RunOptions::new(JobKind::Logos);
    opts.input = Some(dir.path().join("missing.json"));
    opts.out = dir.path().join("map.json");
    opts.politeness = Politeness::none();

    let fetch = FixtureFetch::new();
    let err = collect_logos(&opts, &fetch, None).unwrap_err();
    assert!(matches!(err, ScrapeError::Input { .. }));
    assert_eq!(fetch.call_count(), 0);
    assert!(!opts.out.exists());
}

#[test]
fn malformed_roster_is_an_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let opts = options(JobKind::Positions, dir.path(), &json!({ "not": "a list" }));

    let fetch = FixtureFetch::new();
    let err = collect_positions(&opts, &fetch, None).unwrap_err();
    assert!(matches!(err, ScrapeError::Input { .. }));
    assert_eq!(fetch.call_count(), 0);
}

#[test]
fn custom_alias_file_replaces_the_builtin_tables() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(JobKind::Logos, dir.path(), &json!(["Gonzaga"]));
    let aliases = dir.path().join("aliases.json");
    fs::write(&aliases, r#"{ "hints": { "Gonzaga": ["Zags"] } }"#).unwrap();
    opts.aliases = Some(aliases);

    let fetch = FixtureFetch::new()
        .page(&letter('z'), &logo_page(&[("Zags Primary Mark", png_data_uri([7, 7, 7, 255]).as_str())]));

    let res = collect_logos(&opts, &fetch, None).unwrap();
    assert_eq!(read_json(&opts.out), json!({ "Gonzaga": "Gonzaga.png" }));
    assert_eq!(res.matched(), 1);
}

#[test]
fn positions_job_spaces_every_request() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = options(JobKind::Positions, dir.path(), &json!(["Cooper Flagg"]));
    let spacing = Duration::from_millis(20);
    opts.politeness = Politeness { settle: Duration::ZERO, spacing, timeout: Duration::from_secs(1) };

    let site = "https://www.sports-reference.com";
    let profile = format!("{site}/cbb/players/cooper-flagg-1.html");
    let fetch = FixtureFetch::new()
        .page(
            &format!("{site}/cbb/players/c-index.html"),
            r#"<p><a href="/cbb/players/cooper-flagg-1.html">Cooper Flagg</a></p>"#,
        )
        .page(&profile, r#"<div id="meta"><p><strong>Position:</strong> Guard</p></div>"#);

    collect_positions(&opts, &fetch, None).unwrap();

    // a, b, c index pages then the profile; resolution stops the shard walk
    let calls = fetch.calls.borrow().clone();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[3], profile);

    let stamps = fetch.stamps.borrow();
    for pair in stamps.windows(2) {
        assert!(pair[1] - pair[0] >= spacing, "requests {:?} apart", pair[1] - pair[0]);
    }
}
