use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["fctbiz-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(!cli.json);
}

#[test]
fn parses_search_with_keyword_and_type() {
    let cli = Cli::try_parse_from([
        "fctbiz-cli",
        "search",
        "--keyword",
        "Gwarinpa",
        "--type",
        "bank",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Search {
            keyword,
            category,
            page_token,
            lat,
            lng,
            all_pages,
        }) => {
            assert_eq!(keyword, "Gwarinpa");
            assert_eq!(category, "bank");
            assert!(page_token.is_none());
            assert!(lat.is_none() && lng.is_none());
            assert!(!all_pages);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn search_requires_type() {
    let result = Cli::try_parse_from(["fctbiz-cli", "search", "--keyword", "Wuse"]);
    assert!(result.is_err());
}

#[test]
fn search_lat_without_lng_is_rejected() {
    let result = Cli::try_parse_from([
        "fctbiz-cli",
        "search",
        "--keyword",
        "bank",
        "--type",
        "bank",
        "--lat",
        "9.07",
    ]);
    assert!(result.is_err());
}

#[test]
fn search_accepts_coordinates_and_all_pages() {
    let cli = Cli::try_parse_from([
        "fctbiz-cli",
        "--json",
        "search",
        "--keyword",
        "pharmacy",
        "--type",
        "pharmacy",
        "--lat",
        "9.07",
        "--lng",
        "7.48",
        "--all-pages",
    ])
    .expect("expected valid cli args");

    assert!(cli.json);
    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            lat: Some(_),
            lng: Some(_),
            all_pages: true,
            ..
        })
    ));
}

#[test]
fn json_flag_is_global() {
    let cli = Cli::try_parse_from(["fctbiz-cli", "details", "ChIJ-1", "--json"])
        .expect("expected valid cli args");
    assert!(cli.json);
    assert!(matches!(
        cli.command,
        Some(Commands::Details { ref place_id }) if place_id == "ChIJ-1"
    ));
}

#[test]
fn parses_text_with_radius() {
    let cli = Cli::try_parse_from([
        "fctbiz-cli",
        "text",
        "suya spots",
        "--radius",
        "2500",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Text {
            ref query,
            page_token: None,
            radius: Some(2500),
        }) if query == "suya spots"
    ));
}

#[test]
fn text_rejects_negative_radius() {
    let result = Cli::try_parse_from(["fctbiz-cli", "text", "suya", "--radius", "-5"]);
    assert!(result.is_err());
}
