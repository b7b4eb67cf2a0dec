// Integration tests for the settings store
use otterconf::{Scope, SettingValue, SettingsManager, Url};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

// Helper to create a manager over a fresh profile directory
fn fresh_profile() -> (TempDir, SettingsManager) {
    let dir = TempDir::new().expect("Failed to create profile directory");
    let settings = SettingsManager::new(dir.path());
    (dir, settings)
}

fn url(input: &str) -> Url {
    Url::parse(input).expect("Failed to parse URL")
}

#[test]
fn test_fresh_profile_resolves_every_default() {
    let (_dir, settings) = fresh_profile();

    let home = settings.option_identifier("Browser/HomePage").unwrap();
    let zoom = settings.option_identifier("Content/DefaultZoom").unwrap();
    let ask = settings
        .option_identifier("Browser/AlwaysAskWhereToSaveDownload")
        .unwrap();
    let mice = settings.option_identifier("Browser/MouseProfilesOrder").unwrap();

    assert_eq!(settings.get_option(home), Some(SettingValue::from("")));
    assert_eq!(settings.get_option(zoom), Some(SettingValue::Int(100)));
    assert_eq!(settings.get_option(ask), Some(SettingValue::Bool(true)));
    assert_eq!(
        settings.get_option(mice),
        Some(SettingValue::List(vec!["default".to_string()]))
    );

    // Every registered option resolves to something on an empty profile
    for name in settings.options() {
        let id = settings
            .option_identifier(&name)
            .unwrap_or_else(|| panic!("{} should resolve to an identifier", name));
        assert!(
            settings.get_option(id).is_some(),
            "{} should have a default value",
            name
        );
    }
}

#[test]
fn test_identifier_name_round_trip() {
    let (_dir, settings) = fresh_profile();

    for name in settings.options() {
        let id = settings.option_identifier(&name).unwrap();
        assert_eq!(settings.option_name(id), Some(name.as_str()));
    }

    // Symbolic spellings resolve to the same identifier
    let direct = settings.option_identifier("Browser/HomePage").unwrap();
    let symbolic = settings.option_identifier("Browser_HomePageOption").unwrap();
    assert_eq!(direct, symbolic);

    assert!(settings.option_identifier("Browser/NoSuchThing").is_none());
}

#[test]
fn test_global_write_round_trip_and_persistence() {
    let (dir, mut settings) = fresh_profile();

    let home = settings.option_identifier("Browser/HomePage").unwrap();
    settings
        .set_value(
            home,
            Some(SettingValue::from("https://otter-browser.org/")),
            None,
        )
        .expect("Failed to write global value");

    assert_eq!(
        settings.get_option(home),
        Some(SettingValue::from("https://otter-browser.org/"))
    );

    // A second manager over the same profile sees the stored value
    let reopened = SettingsManager::new(dir.path());
    let home_again = reopened.option_identifier("Browser/HomePage").unwrap();
    assert_eq!(
        reopened.get_option(home_again),
        Some(SettingValue::from("https://otter-browser.org/"))
    );
}

#[test]
fn test_global_store_file_layout() {
    let (dir, mut settings) = fresh_profile();

    let home = settings.option_identifier("Browser/HomePage").unwrap();
    settings
        .set_value(home, Some(SettingValue::from("https://example.org/")), None)
        .expect("Failed to write global value");

    let contents = std::fs::read_to_string(dir.path().join("otter.conf"))
        .expect("otter.conf should exist after a global write");

    // The last name segment is the key, the rest is the section
    assert!(contents.contains("[Browser]"));
    assert!(contents.contains("HomePage=https://example.org/"));
    assert!(!contents.contains("Browser/HomePage"));
}

#[test]
fn test_override_store_file_layout() {
    let (dir, mut settings) = fresh_profile();

    let home = settings.option_identifier("Browser/HomePage").unwrap();
    let target = url("https://sub.example.org/page");
    settings
        .set_value(
            home,
            Some(SettingValue::from("https://news.example.org/")),
            Some(&target),
        )
        .expect("Failed to write override");

    let contents = std::fs::read_to_string(dir.path().join("override.ini"))
        .expect("override.ini should exist after a scoped write");

    // One section per scope, keyed by full option names
    assert!(contents.contains("[sub.example.org]"));
    assert!(contents.contains("Browser/HomePage=https://news.example.org/"));
}

#[test]
fn test_override_precedence_layers() {
    let (_dir, mut settings) = fresh_profile();
    let zoom = settings.option_identifier("Content/DefaultZoom").unwrap();

    assert_eq!(settings.get_option(zoom), Some(SettingValue::Int(100)));

    settings
        .set_value(zoom, Some(SettingValue::Int(110)), None)
        .unwrap();
    settings
        .set_override(zoom, Some(SettingValue::Int(120)), &Scope::new("*.example.org"))
        .unwrap();

    let mail = url("https://mail.example.org/");
    settings
        .set_value(zoom, Some(SettingValue::Int(80)), Some(&mail))
        .unwrap();

    // Exact host beats the wildcard
    assert_eq!(
        settings.get_option_for_url(zoom, &mail),
        Some(SettingValue::Int(80))
    );
    // Sibling hosts fall through to the wildcard
    assert_eq!(
        settings.get_option_for_url(zoom, &url("https://news.example.org/")),
        Some(SettingValue::Int(120))
    );
    // The bare domain is not covered by its own wildcard
    assert_eq!(
        settings.get_option_for_url(zoom, &url("https://example.org/")),
        Some(SettingValue::Int(110))
    );
    // Unrelated hosts see the global value
    assert_eq!(
        settings.get_option_for_url(zoom, &url("https://other.net/")),
        Some(SettingValue::Int(110))
    );
}

#[test]
fn test_most_specific_wildcard_wins() {
    let (_dir, mut settings) = fresh_profile();
    let zoom = settings.option_identifier("Content/DefaultZoom").unwrap();

    settings
        .set_override(zoom, Some(SettingValue::Int(150)), &Scope::new("*.example.org"))
        .unwrap();
    settings
        .set_override(
            zoom,
            Some(SettingValue::Int(90)),
            &Scope::new("*.mail.example.org"),
        )
        .unwrap();

    assert_eq!(
        settings.get_option_for_url(zoom, &url("https://imap.mail.example.org/")),
        Some(SettingValue::Int(90))
    );
    assert_eq!(
        settings.get_option_for_url(zoom, &url("https://mail.example.org/")),
        Some(SettingValue::Int(150))
    );
}

#[test]
fn test_null_write_clears_layers() {
    let (_dir, mut settings) = fresh_profile();
    let zoom = settings.option_identifier("Content/DefaultZoom").unwrap();
    let mail = url("https://mail.example.org/");

    settings
        .set_value(zoom, Some(SettingValue::Int(110)), None)
        .unwrap();
    settings
        .set_value(zoom, Some(SettingValue::Int(80)), Some(&mail))
        .unwrap();

    // Clearing the override exposes the global value again
    settings.set_value(zoom, None, Some(&mail)).unwrap();
    assert_eq!(
        settings.get_option_for_url(zoom, &mail),
        Some(SettingValue::Int(110))
    );

    // Clearing the global value reverts to the default
    settings.set_value(zoom, None, None).unwrap();
    assert_eq!(settings.get_option(zoom), Some(SettingValue::Int(100)));
}

#[test]
fn test_change_events_for_effective_writes_only() {
    let (_dir, mut settings) = fresh_profile();
    let zoom = settings.option_identifier("Content/DefaultZoom").unwrap();

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let subscription = settings.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

    settings
        .set_value(zoom, Some(SettingValue::Int(110)), None)
        .unwrap();
    // Repeating the resolved value is a no-op
    settings
        .set_value(zoom, Some(SettingValue::Int(110)), None)
        .unwrap();

    // Scoped writes always fire, even when repeated
    let mail = url("https://mail.example.org/");
    settings
        .set_value(zoom, Some(SettingValue::Int(80)), Some(&mail))
        .unwrap();
    settings
        .set_value(zoom, Some(SettingValue::Int(80)), Some(&mail))
        .unwrap();

    {
        let seen = events.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].identifier, zoom);
        assert_eq!(seen[0].value, Some(SettingValue::Int(110)));
        assert_eq!(seen[0].scope, None);
        assert_eq!(seen[1].scope, Some(Scope::new("mail.example.org")));
        assert_eq!(seen[2].scope, Some(Scope::new("mail.example.org")));
    }

    // After unsubscribing nothing more is delivered
    assert!(settings.unsubscribe(subscription));
    settings
        .set_value(zoom, Some(SettingValue::Int(95)), None)
        .unwrap();
    assert_eq!(events.lock().unwrap().len(), 3);
}

#[test]
fn test_has_override_matches_exact_host_only() {
    let (_dir, mut settings) = fresh_profile();
    let zoom = settings.option_identifier("Content/DefaultZoom").unwrap();

    settings
        .set_override(zoom, Some(SettingValue::Int(120)), &Scope::new("*.example.org"))
        .unwrap();

    let mail = url("https://mail.example.org/");

    // The wildcard affects resolution but not override presence
    assert_eq!(
        settings.get_option_for_url(zoom, &mail),
        Some(SettingValue::Int(120))
    );
    assert!(!settings.has_override(&mail, Some(zoom)));
    assert!(!settings.has_override(&mail, None));

    settings
        .set_value(zoom, Some(SettingValue::Int(80)), Some(&mail))
        .unwrap();
    assert!(settings.has_override(&mail, Some(zoom)));
    assert!(settings.has_override(&mail, None));
}

#[test]
fn test_remove_override_variants() {
    let (_dir, mut settings) = fresh_profile();
    let zoom = settings.option_identifier("Content/DefaultZoom").unwrap();
    let home = settings.option_identifier("Browser/HomePage").unwrap();
    let mail = url("https://mail.example.org/");

    settings
        .set_value(zoom, Some(SettingValue::Int(80)), Some(&mail))
        .unwrap();
    settings
        .set_value(
            home,
            Some(SettingValue::from("https://m.example.org/")),
            Some(&mail),
        )
        .unwrap();

    // Removing one option leaves the rest of the scope alone
    settings
        .remove_override(&mail, Some("Content/DefaultZoom"))
        .unwrap();
    assert!(!settings.has_override(&mail, Some(zoom)));
    assert!(settings.has_override(&mail, Some(home)));

    // Removing the whole scope clears it
    settings.remove_override(&mail, None).unwrap();
    assert!(!settings.has_override(&mail, None));
    assert!(settings.override_scopes().is_empty());
}

#[test]
fn test_custom_option_registration_round_trip() {
    use otterconf::{Error, OptionType};

    let (dir, mut settings) = fresh_profile();

    let initial = settings.options().len();
    let sync = settings
        .register_option(
            "Backends/Sync",
            OptionType::Enumeration,
            SettingValue::from("none"),
            &["none", "file", "server"],
        )
        .expect("Failed to register custom option");

    assert_eq!(settings.options().len(), initial + 1);
    assert_eq!(settings.option_name(sync), Some("Backends/Sync"));
    assert_eq!(settings.get_option(sync), Some(SettingValue::from("none")));

    // A duplicate registration is rejected and changes nothing
    let duplicate = settings.register_option(
        "Backends/Sync",
        OptionType::Enumeration,
        SettingValue::from("file"),
        &[],
    );
    assert!(matches!(duplicate, Err(Error::DuplicateOption(_))));
    assert_eq!(settings.options().len(), initial + 1);

    // Stored values survive a restart once the option is registered again
    settings
        .set_value(sync, Some(SettingValue::from("file")), None)
        .unwrap();

    let mut reopened = SettingsManager::new(dir.path());
    let sync_again = reopened
        .register_option(
            "Backends/Sync",
            OptionType::Enumeration,
            SettingValue::from("none"),
            &["none", "file", "server"],
        )
        .unwrap();
    assert_eq!(
        reopened.get_option(sync_again),
        Some(SettingValue::from("file"))
    );
}

#[test]
fn test_wildcard_overrides_survive_restart() {
    let (dir, mut settings) = fresh_profile();
    let zoom = settings.option_identifier("Content/DefaultZoom").unwrap();

    settings
        .set_override(zoom, Some(SettingValue::Int(120)), &Scope::new("*.example.org"))
        .unwrap();

    let reopened = SettingsManager::new(dir.path());
    let zoom_again = reopened.option_identifier("Content/DefaultZoom").unwrap();
    assert_eq!(
        reopened.get_option_for_url(zoom_again, &url("https://news.example.org/")),
        Some(SettingValue::Int(120))
    );
}

#[test]
fn test_comment_characters_survive_restart() {
    let (dir, mut settings) = fresh_profile();

    let lang = settings.option_identifier("Network/AcceptLanguage").unwrap();
    let home = settings.option_identifier("Browser/HomePage").unwrap();
    let page = url("https://example.org/");

    settings
        .set_value(
            lang,
            Some(SettingValue::from("system,en-US;q=0.8,en;q=0.6")),
            None,
        )
        .unwrap();
    settings
        .set_value(
            home,
            Some(SettingValue::from("https://example.org/#fragment")),
            Some(&page),
        )
        .unwrap();

    let reopened = SettingsManager::new(dir.path());
    let lang = reopened.option_identifier("Network/AcceptLanguage").unwrap();
    let home = reopened.option_identifier("Browser/HomePage").unwrap();

    assert_eq!(
        reopened.get_option(lang),
        Some(SettingValue::from("system,en-US;q=0.8,en;q=0.6"))
    );
    assert_eq!(
        reopened.get_option_for_url(home, &page),
        Some(SettingValue::from("https://example.org/#fragment"))
    );
}

#[test]
fn test_multiline_string_survives_restart() {
    let (dir, mut settings) = fresh_profile();
    let home = settings.option_identifier("Browser/HomePage").unwrap();

    settings
        .set_value(home, Some(SettingValue::from("line one\nline two")), None)
        .unwrap();

    let reopened = SettingsManager::new(dir.path());
    let home = reopened.option_identifier("Browser/HomePage").unwrap();
    assert_eq!(
        reopened.get_option(home),
        Some(SettingValue::from("line one\nline two"))
    );
}

#[test]
fn test_file_urls_share_the_localhost_scope() {
    let (_dir, mut settings) = fresh_profile();
    let zoom = settings.option_identifier("Content/DefaultZoom").unwrap();

    let file = url("file:///home/user/notes.html");
    settings
        .set_value(zoom, Some(SettingValue::Int(140)), Some(&file))
        .unwrap();

    assert_eq!(
        settings.get_option_for_url(zoom, &url("file:///srv/other.html")),
        Some(SettingValue::Int(140))
    );
    assert_eq!(
        settings.get_option_for_url(zoom, &url("http://localhost/")),
        Some(SettingValue::Int(140))
    );
    // Other hosts are unaffected
    assert_eq!(settings.get_option(zoom), Some(SettingValue::Int(100)));
}

#[test]
fn test_corrupt_global_store_degrades_reads_but_refuses_writes() {
    use otterconf::Error;

    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("otter.conf"), "[unclosed\njunk").unwrap();

    let mut settings = SettingsManager::new(dir.path());
    let zoom = settings.option_identifier("Content/DefaultZoom").unwrap();

    // Reads fall back to defaults
    assert_eq!(settings.get_option(zoom), Some(SettingValue::Int(100)));

    // Writes refuse to clobber the unparseable file
    let result = settings.set_value(zoom, Some(SettingValue::Int(110)), None);
    assert!(matches!(result, Err(Error::StoreParse { .. })));

    let contents = std::fs::read_to_string(dir.path().join("otter.conf")).unwrap();
    assert!(contents.contains("[unclosed"));
}

#[test]
fn test_report_covers_every_option() {
    let (_dir, mut settings) = fresh_profile();
    let zoom = settings.option_identifier("Content/DefaultZoom").unwrap();

    settings
        .set_value(zoom, Some(SettingValue::Int(125)), None)
        .unwrap();
    settings
        .set_override(zoom, Some(SettingValue::Int(80)), &Scope::new("*.example.org"))
        .unwrap();

    let report = otterconf::generate_report(&settings);

    assert!(report.starts_with("Settings:\n"));
    let lines: Vec<&str> = report
        .lines()
        .filter(|line| line.starts_with('\t'))
        .collect();
    assert_eq!(lines.len(), settings.options().len());

    let zoom_line = lines
        .iter()
        .find(|line| line.contains("Content/DefaultZoom"))
        .expect("Report should mention Content/DefaultZoom");
    assert!(zoom_line.contains("non default"));
    assert!(zoom_line.contains("1 override(s)"));

    let home_line = lines
        .iter()
        .find(|line| line.contains("Browser/HomePage"))
        .expect("Report should mention Browser/HomePage");
    assert!(home_line.contains("no overrides"));
}

#[test]
fn test_query_patterns_filter_option_names() {
    use otterconf::{query_options, Error};

    let (_dir, settings) = fresh_profile();
    let names = settings.options();

    let network = query_options(&names, &["Network/*"]).expect("Failed to query Network/*");
    assert!(!network.is_empty());
    for name in &network {
        assert!(name.starts_with("Network/"));
    }

    // Multiple patterns union their matches
    let both = query_options(&names, &["Network/*", "Browser/*"]).expect("Failed to query");
    assert!(both.len() > network.len());

    let invalid = query_options(&names, &["Network/["]);
    assert!(matches!(invalid, Err(Error::InvalidGlobPattern(_))));
}
