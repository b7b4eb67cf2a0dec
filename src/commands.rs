use std::path::Path;

use otterconf::{
    find_profile_dir, generate_report, query_options, Scope, SettingValue, SettingsManager, Url,
};

/// Show the discovered profile directory and its settings files
pub fn show_profile(profile: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let info = find_profile_dir(profile).map_err(|e| {
        anyhow::anyhow!(
            "Failed to locate the Otter profile: {}.\n\
             Pass --profile <dir> or set OTTER_PROFILE.",
            e
        )
    })?;

    let json = serde_json::to_string_pretty(&info)?;
    println!("{}", json);
    Ok(())
}

/// List effective option values as a JSON object
pub fn list_options(
    profile: Option<&Path>,
    query_patterns: &[&str],
    url: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = open_settings(profile)?;
    let url = parse_url(url)?;

    let names = if query_patterns.is_empty() {
        settings.options()
    } else {
        query_options(&settings.options(), query_patterns)
            .map_err(|e| anyhow::anyhow!("Failed to apply query: {}", e))?
    };

    let mut output = serde_json::Map::new();
    for name in names {
        let Some(identifier) = settings.option_identifier(&name) else {
            continue;
        };

        let value = match &url {
            Some(url) => settings.get_option_for_url(identifier, url),
            None => settings.get_option(identifier),
        };

        if let Some(value) = value {
            output.insert(name, serde_json::to_value(&value)?);
        }
    }

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(output))?;
    println!("{}", json);
    Ok(())
}

/// Print one effective option value, raw by default
pub fn get_option(
    profile: Option<&Path>,
    name: &str,
    url: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = open_settings(profile)?;
    let url = parse_url(url)?;

    let identifier = settings
        .option_identifier(name)
        .ok_or_else(|| anyhow::anyhow!("Option '{}' not found", name))?;

    let value = match &url {
        Some(url) => settings.get_option_for_url(identifier, url),
        None => settings.get_option(identifier),
    }
    .ok_or_else(|| anyhow::anyhow!("Option '{}' not found", name))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", value);
    }
    Ok(())
}

/// Write an option value globally, for a URL's host, or for an explicit scope
pub fn set_option(
    profile: Option<&Path>,
    name: &str,
    raw: &str,
    url: Option<&str>,
    host: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = open_settings(profile)?;

    let identifier = settings
        .option_identifier(name)
        .ok_or_else(|| anyhow::anyhow!("Option '{}' not found", name))?;
    let kind = settings
        .option_definition(identifier)
        .map(|definition| definition.kind)
        .ok_or_else(|| anyhow::anyhow!("Option '{}' not found", name))?;

    let value = SettingValue::from_ini_str(raw, kind).ok_or_else(|| {
        anyhow::anyhow!("'{}' is not a valid {} value for '{}'", raw, kind, name)
    })?;

    match (url, host) {
        (Some(url), _) => {
            let url = parse_one_url(url)?;
            settings.set_value(identifier, Some(value), Some(&url))?;
        }
        (None, Some(host)) => {
            settings.set_override(identifier, Some(value), &Scope::new(host))?;
        }
        (None, None) => {
            settings.set_value(identifier, Some(value), None)?;
        }
    }
    Ok(())
}

/// Remove a global value, one override entry, or a whole scope's overrides
pub fn unset_option(
    profile: Option<&Path>,
    name: Option<&str>,
    url: Option<&str>,
    host: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = open_settings(profile)?;

    let scope = match (url, host) {
        (Some(url), _) => {
            let url = parse_one_url(url)?;
            let scope = Scope::from_url(&url)
                .ok_or_else(|| anyhow::anyhow!("URL '{}' has no host to scope by", url))?;
            Some(scope)
        }
        (None, Some(host)) => Some(Scope::new(host)),
        (None, None) => None,
    };

    match (scope, name) {
        (Some(scope), name) => settings.remove_override_in_scope(&scope, name)?,
        (None, Some(name)) => {
            let identifier = settings
                .option_identifier(name)
                .ok_or_else(|| anyhow::anyhow!("Option '{}' not found", name))?;
            settings.set_value(identifier, None, None)?;
        }
        (None, None) => {
            return Err(
                anyhow::anyhow!("Nothing to remove: give an option name, --url or --host").into(),
            );
        }
    }
    Ok(())
}

/// List override scopes, or the entries of one scope, as JSON
pub fn show_overrides(
    profile: Option<&Path>,
    scope: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = open_settings(profile)?;

    let json = match scope {
        Some(scope) => {
            let mut object = serde_json::Map::new();
            for (name, value) in settings.overrides_in_scope(&Scope::new(scope)) {
                object.insert(name, serde_json::to_value(&value)?);
            }
            serde_json::to_string_pretty(&serde_json::Value::Object(object))?
        }
        None => serde_json::to_string_pretty(&settings.override_scopes())?,
    };

    println!("{}", json);
    Ok(())
}

/// Print the settings diagnostic report
pub fn show_report(profile: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let settings = open_settings(profile)?;
    print!("{}", generate_report(&settings));
    Ok(())
}

fn open_settings(profile: Option<&Path>) -> Result<SettingsManager, Box<dyn std::error::Error>> {
    let info = find_profile_dir(profile).map_err(|e| {
        anyhow::anyhow!(
            "Failed to locate the Otter profile: {}.\n\
             Pass --profile <dir> or set OTTER_PROFILE.",
            e
        )
    })?;

    Ok(SettingsManager::new(&info.path))
}

fn parse_url(url: Option<&str>) -> Result<Option<Url>, Box<dyn std::error::Error>> {
    match url {
        Some(raw) => Ok(Some(parse_one_url(raw)?)),
        None => Ok(None),
    }
}

fn parse_one_url(raw: &str) -> Result<Url, Box<dyn std::error::Error>> {
    Url::parse(raw).map_err(|e| anyhow::anyhow!("Invalid URL '{}': {}", raw, e).into())
}
