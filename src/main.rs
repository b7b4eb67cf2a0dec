mod cli;
mod commands;

use cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let profile = cli.profile.as_deref();

    match cli.command {
        cli::Commands::Profile => commands::show_profile(profile),
        cli::Commands::List { query, url } => {
            let patterns: Vec<&str> = query.iter().map(|pattern| pattern.as_str()).collect();
            commands::list_options(profile, &patterns, url.as_deref())
        }
        cli::Commands::Get { name, url, json } => {
            commands::get_option(profile, &name, url.as_deref(), json)
        }
        cli::Commands::Set {
            name,
            value,
            url,
            host,
        } => commands::set_option(profile, &name, &value, url.as_deref(), host.as_deref()),
        cli::Commands::Unset { name, url, host } => {
            commands::unset_option(profile, name.as_deref(), url.as_deref(), host.as_deref())
        }
        cli::Commands::Overrides { scope } => commands::show_overrides(profile, scope.as_deref()),
        cli::Commands::Report => commands::show_report(profile),
    }
}
