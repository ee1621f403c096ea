//! Config 명령어

use tc_core::TeamCorner;

use crate::OutputFormat;

pub fn run(app: &TeamCorner, format: OutputFormat) -> anyhow::Result<()> {
    let config = app.config();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("Project:       {}", config.name);
    println!("Environment:   {}", if config.production { "production" } else { "development" });
    println!("Database:      {}", mask_uri(&config.database_uri));
    println!("Admin email:   {}", config.admin_email);
    println!("ID strategy:   {}", config.id_strategy.as_str());
    println!("Cookie secure: {}", config.cookie.secure);
    println!("Cookie maxAge: {}s", config.cookie.max_age_secs);
    println!("Lists:         {}", app.schema().list_names().join(", "));

    Ok(())
}

fn mask_uri(uri: &str) -> String {
    // credentials 마스킹
    if let (Some(proto_end), Some(at_pos)) = (uri.find("://"), uri.rfind('@')) {
        if at_pos > proto_end {
            return format!("{}****{}", &uri[..proto_end + 3], &uri[at_pos..]);
        }
    }
    uri.to_string()
}
