use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(name = "workout tracker server")]
pub struct Cli {
    #[clap(long, env, default_value = "workouts.sqlite")]
    pub sqlite_connection_string: String,
    #[clap(long, env, default_value = "8080")]
    pub port: u16,
    #[clap(long, env, default_value = "127.0.0.1")]
    pub bind_addr: String,

    /// Request header the upstream identity provider fills with the numeric
    /// id of the authenticated user
    #[arg(long, env, default_value = "x-authenticated-user")]
    pub identity_header: String,

    /// Years the month view accepts
    #[arg(long, env, value_delimiter = ',', default_value = "2025,2026")]
    pub allowed_years: Vec<i32>,

    /// Origin allowed to call the API from a browser. CORS is off when unset
    #[arg(long, env)]
    pub cors_origin: Option<String>,

    /// Deletes the database before starting the main program for debug purposes
    #[arg(long, env, default_value = "false")]
    pub debug_delete_database: bool,
}

impl Cli {
    /// Defaults for everything except the database location
    pub fn with_database<S: Into<String>>(sqlite_connection_string: S) -> Self {
        let mut cli = Cli::parse_from(["server"]);
        cli.sqlite_connection_string = sqlite_connection_string.into();
        cli
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["server"]);
        assert_eq!(cli.identity_header, "x-authenticated-user");
        assert_eq!(cli.allowed_years, vec![2025, 2026]);
        assert_eq!(cli.cors_origin, None);
    }

    #[test]
    fn test_allowed_years_list() {
        let cli = Cli::parse_from(["server", "--allowed-years", "2024,2025,2026"]);
        assert_eq!(cli.allowed_years, vec![2024, 2025, 2026]);
    }
}
