use clap::Parser;
use tikhub_client::DEFAULT_BASE_URL;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Send one GET to the TikHub API", long_about = None)]
pub(crate) struct CliArguments {
    /// Endpoint path, e.g. /api/v1/douyin/web/fetch_one_video_v2
    pub path: String,

    #[arg(short, long, env = "TIKHUB_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(short, long, env = "TIKHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Query parameter as key=value, repeatable
    #[arg(short, long = "query", value_parser = parse_key_value)]
    pub query: Vec<(String, String)>,

    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Fail on statuses other than 200 and 422 instead of printing nothing
    #[arg(short, long)]
    pub strict: bool,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{}`", raw))
}
