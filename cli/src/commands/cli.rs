use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "kitbag", version, about = "Small text, JSON, HTTP and sliding-window utilities")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to load instead of the default search path.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log filter, e.g. "debug" or "kitbag_core=trace". `RUST_LOG` still wins.
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert identifiers between naming styles.
    Case(CaseArgs),
    /// Print a random alphanumeric string.
    Rand(RandArgs),
    /// Compare two JSON documents.
    Json(JsonArgs),
    /// Sliding-window sum over numbers read from stdin.
    Window(WindowArgs),
    /// GET a URL and print the body.
    Get(GetArgs),
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    Snake,
    Slug,
    Camel,
    Pascal,
    Slugify,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CaseArgs {
    #[arg(value_enum)]
    pub style: CaseStyle,

    pub text: String,

    /// Separator for `slugify`.
    #[arg(long, default_value = "_")]
    pub sep: String,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct RandArgs {
    pub n: usize,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonOp {
    Equal,
    Contains,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct JsonArgs {
    #[arg(value_enum)]
    pub op: JsonOp,

    pub left: String,

    pub right: String,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct WindowArgs {
    /// Window size; defaults to `queue.default_capacity` from config.
    #[arg(long)]
    pub capacity: Option<usize>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct GetArgs {
    pub url: String,

    /// Extra request header (KEY=VALUE). Can be specified multiple times.
    #[arg(long = "header", action = clap::ArgAction::Append)]
    pub headers: Vec<String>,
}
