use clap::Parser;

#[derive(Parser)]
#[command(name = "scrub")]
#[command(
    about = "Rewrite tracked files to strip usernames and home paths, then stage the result",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Username token to replace in file contents
    #[arg(long, default_value = "USER")]
    pub username: String,

    /// Value written in place of the username token
    #[arg(long, default_value = "USER")]
    pub replacement: String,
}
