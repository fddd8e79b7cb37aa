use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reqwest::Client;

use github_repos_login::demos::{
    self, NewUser, BASIC_AUTH_PROBES, HTTPBIN_BASE_URL, JSONPLACEHOLDER_BASE_URL, REQRES_BASE_URL,
};

#[derive(Parser, Debug)]
#[command(name = "http-demos", about = "One-shot HTTP client examples")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// GET with query parameters
    Query {
        #[arg(long, default_value = JSONPLACEHOLDER_BASE_URL)]
        base_url: String,
        #[arg(long, default_value_t = 1)]
        user_id: u32,
    },
    /// POST a JSON body
    PostJson {
        #[arg(long, default_value = REQRES_BASE_URL)]
        base_url: String,
        #[arg(long, default_value = "Kalyan")]
        name: String,
        #[arg(long, default_value = "DevOps Engineer")]
        job: String,
    },
    /// GET with HTTP Basic authentication, once with wrong and twice with right credentials
    BasicAuth {
        #[arg(long, default_value = HTTPBIN_BASE_URL)]
        base_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let client = Client::new();

    match args.command {
        Command::Query { base_url, user_id } => {
            let outcome = demos::fetch_user_posts(&client, &base_url, user_id)
                .await
                .with_context(|| format!("failed to fetch posts from {base_url}"))?;
            println!("Final URL: {}", outcome.final_url);
            println!("Data: {}", outcome.data);
        }
        Command::PostJson {
            base_url,
            name,
            job,
        } => {
            let user = NewUser {
                name: &name,
                job: &job,
            };
            let outcome = demos::create_user(&client, &base_url, &user)
                .await
                .with_context(|| format!("failed to create user at {base_url}"))?;
            println!("<Response [{}]>", outcome.status.as_u16());
            println!("{}", outcome.body);
        }
        Command::BasicAuth { base_url } => {
            for probe in BASIC_AUTH_PROBES.iter() {
                let outcome = demos::probe_basic_auth(&client, &base_url, probe)
                    .await
                    .with_context(|| {
                        format!(
                            "basic auth probe for {}/{} failed",
                            probe.endpoint_user, probe.endpoint_password
                        )
                    })?;
                println!(
                    "{} on /basic-auth/{}/{} -> <Response [{}]>",
                    outcome.probe.username,
                    outcome.probe.endpoint_user,
                    outcome.probe.endpoint_password,
                    outcome.status.as_u16()
                );
            }
        }
    }

    Ok(())
}
