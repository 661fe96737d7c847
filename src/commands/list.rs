//! # List Command Implementation
//!
//! Prints every repository declared in the manifest with its type and
//! configured source. Repositories the project lists under
//! `project.repositories` are marked. Nothing is cloned or fetched.

use anyhow::Result;
use clap::Args;

use super::Context;
use reposync::config::RepoVars;
use reposync::output::emoji;

/// List the repositories declared in the manifest
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show the repositories listed in `project.repositories`
    #[arg(long)]
    pub used: bool,
}

fn source(vars: &RepoVars) -> String {
    let get = |key: &str| vars.get(key).map(String::as_str).unwrap_or("");
    match get("type") {
        "github" => {
            let server = match get("server") {
                "" => "github.com",
                s => s,
            };
            format!("{}/{}/{}", server, get("user"), get("repo"))
        }
        "git" => get("url").to_string(),
        "local" => get("path").to_string(),
        _ => String::new(),
    }
}

pub fn execute(ctx: &Context, args: ListArgs) -> Result<()> {
    let manifest = ctx.load_manifest()?;

    if let Some(name) = &manifest.project_name {
        println!("{} {}", emoji(&ctx.output, "📦", "[PROJECT]"), name);
    }

    let mut shown = 0;
    for (name, vars) in manifest.repos() {
        let used = manifest.project_repositories.iter().any(|r| r == name);
        if args.used && !used {
            continue;
        }
        let marker = if used { "*" } else { " " };
        let repo_type = vars.get("type").map(String::as_str).unwrap_or("?");
        println!("{} {:<20} {:<8} {}", marker, name, repo_type, source(vars));
        shown += 1;
    }

    if shown == 0 {
        println!("No repositories declared in {}", ctx.manifest.display());
    }
    Ok(())
}
