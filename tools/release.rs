//! Release helper: bumps the crate version, prepends a CHANGELOG entry from
//! the git log, tags, and optionally publishes.
//!
//! Usage: cargo run --bin release -- <new-version>

use chrono::Local;
use std::io::{self, Write};
use std::process::Command;
use std::{env, fs};
use toml_edit::{DocumentMut, Item};

type Error = Box<dyn std::error::Error>;

fn git(args: &[&str]) -> Result<String, Error> {
    let output = Command::new("git").args(args).output()?;
    if !output.status.success() {
        return Err(format!("git {} failed", args.join(" ")).into());
    }
    Ok(String::from_utf8(output.stdout)?.trim().to_string())
}

fn latest_tag() -> Option<String> {
    git(&["describe", "--tags", "--abbrev=0"]).ok()
}

fn commits_since(tag: Option<&str>) -> Result<String, Error> {
    let range;
    let mut args = vec!["log", "--pretty=format:- %s"];
    if let Some(tag) = tag {
        range = format!("{tag}..HEAD");
        args.push(&range);
    }
    git(&args)
}

fn confirm(message: &str) -> Result<bool, io::Error> {
    print!("{message} (y/n): ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

fn bump_version(new_version: &str) -> Result<String, Error> {
    let mut doc = fs::read_to_string("Cargo.toml")?.parse::<DocumentMut>()?;
    let current = doc["package"]["version"]
        .as_str()
        .ok_or("no package.version in Cargo.toml")?
        .to_string();
    doc["package"]["version"] = Item::from(new_version);
    fs::write("Cargo.toml", doc.to_string())?;
    Ok(current)
}

fn prepend_changelog(version: &str, notes: &str) -> Result<(), Error> {
    let existing = fs::read_to_string("CHANGELOG.md").unwrap_or_default();
    let date = Local::now().format("%Y-%m-%d");
    let entry = format!("## {version} — {date}\n\n{notes}\n\n{existing}");
    fs::write("CHANGELOG.md", entry)?;
    Ok(())
}

fn run(cmd: &str) -> Result<(), Error> {
    println!("Executing: {cmd}");
    let status = Command::new("sh").arg("-c").arg(cmd).status()?;
    if !status.success() {
        return Err(format!("command failed: {cmd}").into());
    }
    Ok(())
}

fn main() -> Result<(), Error> {
    let new_version = env::args()
        .nth(1)
        .ok_or("usage: cargo run --bin release -- <new-version>")?;

    let previous_tag = latest_tag();
    let notes = commits_since(previous_tag.as_deref())?;
    if notes.is_empty() {
        println!("Warning: no commits since {}.", previous_tag.as_deref().unwrap_or("start"));
    } else {
        println!("Release notes:\n{notes}");
    }

    if !confirm(&format!("Release version {new_version}?"))? {
        println!("Release aborted.");
        return Ok(());
    }

    let old_version = bump_version(&new_version)?;
    println!("Version: {old_version} -> {new_version}");
    prepend_changelog(&new_version, &notes)?;

    run("cargo check")?;
    run("git add Cargo.toml Cargo.lock CHANGELOG.md")?;
    run(&format!("git commit -m \"Bump version to {new_version}\""))?;
    run(&format!("git tag -a v{new_version} -m \"Version {new_version}\""))?;
    run("git push && git push --tags")?;

    if confirm("Publish to crates.io?")? {
        run("cargo publish")?;
    } else {
        println!("Skipping crates.io publishing.");
    }

    println!("Released {new_version}.");
    Ok(())
}
