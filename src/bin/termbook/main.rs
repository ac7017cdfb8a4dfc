/*
 * Copyright 2019-2020 Wren Powell
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! A command-line front end for a `termbook` dictionary.
//!
//! Each invocation opens the dictionary file, performs one operation, and exits. The file is
//! created with the built-in terms the first time it is opened.
//!
//! Usage:
//!   termbook search zip
//!   termbook list --genre itertools
//!   termbook add chain -d "Chain iterables" -e "chain([1], [2])" -g itertools
//!   termbook edit chain --rename chain.from_iterable
//!   termbook remove chain.from_iterable

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use termbook::repo::{
    Entry, EntryRepo, GenreFilter, OpenOptions, RenamePolicy, ALL_GENRES, UNCLASSIFIED,
};
use termbook::store::{DataStore, FileConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod view;

#[derive(Parser, Debug)]
#[command(name = "termbook", version)]
#[command(about = "A personal dictionary of programming terms")]
struct Args {
    /// Path of the dictionary file
    #[arg(short, long, env = "TERMBOOK_FILE", default_value = "dictionary_data.json")]
    file: PathBuf,

    /// Let a rename replace an entry which already has the new key
    #[arg(long)]
    allow_rename_overwrite: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a term by its exact key
    Search { key: String },

    /// List terms, optionally only those of one genre
    List {
        /// The genre to list, or "all"
        #[arg(short, long, default_value = "all")]
        genre: GenreFilter,
    },

    /// List the genres in use
    Genres,

    /// Add a new term
    Add {
        key: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// A code example
        #[arg(short, long, default_value = "")]
        example: String,

        #[arg(short, long, default_value = UNCLASSIFIED)]
        genre: String,
    },

    /// Edit a term; fields which are not given keep their current value
    Edit {
        /// The key of the term to edit
        key: String,

        /// Move the term to a new key
        #[arg(long)]
        rename: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// A code example
        #[arg(short, long)]
        example: Option<String>,

        #[arg(short, long)]
        genre: Option<String>,
    },

    /// Remove a term
    Remove { key: String },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let policy = if args.allow_rename_overwrite {
        RenamePolicy::Overwrite
    } else {
        RenamePolicy::Reject
    };
    let store_config = FileConfig::new(&args.file);
    let mut repo = OpenOptions::new()
        .rename_policy(policy)
        .open(&store_config)
        .with_context(|| format!("could not open '{}'", args.file.display()))?;
    debug!(path = %args.file.display(), entries = repo.len(), "Opened dictionary.");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut repo, args.command, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Refuse a genre which could never be listed on its own.
fn check_genre(genre: &str) -> Result<()> {
    if genre == ALL_GENRES {
        bail!("'{}' selects every genre and cannot be used as a genre", ALL_GENRES);
    }
    Ok(())
}

fn run<S: DataStore>(
    repo: &mut EntryRepo<S>,
    command: Command,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Search { key } => match repo.get(&key) {
            Some(entry) => view::entry(out, &key, entry)?,
            None => writeln!(out, "'{}' is not in the dictionary.", key)?,
        },
        Command::List { genre } => view::listing(out, &genre, repo.list(&genre))?,
        Command::Genres => view::genres(out, repo.genre_options())?,
        Command::Add {
            key,
            description,
            example,
            genre,
        } => {
            check_genre(&genre)?;
            repo.insert(key.as_str(), Entry::new(description, example, genre))
                .with_context(|| format!("could not add '{}'", key))?;
            writeln!(out, "Added '{}'.", key)?;
        }
        Command::Edit {
            key,
            rename,
            description,
            example,
            genre,
        } => {
            let current = repo
                .get(&key)
                .cloned()
                .with_context(|| format!("could not edit '{}': it is not in the dictionary", key))?;
            if let Some(genre) = &genre {
                check_genre(genre)?;
            }
            let entry = Entry {
                genre: genre.unwrap_or(current.genre),
                description: description.unwrap_or(current.description),
                example: example.unwrap_or(current.example),
            };
            let new_key = rename.unwrap_or_else(|| key.clone());
            repo.update(&key, new_key.as_str(), entry)
                .with_context(|| format!("could not update '{}'", key))?;
            writeln!(out, "Updated '{}'.", new_key)?;
        }
        Command::Remove { key } => {
            repo.remove(&key)
                .with_context(|| format!("could not remove '{}'", key))?;
            writeln!(out, "Removed '{}'.", key)?;
        }
    }
    Ok(())
}
