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

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The text which selects every genre.
///
/// An entry whose genre is literally this text can only be listed together with every other
/// entry, so the `termbook` command refuses it as a genre.
pub const ALL_GENRES: &str = "all";

/// A filter used to list the entries of one genre.
///
/// This parses from text, where [`ALL_GENRES`] selects every entry and anything else selects a
/// single genre by exact match.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub enum GenreFilter {
    /// Match entries of every genre.
    #[default]
    All,

    /// Match entries whose genre is exactly this string.
    Genre(String),
}

impl GenreFilter {
    /// Return whether an entry with the given `genre` passes this filter.
    pub fn matches(&self, genre: &str) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Genre(selected) => selected == genre,
        }
    }
}

impl FromStr for GenreFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == ALL_GENRES {
            GenreFilter::All
        } else {
            GenreFilter::Genre(s.to_owned())
        })
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreFilter::All => f.write_str(ALL_GENRES),
            GenreFilter::Genre(genre) => f.write_str(genre),
        }
    }
}
